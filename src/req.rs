// keep in sync with the backend API (see request.rs for the endpoints)
use std::collections::BTreeMap;

/// All readings the backend currently holds for one greenhouse.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct GreenhouseReadings {
    pub estufa_id: String,
    pub leituras: Vec<Reading>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Reading {
    pub tipo: String,
    #[serde(rename = "sensorRef")]
    pub sensor_ref: String,
    pub valor: f64,
    #[serde(rename = "dataHora")]
    pub data_hora: String,
}

/// A threshold violation computed by the backend. `faixa_ideal` is already
/// a display string, not a pair of numbers.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Alert {
    pub tipo: String,
    pub estufa_id: String,
    pub valor_lido: f64,
    pub faixa_ideal: String,
    pub sensor_id: String,
    #[serde(rename = "dataHora")]
    pub data_hora: String,
}

/// Validation bounds for one sensor type.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rule {
    pub min: f64,
    pub max: f64,
}

// BTreeMap so the configuration form renders in a stable order.
pub type RuleSet = BTreeMap<String, Rule>;

#[derive(Debug, serde::Deserialize)]
pub struct Ack {
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
pub struct ErrorDetail {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_deserialize_from_wire_shape() {
        let json = r#"[
            {
                "estufa_id": "EST01",
                "leituras": [
                    {"tipo": "temperatura", "sensorRef": "S01", "valor": 22.5, "dataHora": "2025-10-20T14:30:00"},
                    {"tipo": "co2", "sensorRef": "S07", "valor": 800, "dataHora": "2025-10-20T14:30:00"}
                ]
            }
        ]"#;

        let estufas: Vec<GreenhouseReadings> = serde_json::from_str(json).unwrap();
        assert_eq!(estufas.len(), 1);
        assert_eq!(estufas[0].estufa_id, "EST01");
        assert_eq!(estufas[0].leituras.len(), 2);
        assert_eq!(estufas[0].leituras[0].sensor_ref, "S01");
        assert_eq!(estufas[0].leituras[1].valor, 800.0);
    }

    #[test]
    fn alerts_deserialize_from_wire_shape() {
        let json = r#"[
            {
                "tipo": "ph",
                "estufa_id": "EST01",
                "valor_lido": 5.0,
                "faixa_ideal": "5.5 - 6.5",
                "sensor_id": "S04",
                "dataHora": "2025-11-10T14:31:00"
            }
        ]"#;

        let alerts: Vec<Alert> = serde_json::from_str(json).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].valor_lido, 5.0);
        assert_eq!(alerts[0].faixa_ideal, "5.5 - 6.5");
    }

    #[test]
    fn rule_set_round_trips_as_type_keyed_map() {
        let json = r#"{"temperatura": {"min": 10.0, "max": 30.0}, "ph": {"min": 5.5, "max": 6.5}}"#;
        let rules: RuleSet = serde_json::from_str(json).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules["temperatura"].min, 10.0);
        assert_eq!(rules["temperatura"].max, 30.0);

        let back = serde_json::to_value(&rules).unwrap();
        assert_eq!(back["ph"]["min"], 5.5);
        assert_eq!(back["ph"]["max"], 6.5);
    }

    #[test]
    fn error_body_exposes_description() {
        let json = r#"{"error": {"code": 400, "name": "Bad Request", "description": "XML falhou na validação do esquema (XSD)"}}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert!(body.error.description.contains("XSD"));
    }
}
