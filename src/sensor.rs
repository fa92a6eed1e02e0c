//! Display names and unit suffixes for the sensor types the backend knows.

const DISPLAY: &[(&str, &str, &str)] = &[
    ("temperatura", "Temperatura", "°C"),
    ("umidadear", "Umidade do Ar", "%"),
    ("umidadesolo", "Umidade do Solo", "%"),
    ("ph", "pH", "pH"),
    ("ce", "Condutividade Elétrica (CE)", "mS/cm"),
    ("luminosidade", "Luminosidade", "lux"),
    ("co2", "CO₂", "ppm"),
];

/// Human-readable label for a sensor-type tag. Unknown tags are shown as-is.
pub fn label_for(tag: &str) -> &str {
    DISPLAY
        .iter()
        .find(|(key, _, _)| *key == tag)
        .map(|(_, label, _)| *label)
        .unwrap_or(tag)
}

/// Unit suffix for a sensor-type tag. Unknown tags get no unit.
pub fn unit_for(tag: &str) -> &'static str {
    DISPLAY
        .iter()
        .find(|(key, _, _)| *key == tag)
        .map(|(_, _, unit)| *unit)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_resolve_to_label_and_unit() {
        assert_eq!(label_for("temperatura"), "Temperatura");
        assert_eq!(unit_for("temperatura"), "°C");
        assert_eq!(label_for("ce"), "Condutividade Elétrica (CE)");
        assert_eq!(unit_for("luminosidade"), "lux");
    }

    #[test]
    fn unknown_tag_falls_back_to_raw_tag_and_empty_unit() {
        assert_eq!(label_for("salinidade"), "salinidade");
        assert_eq!(unit_for("salinidade"), "");
    }

    #[test]
    fn every_table_entry_has_a_nonempty_unit() {
        for (tag, _, _) in DISPLAY {
            assert!(!unit_for(tag).is_empty());
        }
    }
}
