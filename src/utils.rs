use chrono::NaiveDateTime;

/// Reformats a backend `dataHora` stamp for display. The backend emits
/// local, zone-less timestamps; anything that does not parse is shown raw.
pub fn format_timestamp(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_timestamps_are_reformatted() {
        assert_eq!(format_timestamp("2025-10-20T14:30:00"), "20/10/2025 14:30");
    }

    #[test]
    fn unparseable_stamps_pass_through() {
        assert_eq!(format_timestamp("ontem"), "ontem");
        assert_eq!(format_timestamp(""), "");
    }
}
