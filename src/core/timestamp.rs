use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

pub const INVALID_DATE: &str = "Invalid Date";

/// Parses the timestamp shapes a `datetime-local` input or a JSON seed produces.
///
/// Offset-bearing RFC 3339 values keep their wall-clock time; date-only values land on midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Renders `MM/DD/YYYY, HH:MM` on a 24-hour clock, or `Invalid Date`.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(parsed) => parsed.format("%m/%d/%Y, %H:%M").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_datetime_local_values() {
        assert_eq!(format_timestamp("2024-01-05T09:07"), "01/05/2024, 09:07");
        assert_eq!(format_timestamp("2024-12-31T23:59:30"), "12/31/2024, 23:59");
    }

    #[test]
    fn formats_rfc3339_in_its_own_offset() {
        assert_eq!(format_timestamp("2024-06-01T18:45:00+02:00"), "06/01/2024, 18:45");
        assert_eq!(format_timestamp("2024-06-01T18:45:00Z"), "06/01/2024, 18:45");
    }

    #[test]
    fn date_only_lands_on_midnight() {
        assert_eq!(format_timestamp("2023-02-28"), "02/28/2023, 00:00");
    }

    #[test]
    fn garbage_renders_invalid_date() {
        assert_eq!(format_timestamp(""), INVALID_DATE);
        assert_eq!(format_timestamp("next tuesday"), INVALID_DATE);
        assert!(parse_timestamp("2024-13-01T00:00").is_none());
    }
}
