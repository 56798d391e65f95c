//! Timestamp parsing and display for candle data.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse the backend's candle `x` field.
///
/// Accepts RFC 3339, naive date-times (read as UTC) and bare dates (UTC
/// midnight). Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Crosshair date readout: `YYYY-MM-DD`.
pub fn date_label(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_bare_date_is_utc_midnight() {
        let ts = parse_timestamp("2024-01-01").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = parse_timestamp("2024-01-01T10:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-05T09:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-05 09:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-05T09:30").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-05T09:30:00.000").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-01").is_none());
    }

    #[test]
    fn test_date_label() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap();
        assert_eq!(date_label(&ts), "2024-01-02");
    }
}
