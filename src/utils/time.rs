use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::Serializer;

use crate::utils::error::AppError;

/// Wire format for created_at/updated_at on every resource except entradas.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current UTC wall-clock time, truncated to what a TIMESTAMP column holds.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde helper for timestamp fields rendered as `YYYY-MM-DD HH:MM:SS`.
pub fn serialize_timestamp<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}

/// Parses an ISO-8601 timestamp from a request body.
///
/// Accepts the `T`-separated and space-separated variants, with or without
/// fractional seconds, and a bare date (midnight).
pub fn parse_timestamp(field: &str, raw: &str) -> Result<NaiveDateTime, AppError> {
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }
    Err(AppError::Validation(format!(
        "Formato de fecha inválido para '{}': {}",
        field, raw
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_t_separated_timestamps() {
        let parsed = parse_timestamp("start_time", "2025-05-01T10:30:00").unwrap();
        assert_eq!(format_timestamp(&parsed), "2025-05-01 10:30:00");
    }

    #[test]
    fn parses_space_separated_timestamps() {
        let parsed = parse_timestamp("start_time", "2025-05-01 10:30:00").unwrap();
        assert_eq!(format_timestamp(&parsed), "2025-05-01 10:30:00");
    }

    #[test]
    fn parses_fractional_seconds() {
        let parsed = parse_timestamp("end_time", "2025-05-01T10:30:00.125").unwrap();
        assert_eq!(format_timestamp(&parsed), "2025-05-01 10:30:00");
    }

    #[test]
    fn parses_bare_dates_as_midnight() {
        let parsed = parse_timestamp("start_time", "2025-05-01").unwrap();
        assert_eq!(format_timestamp(&parsed), "2025-05-01 00:00:00");
    }

    #[test]
    fn rejects_malformed_input() {
        let err = parse_timestamp("start_time", "next tuesday").unwrap_err();
        match err {
            AppError::Validation(message) => {
                assert!(message.contains("start_time"));
                assert!(message.contains("next tuesday"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
