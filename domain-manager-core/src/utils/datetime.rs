//! Datetime helpers for `createdDate` values.
//!
//! The remote collection stores creation time as a bare Unix number. Most
//! records carry seconds, but hand-seeded ones sometimes carry milliseconds.

use chrono::{DateTime, Local, Utc};

/// Placeholder shown when a record has no usable creation time.
pub const MISSING_DATE: &str = "-";

/// Parses a Unix timestamp with second/millisecond auto-detection.
///
/// `0` and negative values are treated as absent.
#[must_use]
pub fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    if ts <= 0 {
        return None;
    }
    // Values larger than 10^11 are interpreted as milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

/// Formats a `createdDate` for display in the local timezone.
#[must_use]
pub fn format_created_date(ts: Option<i64>) -> String {
    ts.and_then(parse_unix_timestamp).map_or_else(
        || MISSING_DATE.to_string(),
        |dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_and_millis_agree() {
        let secs = parse_unix_timestamp(1_700_000_000).unwrap();
        let millis = parse_unix_timestamp(1_700_000_000_000).unwrap();
        assert_eq!(secs, millis);
    }

    #[test]
    fn zero_is_absent() {
        assert!(parse_unix_timestamp(0).is_none());
        assert_eq!(format_created_date(Some(0)), MISSING_DATE);
        assert_eq!(format_created_date(None), MISSING_DATE);
    }

    #[test]
    fn formats_present_value() {
        let s = format_created_date(Some(1_700_000_000));
        assert_eq!(s.len(), "2023-11-14 22:13".len());
        assert!(s.starts_with("2023-11-1"));
    }
}
