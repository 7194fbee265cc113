//! Time utilities

use chrono::{DateTime, Utc};

/// Current time as seconds since the Unix epoch
pub fn epoch_seconds() -> i64 {
    Utc::now().timestamp()
}

/// Format epoch seconds as a human-readable UTC string
///
/// Out-of-range values render as "invalid time" rather than panicking;
/// `submitted_at` comes from the database and is not trusted here.
pub fn format_epoch(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%a %b %e %H:%M:%S %Y").to_string(),
        None => "invalid time".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch() {
        // 2024-01-15T12:00:00Z
        assert_eq!(format_epoch(1705320000), "Mon Jan 15 12:00:00 2024");
    }

    #[test]
    fn test_format_epoch_out_of_range() {
        assert_eq!(format_epoch(i64::MAX), "invalid time");
    }

    #[test]
    fn test_epoch_seconds_monotonic_enough() {
        let a = epoch_seconds();
        let b = epoch_seconds();
        assert!(b >= a);
    }
}
