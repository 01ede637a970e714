//! # Utilities
//!
//! A module for shared formatting helpers.

use chrono::{DateTime, Local};

/// Formats a countdown field as a zero-padded two-digit string. Values of
/// 100 or more keep their natural width instead of being truncated.
pub fn format_field(value: u64) -> String {
    format!("{value:02}")
}

/// Human-readable form of the event deadline.
pub fn format_target(target: &DateTime<Local>) -> String {
    target.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn single_digits_are_zero_padded() {
        assert_eq!(format_field(5), "05");
        assert_eq!(format_field(0), "00");
    }

    #[test]
    fn wide_values_keep_their_natural_width() {
        assert_eq!(format_field(123), "123");
    }

    #[test]
    fn target_renders_as_date_and_time() {
        let target = Local.with_ymd_and_hms(2025, 10, 31, 23, 59, 59).unwrap();
        assert_eq!(format_target(&target), "2025-10-31 23:59:59");
    }
}
