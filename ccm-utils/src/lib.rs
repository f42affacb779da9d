//! Shared utility functions for CCM crates.

/// Feed timestamp helpers
pub mod dates {
    use chrono::NaiveDateTime;

    /// Timestamp format used by the case feed's `updatedAt` field: "YYYY-MM-DD HH:MM:SS"
    pub const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// ISO-8601 variant some feed mirrors emit instead.
    const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Parse a feed `updatedAt` value.
    ///
    /// Accepts both the space-separated and the `T`-separated form; fractional
    /// seconds are not supported.
    pub fn parse_feed_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim();
        match NaiveDateTime::parse_from_str(s, FEED_TIMESTAMP_FORMAT) {
            Ok(ts) => Ok(ts),
            Err(_) => Ok(NaiveDateTime::parse_from_str(s, ISO_TIMESTAMP_FORMAT)?),
        }
    }

    /// Format a timestamp as "YYYY-MM-DD HH:MM" for display
    pub fn format_timestamp(ts: &NaiveDateTime) -> String {
        ts.format("%Y-%m-%d %H:%M").to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_parse_feed_timestamp() {
            let ts = parse_feed_timestamp("2020-03-26 18:16:43").unwrap();
            let expected = NaiveDate::from_ymd_opt(2020, 3, 26)
                .unwrap()
                .and_hms_opt(18, 16, 43)
                .unwrap();
            assert_eq!(ts, expected);
        }

        #[test]
        fn test_parse_iso_timestamp() {
            let ts = parse_feed_timestamp("2020-03-26T18:16:43").unwrap();
            assert_eq!(format_timestamp(&ts), "2020-03-26 18:16");
        }

        #[test]
        fn test_parse_garbage_fails() {
            assert!(parse_feed_timestamp("yesterday").is_err());
            assert!(parse_feed_timestamp("").is_err());
        }
    }
}

/// Numeric formatting helpers
pub mod numbers {
    /// Format a value with a fixed number of decimal places, e.g. `5.00`.
    pub fn format_fixed(value: f64, places: usize) -> String {
        format!("{:.*}", places, value)
    }

    /// `part / whole * 100`, or `None` when `whole` is zero.
    pub fn percentage(part: u64, whole: u64) -> Option<f64> {
        if whole == 0 {
            return None;
        }
        Some(part as f64 / whole as f64 * 100.0)
    }

}
