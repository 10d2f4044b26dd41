//! Timestamp parsing for Steam's price history labels.

use chrono::DateTime;
use regex::Regex;

lazy_static::lazy_static! {
    /// `"Aug 13 2020 01: +0"` — month, day, year, hour, UTC offset.
    static ref HISTORY_LABEL: Regex =
        Regex::new(r"^([A-Za-z]{3}) ([0-9]{2}) ([0-9]{4}) ([0-9]{2}): \+([0-9]+)$")
            .expect("history label pattern is valid");
}

/// Parse a price history label into Unix epoch milliseconds (UTC).
///
/// The whole label must match `"<Mon> <DD> <YYYY> <HH>: +<offset>"`; anything
/// else, including impossible dates, yields `None`.
pub fn parse_history_timestamp(label: &str) -> Option<i64> {
    let caps = HISTORY_LABEL.captures(label)?;
    let normalized = format!(
        "{} {} {} {}:00:00 +0000",
        &caps[1], &caps[2], &caps[3], &caps[4]
    );
    DateTime::parse_from_str(&normalized, "%b %d %Y %H:%M:%S %z")
        .ok()
        .map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parses_steam_label() {
        let ms = parse_history_timestamp("Aug 13 2020 01: +0").unwrap();
        let expected = Utc.with_ymd_and_hms(2020, 8, 13, 1, 0, 0).unwrap();
        assert_eq!(ms, expected.timestamp_millis());
    }

    #[test]
    fn test_offset_digits_are_accepted() {
        assert!(parse_history_timestamp("Jan 01 2024 23: +00").is_some());
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert_eq!(parse_history_timestamp(""), None);
        assert_eq!(parse_history_timestamp("Aug 13 2020"), None);
        assert_eq!(parse_history_timestamp("Aug 3 2020 01: +0"), None);
        assert_eq!(parse_history_timestamp("Aug 13 2020 01:00 +0"), None);
        assert_eq!(parse_history_timestamp(" Aug 13 2020 01: +0"), None);
        assert_eq!(parse_history_timestamp("Aug 13 2020 01: +0 extra"), None);
        assert_eq!(parse_history_timestamp("2020-08-13T01:00:00Z"), None);
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert_eq!(parse_history_timestamp("Feb 30 2021 01: +0"), None);
        assert_eq!(parse_history_timestamp("Aug 13 2020 25: +0"), None);
        assert_eq!(parse_history_timestamp("Foo 13 2020 01: +0"), None);
    }
}
