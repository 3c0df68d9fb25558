//! Conversions between `YYYY-MM-DD` date strings, calendar days, and Unix
//! timestamps (seconds, UTC).
//!
//! Archive keys are always day-truncated: midnight UTC of the observation day.

use chrono::{DateTime, NaiveDate, NaiveTime};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a `YYYY-MM-DD` date string to Unix seconds at midnight UTC.
///
/// Returns `None` for strings that do not match the format or that name an
/// invalid calendar date such as `2023-02-30`.
pub fn date_to_unix(date_string: &str) -> Option<i64> {
    parse_day(date_string).map(day_to_unix)
}

/// Render a Unix timestamp back into a `YYYY-MM-DD` string.
///
/// The inverse of [`date_to_unix`] for any value produced by it. Returns
/// `None` only for timestamps outside chrono's representable date range.
pub fn unix_to_date(unix_sec: i64) -> Option<String> {
    unix_to_day(unix_sec).map(|day| day.format(DATE_FORMAT).to_string())
}

/// Unix seconds for midnight UTC of a calendar day.
pub fn day_to_unix(day: NaiveDate) -> i64 {
    day.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// The UTC calendar day containing a Unix timestamp.
pub fn unix_to_day(unix_sec: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(unix_sec, 0).map(|datetime| datetime.date_naive())
}

/// Strict `YYYY-MM-DD` parse. Surrounding whitespace is tolerated, anything
/// else that deviates from the four-two-two digit shape is rejected.
pub(crate) fn parse_day(date_string: &str) -> Option<NaiveDate> {
    let trimmed = date_string.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_valid_dates() {
        for date in ["2016-03-04", "1970-01-01", "2020-02-29", "2999-12-31"] {
            let unix = date_to_unix(date).expect("conversion should succeed");
            assert_eq!(unix_to_date(unix).as_deref(), Some(date));
        }
    }

    #[test]
    fn timestamps_are_day_truncated() {
        let unix = date_to_unix("2022-06-15").unwrap();
        assert_eq!(unix % 86_400, 0);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(date_to_unix(" 2016-03-03 "), date_to_unix("2016-03-03"));
    }

    #[test]
    fn rejects_malformed_strings() {
        for date in ["20-03-03", "2016/03/03", "2016-3-3", "not-a-date", ""] {
            assert_eq!(date_to_unix(date), None, "{date:?} should not parse");
        }
    }

    #[test]
    fn rejects_invalid_calendar_dates() {
        assert_eq!(date_to_unix("2023-02-30"), None);
        assert_eq!(date_to_unix("2023-02-29"), None); // not a leap year
        assert_eq!(date_to_unix("2023-13-01"), None);
        assert_eq!(date_to_unix("2023-04-31"), None);
    }

    #[test]
    fn mid_day_timestamps_resolve_to_the_same_day() {
        let midnight = date_to_unix("2022-06-15").unwrap();
        assert_eq!(
            unix_to_date(midnight + 12 * 3_600).as_deref(),
            Some("2022-06-15")
        );
    }
}
