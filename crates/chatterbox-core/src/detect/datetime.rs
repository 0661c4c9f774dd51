//! Date and time detector.
//!
//! Patterns are checked in a fixed order (date, time, Bangladesh time) and
//! the first match wins. Because the generic time pattern matches any
//! message containing "time", it also claims "time in bangladesh" queries;
//! that order is kept as-is.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, TimeZone};
use regex::Regex;

use crate::service::clock::Clock;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)current date|what is the date|date").expect("date pattern is valid")
});

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)what time is it|current time|time").expect("time pattern is valid")
});

static BANGLADESH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)time in bangladesh").expect("bangladesh pattern is valid")
});

/// Asia/Dhaka is UTC+6 with no daylight saving.
const DHAKA_OFFSET_SECS: i32 = 6 * 3600;

/// Answer a date or time question, or `None` if `text` is not one.
pub fn lookup<C: Clock + ?Sized>(text: &str, clock: &C) -> Option<String> {
    let now = clock.now();

    if DATE_PATTERN.is_match(text) {
        return Some(format!("The current date is {}.", format_date(&now)));
    }

    if TIME_PATTERN.is_match(text) {
        return Some(format!("The current time is {}.", format_time(&now)));
    }

    if BANGLADESH_PATTERN.is_match(text) {
        return Some(bangladesh_time_message(&now));
    }

    None
}

/// "The current time in Bangladesh is ..." for the given instant.
pub fn bangladesh_time_message<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let dhaka = FixedOffset::east_opt(DHAKA_OFFSET_SECS).expect("UTC+6 is a valid offset");
    let local = now.with_timezone(&dhaka);
    format!("The current time in Bangladesh is {}.", format_time(&local))
}

/// US-English short date, e.g. `10/16/2026`.
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%-m/%-d/%Y").to_string()
}

/// US-English time, e.g. `3:04:05 PM`.
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(DateTime<FixedOffset>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<FixedOffset> {
            self.0
        }
    }

    fn clock() -> FixedClock {
        // 2026-10-16 15:04:05 UTC
        let utc = FixedOffset::east_opt(0).unwrap();
        FixedClock(utc.with_ymd_and_hms(2026, 10, 16, 15, 4, 5).unwrap())
    }

    #[test]
    fn test_date_query() {
        let reply = lookup("what is the date", &clock()).unwrap();
        assert!(reply.contains("The current date is"));
        assert_eq!(reply, "The current date is 10/16/2026.");
    }

    #[test]
    fn test_date_substring_matches() {
        assert!(lookup("any update?", &clock()).unwrap().starts_with("The current date is"));
    }

    #[test]
    fn test_time_query() {
        assert_eq!(
            lookup("what time is it", &clock()).as_deref(),
            Some("The current time is 3:04:05 PM.")
        );
    }

    #[test]
    fn test_date_wins_over_time() {
        let reply = lookup("current date and time", &clock()).unwrap();
        assert!(reply.starts_with("The current date is"));
    }

    #[test]
    fn test_bangladesh_query_is_claimed_by_time_pattern() {
        assert_eq!(
            lookup("time in bangladesh", &clock()).as_deref(),
            Some("The current time is 3:04:05 PM.")
        );
    }

    #[test]
    fn test_bangladesh_message_converts_offset() {
        assert_eq!(
            bangladesh_time_message(&clock().now()),
            "The current time in Bangladesh is 9:04:05 PM."
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(lookup("hello there", &clock()), None);
    }

    #[test]
    fn test_midnight_formats_as_twelve() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let dt = utc.with_ymd_and_hms(2026, 1, 2, 0, 7, 9).unwrap();
        assert_eq!(format_time(&dt), "12:07:09 AM");
        assert_eq!(format_date(&dt), "1/2/2026");
    }
}
