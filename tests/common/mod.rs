// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tally::domain::{Cents, Entry};

/// Helper to parse a date string into DateTime<Utc>
pub fn parse_date(date_str: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// One millisecond before `at`
pub fn just_before(at: DateTime<Utc>) -> DateTime<Utc> {
    at - Duration::milliseconds(1)
}

/// One millisecond after `at`
pub fn just_after(at: DateTime<Utc>) -> DateTime<Utc> {
    at + Duration::milliseconds(1)
}

/// Entry stamped with the current time
pub fn entry(value: Cents) -> Entry {
    Entry::now(value)
}

/// Entry stamped at a given instant
pub fn entry_at(value: Cents, created_at: DateTime<Utc>) -> Entry {
    Entry::new(value, created_at)
}
