//! Format patterns
//!
//! Permissive format checks for email addresses, phone numbers and calendar
//! dates. These approximate what a person would type into a sign-up form; they
//! are not standards-complete validators.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// One `@`, at least one dot after it, no whitespace anywhere.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern")
});

/// Optional `+`, no leading zero, at most 16 digits.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern"));

/// Separators people commonly type inside phone numbers.
static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}\-()]").expect("phone separator pattern"));

const DATE_FORMATS: [&str; 11] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d %B, %Y",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Trims whitespace, counting the byte order mark as whitespace too.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Strip spaces, hyphens and parentheses from a phone number.
pub fn normalize_phone(value: &str) -> String {
    PHONE_SEPARATORS.replace_all(value, "").into_owned()
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(&normalize_phone(value))
}

/// Parse a date as typed into a date input or free text field.
///
/// Accepts ISO dates (optionally with a time or full RFC 3339 timestamp),
/// RFC 2822 timestamps, slash/dash separated US dates, month-name dates with
/// or without commas, a bare `YYYY-MM` year-month and a bare year. Impossible
/// calendar dates are rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = trim_value(value);
    if value.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = DateTime::parse_from_rfc2822(value) {
        return Some(ts.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|ts| ts.date())
        })
        .or_else(|| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("{value}-01-01"), "%Y-%m-%d").ok())
}

pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}
