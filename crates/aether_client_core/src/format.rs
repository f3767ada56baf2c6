//! Display helpers. Dates are stored as ISO strings and always shown in UTC
//! so a `YYYY-MM-DD` never shifts a day in local time.

use chrono::{DateTime, NaiveDate, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp (converted to UTC).
pub fn parse_event_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// `October 26, 2024`
pub fn card_date(s: &str) -> String {
    parse_event_date(s)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// `Saturday, October 26, 2024`
pub fn full_date(s: &str) -> String {
    parse_event_date(s)
        .map(|d| d.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// One paragraph per newline-delimited segment.
pub fn paragraphs(description: &str) -> Vec<&str> {
    description.split('\n').collect()
}
