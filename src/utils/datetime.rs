//! Date and time utility functions
//!
//! Records carry dates as chrono values. This module converts them into
//! sortable millisecond timestamps, builds the day keys used by chat bucketing,
//! and parses the loosely formatted date strings data layers tend to send.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::fmt::Write;

/// Standard date format used for day keys and date-only values
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, ISO_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a timestamp in any of the formats a data layer commonly emits.
///
/// Tried in order: RFC 3339 with offset, ISO 8601 without offset, space
/// separated date and time, and a bare date (midnight). Values without an
/// offset are taken as UTC. Returns `None` when nothing matches.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive_formats = [
        format!("{}T%H:%M:%S%.f", ISO_DATE_FORMAT),
        format!("{}T%H:%M", ISO_DATE_FORMAT),
        format!("{} %H:%M:%S%.f", ISO_DATE_FORMAT),
        format!("{} %H:%M", ISO_DATE_FORMAT),
    ];
    for format in &naive_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }

    parse_date(value)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Milliseconds since the Unix epoch, the unit every date comparison uses
pub fn timestamp_millis(dt: &DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

/// Milliseconds since the Unix epoch for midnight UTC of a calendar date
pub fn date_timestamp_millis(d: NaiveDate) -> i64 {
    d.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

/// Format a calendar date with `format`, or `None` when the format cannot
/// render a date (time-of-day specifiers, invalid items).
pub fn format_day(d: NaiveDate, format: &str) -> Option<String> {
    let mut key = String::new();
    write!(key, "{}", d.format(format)).ok()?;
    Some(key)
}

/// Truncate a timestamp to its UTC calendar day, formatted with `format`.
///
/// Falls back to YYYY-MM-DD when `format` cannot render a date.
pub fn day_key(dt: &DateTime<Utc>, format: &str) -> String {
    let date = dt.date_naive();
    format_day(date, format).unwrap_or_else(|| format_ymd(date))
}

/// Serde helper for optional timestamps that tolerates malformed input.
///
/// Missing, null, empty or unparseable values all deserialize to `None`, so a
/// bad date on one record never fails a whole batch.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}
