//! Human-readable timestamps.

use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::error::{HelperError, Result};

/// Formats accepted by [`parse_timestamp`] after RFC 3339.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Format a timestamp as `May 06, 2012  1:33 PM`.
///
/// The wall-clock time in the timestamp's own zone is used.
#[must_use]
pub fn pretty_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    pretty_naive_time(&time.naive_local())
}

/// Same as [`pretty_time`] for a zone-less timestamp.
#[must_use]
pub fn pretty_naive_time(time: &NaiveDateTime) -> String {
    // Two spaces between the date and the unpadded hour.
    format!("{}  {}", time.format("%b %d, %Y"), time.format("%-I:%M %p"))
}

/// Parse an RFC 3339 or ISO-like timestamp into wall-clock time.
///
/// # Errors
///
/// Returns `HelperError::InvalidTimestamp` if no known format matches.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(input) {
        return Ok(time.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .ok_or_else(|| HelperError::InvalidTimestamp(input.to_string()))
}
