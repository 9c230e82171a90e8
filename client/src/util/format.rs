//! Display formatting for attendance timestamps and totals.
//!
//! Backend timestamps are ISO-8601 strings; anything unparseable renders as
//! `Invalid Date` so a single bad row never breaks the table.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

/// India Standard Time, used for the faculty review timestamps.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Parse a backend timestamp. Offset-less values are taken as UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `HH:MM:SS` in UTC.
pub fn format_time_utc(raw: &str) -> String {
    parse_instant(raw)
        .map_or_else(|| INVALID_DATE.to_owned(), |dt| dt.format("%H:%M:%S").to_string())
}

/// `M/D/YYYY`, the en-US short date.
pub fn format_locale_date(raw: &str) -> String {
    parse_instant(raw)
        .map_or_else(|| INVALID_DATE.to_owned(), |dt| dt.format("%-m/%-d/%Y").to_string())
}

/// Lecture slot as `HH:MM:SS to HH:MM:SS` (UTC).
pub fn format_lecture_window(start: &str, end: &str) -> String {
    format!("{} to {}", format_time_utc(start), format_time_utc(end))
}

/// Long-form timestamp in IST, e.g. `September 10, 2024 at 02:30:00 PM`.
pub fn format_readable_ist(raw: &str) -> String {
    let Some(offset) = FixedOffset::east_opt(IST_OFFSET_SECS) else {
        return INVALID_DATE.to_owned();
    };
    parse_instant(raw).map_or_else(
        || INVALID_DATE.to_owned(),
        |dt| dt.with_timezone(&offset).format("%B %-d, %Y at %I:%M:%S %p").to_string(),
    )
}

/// Backend-computed attendance ratio with two decimals.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}
