use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::DalalError;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

// Day-first with dashes is the backend's snapshot format; slashes follow the US locale.
const LOCAL_DATE_FORMATS: [&str; 2] = ["%d-%m-%Y", "%m/%d/%Y"];

/// Parse an upstream date string into a calendar date.
///
/// Accepted shapes, tried in order:
/// - ISO date `2024-01-02`
/// - RFC 3339 date-time `2024-01-02T09:15:00+05:30`
/// - naive ISO date-time `2024-01-02T09:15:00` or `2024-01-02 09:15:00`
/// - RFC 2822 / HTTP-date `Tue, 02 Jan 2024 00:00:00 GMT`
/// - `02-01-2024` (day first) and `01/02/2024` (month first)
///
/// Date-times reduce to the calendar date in their own offset.
///
/// # Errors
/// Returns `DalalError::InvalidArg` if the string matches none of the shapes
/// or names an impossible date.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, DalalError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(DalalError::InvalidArg("empty date string".into()));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.date_naive());
    }
    for fmt in LOCAL_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }

    Err(DalalError::InvalidArg(format!("unrecognized date: {raw:?}")))
}
