// src/schedule/anchor.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::{Result, TimelineError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an anchor date supplied by the caller.
///
/// Accepts `YYYY-MM-DD`, plus local or RFC 3339 timestamps whose time of day
/// is dropped. The date part is kept as written; no timezone conversion is
/// applied.
pub fn parse_anchor(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimelineError::InvalidAnchorDate(
            "anchor date is empty".to_string(),
        ));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    Err(TimelineError::InvalidAnchorDate(format!(
        "'{trimmed}' is not a calendar date (expected YYYY-MM-DD)"
    )))
}
