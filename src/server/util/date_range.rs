//! Calendar-day helpers used by availability checks and reserved-date listings.
//!
//! A reservation occupies every calendar day from check-in through check-out, both
//! inclusive. Days are exchanged as `YYYY-MM-DD` tokens so that sets of occupied days
//! can be compared and returned to clients unchanged.

use chrono::{DateTime, NaiveDate};

use crate::server::error::AppError;

/// Format of a single calendar-day token.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Expands a date range into the ordered calendar days it occupies.
///
/// Both endpoints are included, so a range whose start equals its end yields exactly
/// one day.
///
/// # Arguments
/// - `start` - First day of the range
/// - `end` - Last day of the range
///
/// # Returns
/// - Ordered `YYYY-MM-DD` tokens, empty when `start` is after `end`
pub fn enumerate_days(start: NaiveDate, end: NaiveDate) -> Vec<String> {
    if start > end {
        return Vec::new();
    }

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| day.format(DAY_FORMAT).to_string())
        .collect()
}

/// Checks whether two inclusive date ranges share at least one calendar day.
///
/// Matches comparing the sets produced by `enumerate_days` without materializing
/// them, so it stays cheap for ranges of any length.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= a_end && b_start <= b_end && a_start <= b_end && b_start <= a_end
}

/// Parses an ISO calendar date.
///
/// Accepts `YYYY-MM-DD`. A full RFC 3339 timestamp is also accepted and truncated to
/// its date in the timestamp's own offset.
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(AppError::Validation)` - Input is not a recognizable date
pub fn parse_day(value: &str) -> Result<NaiveDate, AppError> {
    let value = value.trim();

    if let Ok(day) = NaiveDate::parse_from_str(value, DAY_FORMAT) {
        return Ok(day);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| AppError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}
