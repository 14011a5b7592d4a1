//! Calendar date parsing and day arithmetic.
//!
//! Dashboard records carry dates as `YYYY-MM-DD` strings with no time
//! component. Parsing is strict: a malformed string is an error naming the
//! offending value, never a silent substitution of the current date.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Date format accepted from dashboard records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// # Errors
/// Returns [`CoreError::InvalidDate`] carrying the offending value.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| CoreError::InvalidDate {
        value: value.to_string(),
    })
}

/// Signed whole-day difference `b - a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}
