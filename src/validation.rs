//! Validation helper functions for form-like input
//!
//! Parses the text fields the presentation layer collects into typed values.
//! Every failure is a [`PlannerError::Validation`] naming the offending field.

use crate::error::{PlannerError, Result};
use crate::planner::{Priority, TaskFilter};
use chrono::{NaiveDate, NaiveTime};

/// Parse and validate status filter parameter
///
/// # Arguments
/// * `filter_str` - One of `all`, `pending` or `completed` (case-insensitive)
///
/// # Returns
/// The matching [`TaskFilter`], or a validation error on `filter` listing the
/// accepted values
pub fn parse_filter(filter_str: &str) -> Result<TaskFilter> {
    filter_str
        .parse()
        .map_err(|reason| PlannerError::Validation {
            field: "filter",
            reason,
        })
}

/// Parse and validate priority parameter
///
/// # Arguments
/// * `priority_str` - One of `low`, `medium` or `high` (case-insensitive)
///
/// # Returns
/// The matching [`Priority`]. Blank input is a "required" validation error,
/// anything else unrecognised lists the accepted values.
pub fn parse_priority(priority_str: &str) -> Result<Priority> {
    if priority_str.trim().is_empty() {
        return Err(PlannerError::missing("priority"));
    }
    priority_str
        .parse()
        .map_err(|reason| PlannerError::Validation {
            field: "priority",
            reason,
        })
}

/// Parse a due date in YYYY-MM-DD format
///
/// # Arguments
/// * `date_str` - Calendar date such as `2025-03-15`; surrounding whitespace is ignored
///
/// # Returns
/// The parsed date, or a validation error on `due date` when blank or malformed
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return Err(PlannerError::missing("due date"));
    }
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| PlannerError::Validation {
        field: "due date",
        reason: format!(
            "'{}' is not a date. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ),
    })
}

/// Parse an optional due time in HH:MM or HH:MM:SS format
///
/// # Arguments
/// * `time_str` - Time of day such as `14:30`, or blank for "no time"
///
/// # Returns
/// `Ok(None)` for blank input, `Ok(Some(time))` when parsed, or a validation
/// error on `due time` when malformed
pub fn parse_time(time_str: &str) -> Result<Option<NaiveTime>> {
    let time_str = time_str.trim();
    if time_str.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(time_str, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time_str, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| PlannerError::Validation {
            field: "due time",
            reason: format!("'{}' is not a time. Use HH:MM (e.g., '14:30')", time_str),
        })
}
