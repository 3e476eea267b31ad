//! Date utility functions
//!
//! This module provides parsing and formatting helpers for the calendar-date
//! strings tasks carry, plus human-readable formatting for list display
//! (e.g. "yesterday", "today", "tomorrow").

use chrono::{Duration, Local, NaiveDate};

/// Canonical date format used for task due dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(Local::now().date_naive())
}

/// Check that a string is the canonical YYYY-MM-DD form of a real calendar date.
///
/// The string must both parse and round-trip back to itself, so zero-padded
/// variants ("2024-1-1") and strings with time or timezone suffixes
/// ("2024-01-01T00:00:00Z") are rejected along with impossible dates.
pub fn is_canonical_ymd(date_str: &str) -> bool {
    match parse_date(date_str) {
        Ok(date) => format_ymd(date) == date_str,
        Err(_) => false,
    }
}

/// Format a date string for list display
///
/// Dates within a day of today render as "yesterday", "today" or "tomorrow";
/// anything else (including unparseable input) renders unchanged.
pub fn format_human_date(date_str: &str) -> String {
    let input_date = match parse_date(date_str) {
        Ok(date) => date,
        Err(_) => return date_str.to_string(),
    };

    let today = Local::now().date_naive();
    match (input_date - today).num_days() {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        _ => date_str.to_string(),
    }
}

/// Format date with offset from today to YYYY-MM-DD string
pub fn format_date_with_offset(days_offset: i64) -> String {
    format_ymd(Local::now().date_naive() + Duration::days(days_offset))
}
