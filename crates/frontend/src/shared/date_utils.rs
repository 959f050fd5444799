//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::DateTime;

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
///
/// The shape is fixed rather than following the browser locale, so the
/// same input renders identically everywhere and off-browser.
///
/// Strict RFC 3339 input goes through chrono; anything chrono rejects
/// (date-only strings, missing offsets) falls back to string slicing so the
/// value still renders. Unrecognizable input is returned as-is.
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format("%d.%m.%Y %H:%M:%S").to_string();
    }
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}
