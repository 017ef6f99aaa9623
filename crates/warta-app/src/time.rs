// Rust guideline compliant 2026-02-09

//! Timestamp helpers for Warta.

use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};

/// Parses an RFC 3339 timestamp and normalizes it to UTC.
///
/// # Arguments
///
/// * `value` - Timestamp text, e.g. `2024-05-01T08:00:00+07:00`
///
/// # Errors
///
/// Returns an error if the text is not valid RFC 3339.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| AppError::InvalidInput(format!("Invalid timestamp '{}': {}", value, err)))
}

/// Formats a timestamp for human-readable output.
#[must_use]
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}
