//! Error types for temporalis-core.
//!
//! This module defines the error types used throughout the library,
//! with specific error categories for parsing, timezone handling,
//! date construction and range validation.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// The main error type for temporalis operations.
#[derive(Debug, Error)]
pub enum TemporalisError {
    /// Invalid timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Error parsing a timestamp, date or holiday entry.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Date or time components that do not form a valid calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The end of a range precedes its start.
    #[error("Invalid range: end {end} precedes start {start}")]
    InvalidRange {
        /// Start boundary as supplied by the caller.
        start: DateTime<FixedOffset>,
        /// End boundary as supplied by the caller.
        end: DateTime<FixedOffset>,
    },
}

/// Result type alias for temporalis operations.
pub type Result<T> = std::result::Result<T, TemporalisError>;

impl TemporalisError {
    /// Stable snake_case identifier of the error category.
    pub fn code(&self) -> &'static str {
        match self {
            TemporalisError::InvalidTimezone(_) => "invalid_timezone",
            TemporalisError::ParseError(_) => "parse_error",
            TemporalisError::InvalidDate(_) => "invalid_date",
            TemporalisError::InvalidRange { .. } => "invalid_range",
        }
    }
}
