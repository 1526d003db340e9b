//! Error handling for sounding download and conversion.
//!
//! Provides error types with context for page format failures,
//! transport problems, date/time input and configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoundingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unrecognized sounding page: {reason}")]
    Format { reason: String },

    #[error("Could not parse date '{input}': {reason}")]
    DateTimeParsing { input: String, reason: String },

    #[error("Invalid hour '{input}': {reason}")]
    InvalidHour { input: String, reason: String },

    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Output file already exists: {path}")]
    OutputExists { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl SoundingError {
    /// Create a format error for a structurally unrecognized page
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the page was fetched but did not contain a sounding table
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

pub type Result<T> = std::result::Result<T, SoundingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        let err = SoundingError::format("header marker not found");
        assert!(err.is_format_error());
        assert_eq!(
            err.to_string(),
            "Unrecognized sounding page: header marker not found"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SoundingError = io.into();
        assert!(matches!(err, SoundingError::Io(_)));
        assert!(!err.is_format_error());
    }
}
