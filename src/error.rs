//! Error types for the shift sheet engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine can report. Only two of them are
//! fatal for an export (a malformed year-month token and a sink failure);
//! the rest are logged and degraded by the layer that observes them.

use thiserror::Error;

/// The main error type for the shift sheet engine.
///
/// # Example
///
/// ```
/// use shift_sheet::error::SheetError;
///
/// let error = SheetError::InvalidYearMonth {
///     input: "2025/03".to_string(),
///     message: "expected YYYY-MM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid year-month '2025/03': expected YYYY-MM");
/// ```
#[derive(Debug, Error)]
pub enum SheetError {
    /// The year-month token could not be parsed.
    #[error("Invalid year-month '{input}': {message}")]
    InvalidYearMonth {
        /// The raw token that was rejected.
        input: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A read against the shift store failed.
    #[error("Store read failed: {message}")]
    Store {
        /// A description of the failure.
        message: String,
    },

    /// The holiday source could not be fetched or decoded.
    #[error("Holiday fetch failed: {message}")]
    HolidayFetch {
        /// A description of the failure.
        message: String,
    },

    /// The export sink rejected the populated grid.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the failure.
        message: String,
    },
}

impl SheetError {
    /// Shorthand for a [`SheetError::Store`] error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Shorthand for a [`SheetError::Export`] error.
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return SheetError.
pub type SheetResult<T> = Result<T, SheetError>;
