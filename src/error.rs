//! Error types for the BALN ledger engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that stops a ledger computation outright. Recoverable
//! validation findings live in [`crate::models::ValidationError`] instead.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the BALN ledger engine.
///
/// All fallible operations in the engine return this error type. A
/// [`EngineError::WeekdayMismatch`] is the fatal self-consistency failure;
/// the remaining variants cover configuration and rendering problems.
///
/// # Example
///
/// ```
/// use baln_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/expenses.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/expenses.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A configured rule is malformed (bad due day, negative amount, ...).
    #[error("Invalid rule '{name}': {message}")]
    InvalidRule {
        /// The name of the offending rule.
        name: String,
        /// A description of what made the rule invalid.
        message: String,
    },

    /// The weekday derived from the day index disagrees with the one the
    /// calendar formatter produces for the same date.
    #[error("Weekday mismatch for {date}: day index gives {indexed}, formatter gives {formatted}")]
    WeekdayMismatch {
        /// The reference date being checked.
        date: NaiveDate,
        /// Weekday name looked up by day index.
        indexed: String,
        /// Weekday name produced by date formatting.
        formatted: String,
    },

    /// A report could not be rendered in the requested output mode.
    #[error("Render error: {message}")]
    RenderError {
        /// A description of the rendering failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
