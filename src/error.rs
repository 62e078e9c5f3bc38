//! Error types for the Timesheet Aggregation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during timesheet aggregation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Timesheet Aggregation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// A reporting window whose end date precedes its start date.
    #[error("Invalid reporting window: end date {end} is before start date {start}")]
    InvalidWindow {
        /// The start date of the rejected window.
        start: NaiveDate,
        /// The end date of the rejected window.
        end: NaiveDate,
    },

    /// An export was requested but there are no shifts to export.
    ///
    /// Raised instead of silently producing an empty table, so callers
    /// never write a blank file.
    #[error("Nothing to export: no shifts fall within the requested window")]
    EmptyExport,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
