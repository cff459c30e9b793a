//! Error types for the payroll engine.
//!
//! The calculation functions themselves never fail; these errors are raised
//! by configuration loading and by the validation performed at the system
//! boundary before any record reaches the engine.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use planilla_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statute.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/statute.yaml");
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

    /// The employee's shift type is not one of the statutory jornadas.
    #[error("Unknown shift type for employee '{employee_id}'")]
    UnknownShiftType {
        /// The employee carrying the unrecognised shift type.
        employee_id: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A work day was invalid or contained inconsistent data.
    #[error("Invalid work day {date}: {message}")]
    InvalidWorkDay {
        /// The date of the offending work day.
        date: NaiveDate,
        /// A description of what made the day invalid.
        message: String,
    },

    /// Two work days in the same run share a date.
    #[error("Duplicate work day: {date}")]
    DuplicateWorkDay {
        /// The repeated date.
        date: NaiveDate,
    },

    /// A bonus or deduction entry was invalid.
    #[error("Invalid extra entry #{index}: {message}")]
    InvalidExtra {
        /// Position of the entry in the submitted list.
        index: usize,
        /// A description of what made the entry invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
