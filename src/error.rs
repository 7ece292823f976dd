//! Error types for the take-home pay engine.
//!
//! The calculation core itself never fails: malformed tax codes fall back to
//! the default allowance and negative intermediate amounts are clamped. These
//! errors cover the layers around it, namely configuration loading and request
//! validation at the HTTP boundary.

use thiserror::Error;

/// The main error type for the take-home pay engine.
///
/// # Example
///
/// ```
/// use take_home_pay::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/income_tax.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/income_tax.yaml"
/// );
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

    /// Configuration parsed but holds values the calculator cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A request field was outside the range accepted at the boundary.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The request field that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
