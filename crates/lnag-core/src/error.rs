//! Error handling for lnag core operations
//!
//! Every fallible operation in the store, the matchers, the unit table and the
//! configuration layer returns an [`LnagError`]. Matchers never panic on bad
//! input; they report it through one of these variants.

use lnag_types::Dimension;
use thiserror::Error;

/// Error type for lnag core operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LnagError {
    /// The concept dataset could not be read or parsed
    #[error("Failed to load dataset '{source_name}': {message}")]
    DataLoad { source_name: String, message: String },

    /// No candidate survived filtering for the requested dimension and value
    #[error("No valid comparison found for {dimension} (value {value})")]
    NoMatch { dimension: Dimension, value: f64 },

    /// Pair matching needs at least two concepts in the dimension
    #[error("Not enough concepts for dimension {dimension}: need at least 2, found {available}")]
    InsufficientData { dimension: Dimension, available: usize },

    /// The value or count handed to a matcher cannot be compared
    #[error("Invalid input {value}: {message}")]
    InvalidInput { value: f64, message: String },

    /// The unit name is not in the unit table
    #[error("Unknown unit: {unit:?}")]
    UnknownUnit { unit: String },

    /// Configuration could not be loaded or holds out-of-range values
    #[error("Configuration error: {message}")]
    Configuration { message: String, setting: Option<String> },
}

impl LnagError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            LnagError::DataLoad { .. } => "data_load",
            LnagError::NoMatch { .. } => "no_match",
            LnagError::InsufficientData { .. } => "insufficient_data",
            LnagError::InvalidInput { .. } => "invalid_input",
            LnagError::UnknownUnit { .. } => "unknown_unit",
            LnagError::Configuration { .. } => "configuration",
        }
    }

    /// Check if the caller can reasonably carry on after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            LnagError::DataLoad { .. } => false, // static data is broken, nothing to retry
            LnagError::NoMatch { .. } => true,
            LnagError::InsufficientData { .. } => true,
            LnagError::InvalidInput { .. } => true,
            LnagError::UnknownUnit { .. } => true,
            LnagError::Configuration { .. } => false,
        }
    }
}

/// Result type alias for core operations
pub type LnagResult<T> = Result<T, LnagError>;

/// Convenience constructors for common error scenarios
impl LnagError {
    /// Create a dataset load error
    pub fn data_load(source_name: &str, message: impl Into<String>) -> Self {
        Self::DataLoad { source_name: source_name.to_string(), message: message.into() }
    }

    /// Create a no-match error
    pub fn no_match(dimension: Dimension, value: f64) -> Self {
        Self::NoMatch { dimension, value }
    }

    /// Create an insufficient-data error
    pub fn insufficient_data(dimension: Dimension, available: usize) -> Self {
        Self::InsufficientData { dimension, available }
    }

    /// Create an invalid input error
    pub fn invalid_input(value: f64, message: impl Into<String>) -> Self {
        Self::InvalidInput { value, message: message.into() }
    }

    /// Create an unknown unit error
    pub fn unknown_unit(unit: &str) -> Self {
        Self::UnknownUnit { unit: unit.to_string() }
    }

    /// Create a configuration error tied to a setting
    pub fn configuration(setting: &str, message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into(), setting: Some(setting.to_string()) }
    }

    /// Create a configuration error not tied to one setting
    pub fn configuration_general(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into(), setting: None }
    }
}

impl From<serde_json::Error> for LnagError {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_syntax() {
            "syntax"
        } else if err.is_data() {
            "data"
        } else if err.is_eof() {
            "eof"
        } else {
            "io"
        };
        LnagError::data_load("json", format!("{kind} error: {err}"))
    }
}
