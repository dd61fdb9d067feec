//! Error types for cookbook.
//!
//! This module defines all error types used throughout the cookbook crate,
//! providing detailed context for debugging and user-friendly error messages.

use thiserror::Error;

/// The main error type for cookbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// A weight or height value could not be parsed as a number.
    #[error("invalid {field}: '{input}' is not a number")]
    InvalidNumericInput {
        /// Which input field was rejected.
        field: &'static str,
        /// The text the user entered.
        input: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Terminal read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for cookbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid numeric input error for the named field.
    #[must_use]
    pub fn invalid_numeric_input(field: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            field,
            input: input.into(),
        }
    }

    /// Check if this error is a rejected numeric input.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidNumericInput { .. })
    }
}
