//! Error types for the reveal core library.
//!
//! Form composition itself never fails: malformed rows are dropped and
//! validation problems are reported through
//! [`ValidationErrors`](crate::validation::ValidationErrors). The errors here
//! cover the ambient concerns around it, namely configuration and
//! serialisation of the plan definition sent to the API.

use std::fmt;

use thiserror::Error;

/// Error type for configuration and serialisation failures.
#[derive(Error, Debug)]
pub enum RevealError {
    /// An environment variable or builder value could not be used
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A UUID namespace string is not a valid UUID
    #[error("Invalid UUID namespace '{value}': {source}")]
    InvalidNamespace {
        value: String,
        #[source]
        source: uuid::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RevealError {
        RevealError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RevealError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        RevealError::Configuration {
            message: message.into(),
        }
    }
}

/// Extension trait for mapping configuration-related Results.
pub trait ConfigResultExt<T> {
    /// Map any error to a configuration error prefixed with `message`.
    fn config_context(self, message: &str) -> Result<T>;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn config_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RevealError::Configuration {
            message: format!("{message}: {e}"),
        })
    }
}

/// Result type alias for reveal operations
pub type Result<T> = std::result::Result<T, RevealError>;
