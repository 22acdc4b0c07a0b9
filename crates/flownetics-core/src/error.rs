//! Error types for flownetics-core

use thiserror::Error;

/// Result type alias for flownetics-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or identifying records.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A submission is missing data or carries malformed data.
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, when a single one is to blame
        field: Option<String>,
        /// Client-facing description
        message: String,
    },

    /// A string could not be parsed as a record id.
    #[error("Invalid record id: {value}")]
    InvalidId {
        /// The rejected input
        value: String,
    },
}

impl Error {
    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error naming the offending field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// The message suitable for returning to an HTTP client.
    pub fn client_message(&self) -> &str {
        match self {
            Error::Validation { message, .. } => message,
            Error::InvalidId { .. } => "Invalid id",
        }
    }
}
