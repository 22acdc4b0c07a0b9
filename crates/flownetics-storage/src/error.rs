//! Error types for flownetics-storage

use thiserror::Error;

/// Result type alias for flownetics-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in flownetics-storage
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from flownetics-core
    #[error("Core error: {0}")]
    Core(#[from] flownetics_core::Error),

    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored JSON column could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored row holds data this version cannot interpret
    #[error("Corrupt record: {message}")]
    Corrupt {
        /// What could not be interpreted
        message: String,
    },
}

impl Error {
    /// Creates a new corrupt-record error.
    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        Error::Corrupt {
            message: message.into(),
        }
    }
}
