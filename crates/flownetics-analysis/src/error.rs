//! Error types for flownetics-analysis

use thiserror::Error;

/// Result type alias for flownetics-analysis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running an analysis
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The caller supplied nothing to analyse
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API answered with a non-success status
    #[error("model API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// The model answered but produced no text
    #[error("model returned no text")]
    EmptyResponse,
}

impl Error {
    /// Creates a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Whether the caller, rather than the upstream model, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}
