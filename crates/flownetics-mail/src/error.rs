//! Error types for flownetics-mail

use thiserror::Error;

/// Result type alias for flownetics-mail operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while sending email
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// HTTP client error (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("mail provider rejected the message ({status}): {body}")]
    Rejected {
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// No provider credentials were configured
    #[error("email delivery is not configured: {0}")]
    NotConfigured(String),
}

impl Error {
    /// Creates a new not-configured error.
    pub fn not_configured<S: Into<String>>(what: S) -> Self {
        Error::NotConfigured(what.into())
    }
}
