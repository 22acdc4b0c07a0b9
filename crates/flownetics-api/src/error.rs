//! Error types for flownetics-api
//!
//! [`Error`] covers startup and wiring failures. [`ApiError`] is what request
//! handlers return; it renders as `{ "error": "<message>" }` with the
//! matching status code.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Result type alias for flownetics-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or starting the server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (config file, socket bind)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from flownetics-storage
    #[error("Storage error: {0}")]
    Storage(#[from] flownetics_storage::Error),

    /// Error from flownetics-mail
    #[error("Mail error: {0}")]
    Mail(#[from] flownetics_mail::Error),

    /// Error from flownetics-analysis
    #[error("Analysis error: {0}")]
    Analysis(#[from] flownetics_analysis::Error),

    /// Error from flownetics-auth
    #[error("Auth error: {0}")]
    Auth(#[from] flownetics_auth::AuthError),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}

/// An error response: status code plus client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Build an error with an explicit status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 401
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// 404
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 409
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// 503
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// 500
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The client-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<flownetics_core::Error> for ApiError {
    fn from(err: flownetics_core::Error) -> Self {
        match err {
            flownetics_core::Error::InvalidId { .. } => ApiError::not_found(err.client_message()),
            _ => ApiError::bad_request(err.client_message()),
        }
    }
}

/// Turn infrastructure failures into a logged 500 with a fixed message.
pub(crate) trait OrInternal<T> {
    /// Log the underlying error and replace it with `message`.
    fn or_internal(self, message: &'static str) -> std::result::Result<T, ApiError>;
}

impl<T, E: std::fmt::Display> OrInternal<T> for std::result::Result<T, E> {
    fn or_internal(self, message: &'static str) -> std::result::Result<T, ApiError> {
        self.map_err(|e| {
            tracing::error!(error = %e, "{message}");
            ApiError::internal(message)
        })
    }
}
