//! Error types for flownetics-report

use thiserror::Error;

/// Result type alias for report validation
pub type Result<T> = std::result::Result<T, ReportError>;

/// Reasons a report submission is rejected by [`ReportData::validate`].
///
/// Rendering itself never produces these.
///
/// [`ReportData::validate`]: crate::ReportData::validate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    /// A field the report cannot be rendered meaningfully without is absent.
    #[error("report field '{0}' is required")]
    MissingField(&'static str),

    /// A numeric field is NaN or infinite.
    #[error("report field '{0}' must be a finite number")]
    NonFinite(&'static str),

    /// A monetary or count field is negative.
    #[error("report field '{0}' must not be negative")]
    Negative(&'static str),
}

impl ReportError {
    /// Name of the offending field, as sent by the calculator.
    pub fn field(&self) -> &'static str {
        match self {
            ReportError::MissingField(f) | ReportError::NonFinite(f) | ReportError::Negative(f) => f,
        }
    }
}
