//! # flownetics-mail
//!
//! Outbound email for the Flownetics site backend.
//!
//! - [`Mailer`]: the delivery seam the HTTP layer depends on
//! - [`MailgunMailer`]: Mailgun HTTP API client
//! - [`UnconfiguredMailer`]: stand-in used when credentials are missing
//! - [`RecordingMailer`]: keeps messages in memory for tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod mailgun;
pub mod recording;

use async_trait::async_trait;

pub use error::{Error, Result};
pub use mailgun::{DEFAULT_MAILGUN_BASE_URL, MailgunMailer};
pub use recording::RecordingMailer;

/// A single HTML email ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
}

impl OutgoingEmail {
    /// Build a message.
    pub fn new(to: impl Into<String>, subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html: html.into(),
        }
    }
}

/// Something that can deliver an [`OutgoingEmail`].
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message. Returns once the provider accepted it.
    async fn send(&self, email: &OutgoingEmail) -> Result<()>;
}

/// Mailer that always fails.
///
/// Installed when the provider credentials are absent so the server still
/// starts; every send surfaces the missing setting to the caller.
#[derive(Debug, Clone)]
pub struct UnconfiguredMailer {
    reason: String,
}

impl UnconfiguredMailer {
    /// Create a mailer that fails with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Mailer for UnconfiguredMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        tracing::warn!(to = %email.to, reason = %self.reason, "dropping email, mailer unconfigured");
        Err(Error::not_configured(self.reason.clone()))
    }
}
