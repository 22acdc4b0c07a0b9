//! Mailgun HTTP API client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::{Error, Mailer, OutgoingEmail, Result};

/// Public Mailgun API endpoint (US region).
pub const DEFAULT_MAILGUN_BASE_URL: &str = "https://api.mailgun.net";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct MessageForm<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Sends mail through `POST {base}/v3/{domain}/messages`.
#[derive(Debug, Clone)]
pub struct MailgunMailer {
    client: reqwest::Client,
    api_key: String,
    domain: String,
    base_url: String,
    sender: String,
}

impl MailgunMailer {
    /// Create a client for `domain` authenticated with `api_key`.
    ///
    /// The sender defaults to `Flownetics <postmaster@{domain}>`.
    pub fn new(api_key: impl Into<String>, domain: impl Into<String>) -> Result<Self> {
        let domain = domain.into();
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            sender: format!("Flownetics <postmaster@{domain}>"),
            domain,
            base_url: DEFAULT_MAILGUN_BASE_URL.to_string(),
        })
    }

    /// Point at a different API host (EU region, or a local fake in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the `From` header.
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    /// The `From` header used for outgoing mail.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    fn messages_url(&self) -> String {
        format!("{}/v3/{}/messages", self.base_url, self.domain)
    }
}

#[async_trait]
impl Mailer for MailgunMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        let form = MessageForm {
            from: &self.sender,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth("api", Some(&self.api_key))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), to = %email.to, "mailgun rejected message");
            return Err(Error::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(to = %email.to, subject = %email.subject, "email sent");
        Ok(())
    }
}
