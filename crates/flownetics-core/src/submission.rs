//! Inbound form payloads and their validation.
//!
//! Every field is optional on the wire; validation turns a payload into the
//! corresponding `New*` record or reports what is missing. A string that is
//! empty or only whitespace counts as missing.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{DEFAULT_AUTHOR, DEFAULT_READ_TIME, iso_timestamp};
use crate::{BlogPatch, Error, NewBlogPost, NewContact, Result};

const MISSING_REQUIRED: &str = "Missing required fields";

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>) -> Result<String> {
    present(value).ok_or_else(|| Error::validation(MISSING_REQUIRED))
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Given name (required)
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name (required)
    #[serde(default)]
    pub last_name: Option<String>,
    /// Reply address (required)
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Company name
    #[serde(default)]
    pub company: Option<String>,
    /// Free-form message
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Validate and normalize into an insertable contact.
    pub fn validate(self) -> Result<NewContact> {
        Ok(NewContact {
            first_name: required(self.first_name)?,
            last_name: required(self.last_name)?,
            email: required(self.email)?,
            phone: self.phone.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}

/// Body of `POST /api/newsletter`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsletterSubmission {
    /// Address to subscribe
    #[serde(default)]
    pub email: Option<String>,
}

impl NewsletterSubmission {
    /// Return the address to subscribe.
    pub fn validate(self) -> Result<String> {
        present(self.email).ok_or_else(|| Error::validation_field("email", "Email is required"))
    }
}

/// Body of `POST /api/admin/blogs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSubmission {
    /// Headline (required)
    #[serde(default)]
    pub title: Option<String>,
    /// Teaser text (required)
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Body (required)
    #[serde(default)]
    pub content: Option<String>,
    /// Category label (required)
    #[serde(default)]
    pub category: Option<String>,
    /// Display date, defaults to creation time
    #[serde(default)]
    pub date: Option<String>,
    /// URL slug (required)
    #[serde(default)]
    pub slug: Option<String>,
    /// Cover image id (required)
    #[serde(default)]
    pub image_id: Option<String>,
    /// Author byline
    #[serde(default)]
    pub author: Option<String>,
    /// Reading-time label
    #[serde(default)]
    pub read_time: Option<String>,
}

impl BlogSubmission {
    /// Validate and fill defaults. `now` supplies the default display date.
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewBlogPost> {
        Ok(NewBlogPost {
            title: required(self.title)?,
            excerpt: required(self.excerpt)?,
            content: required(self.content)?,
            category: required(self.category)?,
            slug: required(self.slug)?,
            image_id: required(self.image_id)?,
            date: present(self.date).unwrap_or_else(|| iso_timestamp(now)),
            author: present(self.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            read_time: present(self.read_time).unwrap_or_else(|| DEFAULT_READ_TIME.to_string()),
        })
    }
}

/// Body of `PUT /api/admin/blogs/{id}`. Empty fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogUpdate {
    /// New headline
    #[serde(default)]
    pub title: Option<String>,
    /// New teaser text
    #[serde(default)]
    pub excerpt: Option<String>,
    /// New body
    #[serde(default)]
    pub content: Option<String>,
    /// New category
    #[serde(default)]
    pub category: Option<String>,
    /// New display date
    #[serde(default)]
    pub date: Option<String>,
    /// New slug
    #[serde(default)]
    pub slug: Option<String>,
    /// New cover image id
    #[serde(default)]
    pub image_id: Option<String>,
    /// New author byline
    #[serde(default)]
    pub author: Option<String>,
    /// New reading-time label
    #[serde(default)]
    pub read_time: Option<String>,
}

impl BlogUpdate {
    /// Convert into a patch carrying only non-empty fields.
    pub fn into_patch(self) -> BlogPatch {
        BlogPatch {
            title: present(self.title),
            excerpt: present(self.excerpt),
            content: present(self.content),
            category: present(self.category),
            date: present(self.date),
            slug: present(self.slug),
            image_id: present(self.image_id),
            author: present(self.author),
            read_time: present(self.read_time),
        }
    }
}
