//! Stored records.
//!
//! Field names serialize in camelCase with the record id as `_id`, which is
//! the shape the website frontend reads.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::RecordId;

/// Author used when a blog post is created without one.
pub const DEFAULT_AUTHOR: &str = "Flownetics Team";

/// Reading time used when a blog post is created without one.
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// Public URL under which a blog image is served.
pub fn image_url(image_id: &str) -> String {
    format!("/api/blogs/images/{image_id}")
}

/// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================================
// Contacts
// ============================================================================

/// A validated contact-form submission, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Reply address
    pub email: String,
    /// Phone number, empty when not given
    pub phone: String,
    /// Company name, empty when not given
    pub company: String,
    /// Free-form message, empty when not given
    pub message: String,
}

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Record id
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Reply address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Company name
    pub company: String,
    /// Free-form message
    pub message: String,
    /// When the submission was stored
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Materialize a stored contact from a validated submission.
    pub fn from_new(id: RecordId, new: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            company: new.company,
            message: new.message,
            created_at,
        }
    }
}

// ============================================================================
// Newsletter
// ============================================================================

/// A stored newsletter signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    /// Record id
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Subscribed address
    pub email: String,
    /// When the signup was stored
    pub subscribed_at: DateTime<Utc>,
}

// ============================================================================
// Leads
// ============================================================================

/// The subset of ROI calculator data kept alongside a lead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadReportSnapshot {
    /// Currency code the report was rendered in
    #[serde(default)]
    pub currency: Option<String>,
    /// Monthly production volume in tons
    #[serde(default)]
    pub volume_tons_per_month: Option<f64>,
    /// Number of process steps
    #[serde(default)]
    pub num_steps: Option<f64>,
    /// Breakeven period in months
    #[serde(default)]
    pub roi_months: Option<f64>,
    /// Client investment in the INR base unit
    #[serde(default, rename = "totalCostClientINR")]
    pub total_cost_client_inr: Option<f64>,
    /// Annual savings after fees in the INR base unit
    #[serde(default, rename = "savingsAfterFaasINR")]
    pub savings_after_faas_inr: Option<f64>,
}

/// A lead ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    /// Lead's name
    pub name: String,
    /// Address the report was sent to
    pub email: String,
    /// Trimmed report data
    pub report_data: LeadReportSnapshot,
}

/// A stored ROI report download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Record id
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Lead's name
    pub name: String,
    /// Address the report was sent to
    pub email: String,
    /// Trimmed report data
    pub report_data: LeadReportSnapshot,
    /// When the report was sent
    pub downloaded_at: DateTime<Utc>,
}

// ============================================================================
// Blog
// ============================================================================

/// A validated blog post, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    /// Headline
    pub title: String,
    /// Teaser text
    pub excerpt: String,
    /// Body (HTML or markdown, stored verbatim)
    pub content: String,
    /// Category label
    pub category: String,
    /// Display date
    pub date: String,
    /// URL slug, unique across posts
    pub slug: String,
    /// Id of the cover image in the blob store
    pub image_id: String,
    /// Author byline
    pub author: String,
    /// Reading-time label
    pub read_time: String,
}

/// A stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Record id
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Headline
    pub title: String,
    /// Teaser text
    pub excerpt: String,
    /// Body
    pub content: String,
    /// Category label
    pub category: String,
    /// Display date
    pub date: String,
    /// URL slug
    pub slug: String,
    /// Public URL of the cover image
    pub image: String,
    /// Id of the cover image in the blob store
    pub image_id: String,
    /// Author byline
    pub author: String,
    /// Reading-time label
    pub read_time: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Materialize a stored post from a validated submission.
    pub fn from_new(id: RecordId, new: NewBlogPost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            image: image_url(&new.image_id),
            title: new.title,
            excerpt: new.excerpt,
            content: new.content,
            category: new.category,
            date: new.date,
            slug: new.slug,
            image_id: new.image_id,
            author: new.author,
            read_time: new.read_time,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place. Only fields present in the patch change.
    pub fn apply(&mut self, patch: &BlogPatch, now: DateTime<Utc>) {
        fn set(target: &mut String, value: &Option<String>) {
            if let Some(v) = value {
                target.clone_from(v);
            }
        }

        set(&mut self.title, &patch.title);
        set(&mut self.excerpt, &patch.excerpt);
        set(&mut self.content, &patch.content);
        set(&mut self.category, &patch.category);
        set(&mut self.date, &patch.date);
        set(&mut self.slug, &patch.slug);
        set(&mut self.author, &patch.author);
        set(&mut self.read_time, &patch.read_time);
        if let Some(image_id) = &patch.image_id {
            self.image = image_url(image_id);
            self.image_id.clone_from(image_id);
        }
        self.updated_at = now;
    }
}

/// Partial update of a blog post. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    /// New headline
    pub title: Option<String>,
    /// New teaser text
    pub excerpt: Option<String>,
    /// New body
    pub content: Option<String>,
    /// New category
    pub category: Option<String>,
    /// New display date
    pub date: Option<String>,
    /// New slug
    pub slug: Option<String>,
    /// New cover image id (also rewrites the image URL)
    pub image_id: Option<String>,
    /// New author byline
    pub author: Option<String>,
    /// New reading-time label
    pub read_time: Option<String>,
}

// ============================================================================
// Images and stats
// ============================================================================

/// An image held in the blob store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Blob id
    pub id: RecordId,
    /// Stored file name
    pub filename: String,
    /// MIME type recorded at upload, if any
    pub content_type: Option<String>,
    /// Raw bytes
    pub data: Vec<u8>,
    /// Upload time
    pub uploaded_at: DateTime<Utc>,
}

/// Record counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStats {
    /// Stored contact submissions
    pub contacts: u64,
    /// Newsletter signups
    pub newsletters: u64,
    /// ROI report downloads
    pub downloads: u64,
    /// Blog posts
    pub blogs: u64,
}
