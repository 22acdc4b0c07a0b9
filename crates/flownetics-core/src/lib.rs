//! Flownetics Core: shared record types, ids and validation errors.
//!
//! This crate provides the foundational types used across all Flownetics
//! crates. It has no internal Flownetics dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`ids`]: Record identifiers
//! - [`models`]: Stored records (contacts, subscriptions, leads, blog posts, images)
//! - [`submission`]: Inbound form payloads and their validation

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod ids;
pub mod models;
pub mod submission;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use ids::RecordId;
pub use models::{
    BlogPatch, BlogPost, Contact, DEFAULT_AUTHOR, DEFAULT_READ_TIME, Lead, LeadReportSnapshot,
    NewBlogPost, NewContact, NewLead, NewsletterSubscription, SiteStats, StoredImage, image_url,
    iso_timestamp,
};
pub use submission::{BlogSubmission, BlogUpdate, ContactSubmission, NewsletterSubmission};
