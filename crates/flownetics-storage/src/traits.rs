//! Storage abstraction traits.
//!
//! One method per collection operation the site needs. Listing methods return
//! newest records first. Uniqueness rules (newsletter email, blog slug) are
//! checked by callers through the `find`/`slug_taken` methods before
//! inserting; stores do not enforce them.

use async_trait::async_trait;
use flownetics_core::{
    BlogPatch, BlogPost, Contact, Lead, NewBlogPost, NewContact, NewLead,
    NewsletterSubscription, RecordId, SiteStats, StoredImage,
};

use crate::Result;

/// Record storage for the site's collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a contact submission.
    async fn insert_contact(&self, contact: NewContact) -> Result<Contact>;

    /// All contact submissions, newest first.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Look up a newsletter signup by exact email.
    async fn find_subscription(&self, email: &str) -> Result<Option<NewsletterSubscription>>;

    /// Store a newsletter signup.
    async fn insert_subscription(&self, email: &str) -> Result<NewsletterSubscription>;

    /// All newsletter signups, newest first.
    async fn list_subscriptions(&self) -> Result<Vec<NewsletterSubscription>>;

    /// Store an ROI report download.
    async fn insert_lead(&self, lead: NewLead) -> Result<Lead>;

    /// All ROI report downloads, newest first.
    async fn list_leads(&self) -> Result<Vec<Lead>>;

    /// Blog posts ordered by display date, latest first.
    async fn list_blogs_by_date(&self) -> Result<Vec<BlogPost>>;

    /// Blog posts ordered by creation time, newest first.
    async fn list_blogs_by_creation(&self) -> Result<Vec<BlogPost>>;

    /// Look up a blog post by slug.
    async fn find_blog_by_slug(&self, slug: &str) -> Result<Option<BlogPost>>;

    /// Look up a blog post by id.
    async fn find_blog(&self, id: RecordId) -> Result<Option<BlogPost>>;

    /// Whether a post other than `except` already uses `slug`.
    async fn slug_taken(&self, slug: &str, except: Option<RecordId>) -> Result<bool>;

    /// Store a new blog post.
    async fn insert_blog(&self, post: NewBlogPost) -> Result<BlogPost>;

    /// Apply a partial update. Returns `false` when no post has this id.
    async fn update_blog(&self, id: RecordId, patch: &BlogPatch) -> Result<bool>;

    /// Remove a blog post. Returns `false` when no post has this id.
    async fn delete_blog(&self, id: RecordId) -> Result<bool>;

    /// Record counts for the admin dashboard.
    async fn stats(&self) -> Result<SiteStats>;
}

/// Binary storage for blog images.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes under `filename` and return the new blob id.
    async fn put(&self, filename: &str, content_type: Option<&str>, data: Vec<u8>)
    -> Result<RecordId>;

    /// Fetch a blob with its metadata.
    async fn get(&self, id: RecordId) -> Result<Option<StoredImage>>;

    /// Remove a blob. Returns `false` when nothing was stored under `id`.
    async fn delete(&self, id: RecordId) -> Result<bool>;
}
