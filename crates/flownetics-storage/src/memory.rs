//! In-memory storage.
//!
//! Used by the test suites and by `database.url = "memory"` for local
//! development. Contents are lost when the process exits.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use flownetics_core::{
    BlogPatch, BlogPost, Contact, Lead, NewBlogPost, NewContact, NewLead,
    NewsletterSubscription, RecordId, SiteStats, StoredImage,
};
use tokio::sync::RwLock;

use crate::{BlobStore, DocumentStore, Result};

#[derive(Default)]
struct Collections {
    contacts: Vec<Contact>,
    subscriptions: Vec<NewsletterSubscription>,
    leads: Vec<Lead>,
    blogs: Vec<BlogPost>,
}

/// Document store backed by vectors behind an async lock.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest-first copy of `items`. Later insertions win ties.
fn newest_first<T: Clone, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Vec<T> {
    let mut out: Vec<T> = items.iter().rev().cloned().collect();
    out.sort_by(|a, b| key(b).cmp(&key(a)));
    out
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_contact(&self, contact: NewContact) -> Result<Contact> {
        let record = Contact::from_new(RecordId::new(), contact, Utc::now());
        self.inner.write().await.contacts.push(record.clone());
        Ok(record)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let guard = self.inner.read().await;
        Ok(newest_first(&guard.contacts, |c| c.created_at))
    }

    async fn find_subscription(&self, email: &str) -> Result<Option<NewsletterSubscription>> {
        let guard = self.inner.read().await;
        Ok(guard.subscriptions.iter().find(|s| s.email == email).cloned())
    }

    async fn insert_subscription(&self, email: &str) -> Result<NewsletterSubscription> {
        let record = NewsletterSubscription {
            id: RecordId::new(),
            email: email.to_string(),
            subscribed_at: Utc::now(),
        };
        self.inner.write().await.subscriptions.push(record.clone());
        Ok(record)
    }

    async fn list_subscriptions(&self) -> Result<Vec<NewsletterSubscription>> {
        let guard = self.inner.read().await;
        Ok(newest_first(&guard.subscriptions, |s| s.subscribed_at))
    }

    async fn insert_lead(&self, lead: NewLead) -> Result<Lead> {
        let record = Lead {
            id: RecordId::new(),
            name: lead.name,
            email: lead.email,
            report_data: lead.report_data,
            downloaded_at: Utc::now(),
        };
        self.inner.write().await.leads.push(record.clone());
        Ok(record)
    }

    async fn list_leads(&self) -> Result<Vec<Lead>> {
        let guard = self.inner.read().await;
        Ok(newest_first(&guard.leads, |l| l.downloaded_at))
    }

    async fn list_blogs_by_date(&self) -> Result<Vec<BlogPost>> {
        let guard = self.inner.read().await;
        Ok(newest_first(&guard.blogs, |b| b.date.clone()))
    }

    async fn list_blogs_by_creation(&self) -> Result<Vec<BlogPost>> {
        let guard = self.inner.read().await;
        Ok(newest_first(&guard.blogs, |b| b.created_at))
    }

    async fn find_blog_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        let guard = self.inner.read().await;
        Ok(guard.blogs.iter().find(|b| b.slug == slug).cloned())
    }

    async fn find_blog(&self, id: RecordId) -> Result<Option<BlogPost>> {
        let guard = self.inner.read().await;
        Ok(guard.blogs.iter().find(|b| b.id == id).cloned())
    }

    async fn slug_taken(&self, slug: &str, except: Option<RecordId>) -> Result<bool> {
        let guard = self.inner.read().await;
        Ok(guard
            .blogs
            .iter()
            .any(|b| b.slug == slug && Some(b.id) != except))
    }

    async fn insert_blog(&self, post: NewBlogPost) -> Result<BlogPost> {
        let record = BlogPost::from_new(RecordId::new(), post, Utc::now());
        self.inner.write().await.blogs.push(record.clone());
        Ok(record)
    }

    async fn update_blog(&self, id: RecordId, patch: &BlogPatch) -> Result<bool> {
        let mut guard = self.inner.write().await;
        match guard.blogs.iter_mut().find(|b| b.id == id) {
            Some(post) => {
                post.apply(patch, Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_blog(&self, id: RecordId) -> Result<bool> {
        let mut guard = self.inner.write().await;
        let before = guard.blogs.len();
        guard.blogs.retain(|b| b.id != id);
        Ok(guard.blogs.len() != before)
    }

    async fn stats(&self) -> Result<SiteStats> {
        let guard = self.inner.read().await;
        Ok(SiteStats {
            contacts: guard.contacts.len() as u64,
            newsletters: guard.subscriptions.len() as u64,
            downloads: guard.leads.len() as u64,
            blogs: guard.blogs.len() as u64,
        })
    }
}

/// Blob store backed by a hash map.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<RecordId, StoredImage>>,
}

impl MemoryBlobStore {
    /// Create an empty blob store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// Whether no blobs are stored.
    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        filename: &str,
        content_type: Option<&str>,
        data: Vec<u8>,
    ) -> Result<RecordId> {
        let id = RecordId::new();
        let image = StoredImage {
            id,
            filename: filename.to_string(),
            content_type: content_type.map(str::to_string),
            data,
            uploaded_at: Utc::now(),
        };
        self.blobs.write().await.insert(id, image);
        Ok(id)
    }

    async fn get(&self, id: RecordId) -> Result<Option<StoredImage>> {
        Ok(self.blobs.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        Ok(self.blobs.write().await.remove(&id).is_some())
    }
}
