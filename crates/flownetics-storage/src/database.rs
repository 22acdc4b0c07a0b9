//! SQLite storage backend.
//!
//! Ids and timestamps are stored as TEXT. Timestamps use RFC 3339 with a
//! fixed nanosecond precision so lexical order matches chronological order.
//! The lead report snapshot is stored as a JSON column.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use flownetics_core::{
    BlogPatch, BlogPost, Contact, Lead, LeadReportSnapshot, NewBlogPost, NewContact, NewLead,
    NewsletterSubscription, RecordId, SiteStats, StoredImage, image_url,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use crate::{BlobStore, DocumentStore, Error, Result};

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS contacts (
        id TEXT PRIMARY KEY NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL DEFAULT '',
        company TEXT NOT NULL DEFAULT '',
        message TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS newsletters (
        id TEXT PRIMARY KEY NOT NULL,
        email TEXT NOT NULL,
        subscribed_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS newsletters_email ON newsletters (email)",
    "CREATE TABLE IF NOT EXISTS roi_downloads (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        report_data TEXT NOT NULL,
        downloaded_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS blogs (
        id TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        excerpt TEXT NOT NULL,
        content TEXT NOT NULL,
        category TEXT NOT NULL,
        date TEXT NOT NULL,
        slug TEXT NOT NULL,
        image TEXT NOT NULL,
        image_id TEXT NOT NULL,
        author TEXT NOT NULL,
        read_time TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS blogs_slug ON blogs (slug)",
    "CREATE TABLE IF NOT EXISTS blobs (
        id TEXT PRIMARY KEY NOT NULL,
        filename TEXT NOT NULL,
        content_type TEXT,
        data BLOB NOT NULL,
        uploaded_at TEXT NOT NULL
    )",
];

const BLOG_COLUMNS: &str = "id, title, excerpt, content, category, date, slug, image, image_id, \
                            author, read_time, created_at, updated_at";

/// Storage backed by an SQLite connection pool.
///
/// Implements both [`DocumentStore`] and [`BlobStore`]; clones share the pool.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `url` and apply the schema.
    ///
    /// Accepts any sqlx SQLite URL, e.g. `sqlite://site.db` or
    /// `sqlite::memory:`. In-memory databases are pinned to a single
    /// connection so every query sees the same data.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { 5 })
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        tracing::info!(url, "sqlite store ready");
        Ok(store)
    }

    /// Wrap an existing pool. The schema is not applied; call [`migrate`](Self::migrate).
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create any missing tables and indexes.
    pub async fn migrate(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn count(&self, table: &str) -> Result<u64> {
        let n: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        u64::try_from(n).map_err(|_| Error::corrupt(format!("negative count in {table}")))
    }

    async fn fetch_blogs(&self, order: &str) -> Result<Vec<BlogPost>> {
        let sql = format!("SELECT {BLOG_COLUMNS} FROM blogs ORDER BY {order}, rowid DESC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(blog_from_row).collect()
    }

    async fn fetch_blog_where(&self, column: &str, value: &str) -> Result<Option<BlogPost>> {
        let sql = format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE {column} = ? LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(blog_from_row).transpose()
    }
}

// ============================================================================
// Row helpers
// ============================================================================

fn format_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_time(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::corrupt(format!("bad timestamp '{raw}': {e}")))
}

fn parse_id(raw: &str) -> Result<RecordId> {
    raw.parse()
        .map_err(|_| Error::corrupt(format!("bad record id '{raw}'")))
}

fn text(row: &SqliteRow, column: &str) -> Result<String> {
    Ok(row.try_get::<String, _>(column)?)
}

fn id_column(row: &SqliteRow) -> Result<RecordId> {
    parse_id(&text(row, "id")?)
}

fn time_column(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>> {
    parse_time(&text(row, column)?)
}

fn contact_from_row(row: &SqliteRow) -> Result<Contact> {
    Ok(Contact {
        id: id_column(row)?,
        first_name: text(row, "first_name")?,
        last_name: text(row, "last_name")?,
        email: text(row, "email")?,
        phone: text(row, "phone")?,
        company: text(row, "company")?,
        message: text(row, "message")?,
        created_at: time_column(row, "created_at")?,
    })
}

fn subscription_from_row(row: &SqliteRow) -> Result<NewsletterSubscription> {
    Ok(NewsletterSubscription {
        id: id_column(row)?,
        email: text(row, "email")?,
        subscribed_at: time_column(row, "subscribed_at")?,
    })
}

fn lead_from_row(row: &SqliteRow) -> Result<Lead> {
    let report_data: LeadReportSnapshot = serde_json::from_str(&text(row, "report_data")?)?;
    Ok(Lead {
        id: id_column(row)?,
        name: text(row, "name")?,
        email: text(row, "email")?,
        report_data,
        downloaded_at: time_column(row, "downloaded_at")?,
    })
}

fn blog_from_row(row: &SqliteRow) -> Result<BlogPost> {
    Ok(BlogPost {
        id: id_column(row)?,
        title: text(row, "title")?,
        excerpt: text(row, "excerpt")?,
        content: text(row, "content")?,
        category: text(row, "category")?,
        date: text(row, "date")?,
        slug: text(row, "slug")?,
        image: text(row, "image")?,
        image_id: text(row, "image_id")?,
        author: text(row, "author")?,
        read_time: text(row, "read_time")?,
        created_at: time_column(row, "created_at")?,
        updated_at: time_column(row, "updated_at")?,
    })
}

// ============================================================================
// DocumentStore
// ============================================================================

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn insert_contact(&self, contact: NewContact) -> Result<Contact> {
        let record = Contact::from_new(RecordId::new(), contact, Utc::now());
        sqlx::query(
            "INSERT INTO contacts (id, first_name, last_name, email, phone, company, message, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.id.to_string())
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.company)
        .bind(&record.message)
        .bind(format_time(record.created_at))
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let rows = sqlx::query("SELECT * FROM contacts ORDER BY created_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(contact_from_row).collect()
    }

    async fn find_subscription(&self, email: &str) -> Result<Option<NewsletterSubscription>> {
        let row = sqlx::query("SELECT * FROM newsletters WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(subscription_from_row).transpose()
    }

    async fn insert_subscription(&self, email: &str) -> Result<NewsletterSubscription> {
        let record = NewsletterSubscription {
            id: RecordId::new(),
            email: email.to_string(),
            subscribed_at: Utc::now(),
        };
        sqlx::query("INSERT INTO newsletters (id, email, subscribed_at) VALUES (?, ?, ?)")
            .bind(record.id.to_string())
            .bind(&record.email)
            .bind(format_time(record.subscribed_at))
            .execute(&self.pool)
            .await?;
        Ok(record)
    }

    async fn list_subscriptions(&self) -> Result<Vec<NewsletterSubscription>> {
        let rows =
            sqlx::query("SELECT * FROM newsletters ORDER BY subscribed_at DESC, rowid DESC")
                .fetch_all(&self.pool)
                .await?;
        rows.iter().map(subscription_from_row).collect()
    }

    async fn insert_lead(&self, lead: NewLead) -> Result<Lead> {
        let record = Lead {
            id: RecordId::new(),
            name: lead.name,
            email: lead.email,
            report_data: lead.report_data,
            downloaded_at: Utc::now(),
        };
        sqlx::query(
            "INSERT INTO roi_downloads (id, name, email, report_data, downloaded_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.id.to_string())
        .bind(&record.name)
        .bind(&record.email)
        .bind(serde_json::to_string(&record.report_data)?)
        .bind(format_time(record.downloaded_at))
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    async fn list_leads(&self) -> Result<Vec<Lead>> {
        let rows =
            sqlx::query("SELECT * FROM roi_downloads ORDER BY downloaded_at DESC, rowid DESC")
                .fetch_all(&self.pool)
                .await?;
        rows.iter().map(lead_from_row).collect()
    }

    async fn list_blogs_by_date(&self) -> Result<Vec<BlogPost>> {
        self.fetch_blogs("date DESC").await
    }

    async fn list_blogs_by_creation(&self) -> Result<Vec<BlogPost>> {
        self.fetch_blogs("created_at DESC").await
    }

    async fn find_blog_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        self.fetch_blog_where("slug", slug).await
    }

    async fn find_blog(&self, id: RecordId) -> Result<Option<BlogPost>> {
        self.fetch_blog_where("id", &id.to_string()).await
    }

    async fn slug_taken(&self, slug: &str, except: Option<RecordId>) -> Result<bool> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs WHERE slug = ? AND id IS NOT ?")
            .bind(slug)
            .bind(except.map(|id| id.to_string()))
            .fetch_one(&self.pool)
            .await?;
        Ok(n > 0)
    }

    async fn insert_blog(&self, post: NewBlogPost) -> Result<BlogPost> {
        let record = BlogPost::from_new(RecordId::new(), post, Utc::now());
        let sql = format!(
            "INSERT INTO blogs ({BLOG_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );
        sqlx::query(&sql)
            .bind(record.id.to_string())
            .bind(&record.title)
            .bind(&record.excerpt)
            .bind(&record.content)
            .bind(&record.category)
            .bind(&record.date)
            .bind(&record.slug)
            .bind(&record.image)
            .bind(&record.image_id)
            .bind(&record.author)
            .bind(&record.read_time)
            .bind(format_time(record.created_at))
            .bind(format_time(record.updated_at))
            .execute(&self.pool)
            .await?;
        Ok(record)
    }

    async fn update_blog(&self, id: RecordId, patch: &BlogPatch) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE blogs SET
                title = COALESCE(?, title),
                excerpt = COALESCE(?, excerpt),
                content = COALESCE(?, content),
                category = COALESCE(?, category),
                date = COALESCE(?, date),
                slug = COALESCE(?, slug),
                image_id = COALESCE(?, image_id),
                image = COALESCE(?, image),
                author = COALESCE(?, author),
                read_time = COALESCE(?, read_time),
                updated_at = ?
             WHERE id = ?",
        )
        .bind(patch.title.as_deref())
        .bind(patch.excerpt.as_deref())
        .bind(patch.content.as_deref())
        .bind(patch.category.as_deref())
        .bind(patch.date.as_deref())
        .bind(patch.slug.as_deref())
        .bind(patch.image_id.as_deref())
        .bind(patch.image_id.as_deref().map(image_url))
        .bind(patch.author.as_deref())
        .bind(patch.read_time.as_deref())
        .bind(format_time(Utc::now()))
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_blog(&self, id: RecordId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn stats(&self) -> Result<SiteStats> {
        Ok(SiteStats {
            contacts: self.count("contacts").await?,
            newsletters: self.count("newsletters").await?,
            downloads: self.count("roi_downloads").await?,
            blogs: self.count("blogs").await?,
        })
    }
}

// ============================================================================
// BlobStore
// ============================================================================

#[async_trait]
impl BlobStore for SqliteStore {
    async fn put(
        &self,
        filename: &str,
        content_type: Option<&str>,
        data: Vec<u8>,
    ) -> Result<RecordId> {
        let id = RecordId::new();
        sqlx::query(
            "INSERT INTO blobs (id, filename, content_type, data, uploaded_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(filename)
        .bind(content_type)
        .bind(data)
        .bind(format_time(Utc::now()))
        .execute(&self.pool)
        .await?;
        tracing::debug!(%id, filename, "stored blob");
        Ok(id)
    }

    async fn get(&self, id: RecordId) -> Result<Option<StoredImage>> {
        let row = sqlx::query("SELECT * FROM blobs WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(StoredImage {
            id: id_column(&row)?,
            filename: text(&row, "filename")?,
            content_type: row.try_get::<Option<String>, _>("content_type")?,
            data: row.try_get::<Vec<u8>, _>("data")?,
            uploaded_at: time_column(&row, "uploaded_at")?,
        }))
    }

    async fn delete(&self, id: RecordId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blobs WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
