//! # flownetics-storage
//!
//! Storage backends for the Flownetics site backend.
//!
//! This crate provides:
//! - Storage abstraction traits ([`DocumentStore`], [`BlobStore`])
//! - An SQLite backend built on sqlx ([`SqliteStore`])
//! - In-memory backends for tests and local development
//!   ([`MemoryStore`], [`MemoryBlobStore`])
//!
//! Handles are passed to the HTTP layer explicitly; nothing in here is a
//! process-wide singleton.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod database;
pub mod error;
pub mod memory;
pub mod traits;

pub use database::SqliteStore;
pub use error::{Error, Result};
pub use memory::{MemoryBlobStore, MemoryStore};
pub use traits::{BlobStore, DocumentStore};
