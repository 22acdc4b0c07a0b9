//! # flownetics-api
//!
//! HTTP API for the Flownetics website.
//!
//! - Contact form, newsletter signup and ROI report delivery
//! - Blog publishing with stored cover images
//! - Reaction analysis through a hosted language model
//! - Admin dashboard endpoints behind bearer-token sessions
//!
//! [`AppState`] carries the storage, mail, analysis and auth handles every
//! handler needs; [`routes::router`] wires them to paths.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::AppConfig;
pub use error::{ApiError, Error, Result};
pub use routes::{router, router_with_static};
pub use server::serve;
pub use state::AppState;
