//! # flownetics-analysis
//!
//! Server-side "AI Process Architect": asks a generative text model whether a
//! batch reaction can move to continuous flow and returns an HTML fragment.
//!
//! The model sits behind [`TextGenerator`] so the HTTP layer and tests can
//! swap [`GeminiClient`] for [`StaticGenerator`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod error;
pub mod gemini;
pub mod generator;

pub use analyzer::{ReactionAnalyzer, build_prompt, strip_code_fences};
pub use error::{Error, Result};
pub use gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient};
pub use generator::{StaticGenerator, TextGenerator};
