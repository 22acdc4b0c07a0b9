//! The text-generation seam.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::Result;

/// A model that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Generator that answers every prompt with canned text.
///
/// Used in tests and for local development without an API key. Prompts are
/// kept so tests can inspect what was asked.
#[derive(Debug, Default)]
pub struct StaticGenerator {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl StaticGenerator {
    /// Create a generator that always returns `response`.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for StaticGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.response.clone())
    }
}
