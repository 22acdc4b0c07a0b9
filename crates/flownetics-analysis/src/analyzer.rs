//! Reaction feasibility analysis.

use std::sync::Arc;

use crate::{Error, Result, TextGenerator};

const MAX_INPUT_CHARS: usize = 500;

/// Build the model prompt for a reaction description.
///
/// The answer is requested as three fixed HTML elements so the site can drop
/// it straight into the results panel.
pub fn build_prompt(reaction: &str) -> String {
    format!(
        "You are a Senior Flow Chemist at Flownetics. Assess how feasible it is to move \
         this batch reaction to continuous flow: \"{reaction}\".\n\
         Answer in HTML only (no markdown, no <html> or <body> tags), using exactly these elements:\n\
         <h3>Feasibility Score: [X]/10</h3>\n\
         <p><strong>Reactor Recommendation:</strong> [Brief Type]</p>\n\
         <p><strong>Engineering Insight:</strong> [1-2 sentences on the benefits of flow or the main challenges]</p>\n\
         Be concise, technical and optimistic."
    )
}

/// Remove markdown code fences a model sometimes wraps HTML in.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```html", "").replace("```", "").trim().to_string()
}

/// Runs reaction descriptions through a [`TextGenerator`].
#[derive(Clone)]
pub struct ReactionAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl ReactionAnalyzer {
    /// Create an analyzer over `generator`.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Analyse `reaction` and return an HTML fragment.
    ///
    /// Blank input is rejected before any model call. Long input is cut to
    /// a fixed number of characters.
    pub async fn analyze(&self, reaction: &str) -> Result<String> {
        let reaction = reaction.trim();
        if reaction.is_empty() {
            return Err(Error::invalid_input("Reaction description is required"));
        }
        let reaction: String = reaction.chars().take(MAX_INPUT_CHARS).collect();

        tracing::debug!(reaction = %reaction, "analysing reaction");
        let raw = self.generator.generate(&build_prompt(&reaction)).await?;
        let html = strip_code_fences(&raw);
        if html.is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(html)
    }
}

impl std::fmt::Debug for ReactionAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionAnalyzer").finish_non_exhaustive()
    }
}
