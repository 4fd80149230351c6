//! Content generation proxy.
//!
//! Wraps the raw prompt with per-category framing, makes exactly one external
//! attempt, and downgrades every failure to deterministic canned content. The
//! proxy never returns an error to its caller.

pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use tracing::warn;

use crate::ai::prompts::{enhanced_prompt, mock_content};
use crate::llm_client::CompletionBackend;

/// The generation proxy held in application state. Without a backend every
/// request is served from the fallback templates.
#[derive(Clone)]
pub struct ContentGenerator {
    backend: Option<Arc<dyn CompletionBackend>>,
}

impl ContentGenerator {
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>) -> Self {
        Self { backend }
    }

    /// Produces content for a prompt. Never returns an error: one external
    /// attempt, and any failure or empty response falls back to canned content.
    pub async fn generate(&self, prompt: &str, field_type: &str) -> String {
        if let Some(backend) = &self.backend {
            match backend.complete(&enhanced_prompt(prompt, field_type)).await {
                Ok(text) if !text.trim().is_empty() => return text.trim().to_string(),
                Ok(_) => warn!("Generation backend returned empty content, using fallback"),
                Err(e) => warn!("Generation call failed, using fallback: {e}"),
            }
        }
        mock_content(prompt, field_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct StubBackend {
        reply: Result<String, ()>,
    }

    #[async_trait]
    impl CompletionBackend for StubBackend {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            self.reply.clone().map_err(|_| LlmError::EmptyContent)
        }
    }

    fn with_reply(reply: Result<&str, ()>) -> ContentGenerator {
        ContentGenerator::new(Some(Arc::new(StubBackend {
            reply: reply.map(str::to_string),
        })))
    }

    #[tokio::test]
    async fn test_backend_text_is_trimmed_and_returned() {
        let generator = with_reply(Ok("  A seasoned engineer.  "));
        let content = generator.generate("Senior engineer", "profile summary").await;
        assert_eq!(content, "A seasoned engineer.");
    }

    #[tokio::test]
    async fn test_backend_error_falls_back() {
        let generator = with_reply(Err(()));
        let content = generator.generate("Senior engineer", "profile summary").await;
        assert_eq!(
            content,
            "Mock Profile Summary: Senior engineer. This is a generated summary."
        );
    }

    #[tokio::test]
    async fn test_blank_backend_text_falls_back() {
        let generator = with_reply(Ok("   \n"));
        let content = generator.generate("X", "job description").await;
        assert_eq!(
            content,
            "Mock Job Description: X. This is a generated job description."
        );
    }

    #[tokio::test]
    async fn test_no_backend_always_falls_back() {
        let generator = ContentGenerator::new(None);
        let content = generator.generate("X", "unknown").await;
        assert_eq!(content, "Mock Content: X");
    }
}
