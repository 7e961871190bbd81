//! Completion trait for LLM operations.
//!
//! The pipeline only needs one capability from a model: send a prompt,
//! get text back. Prompting and response parsing live in
//! [`crate::pipeline`], not in implementations of this trait.

use async_trait::async_trait;

use crate::error::BoxError;

/// Completion trait for LLM providers.
///
/// Implementations wrap a specific provider (Anthropic, OpenAI, etc.)
/// with a fixed model identifier. Transport, auth and quota failures are
/// returned as-is; the pipeline decides how to report them.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Complete a single user prompt, generating at most `max_tokens`.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, BoxError>;

    /// Model identifier for logging.
    fn model(&self) -> &str;
}
