//! Anthropic implementation of the completion trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticker_analyst::ai::AnthropicCompletion;
//!
//! let model = AnthropicCompletion::new("sk-ant-...").with_model("claude-3-sonnet-20240229");
//! let analyzer = Analyzer::new(fetcher, model);
//! ```

use anthropic_client::AnthropicClient;
use async_trait::async_trait;

use crate::error::{AnalysisError, BoxError, Result};
use crate::security::AICredentials;
use crate::traits::completion::CompletionModel;
use crate::types::config::DEFAULT_MODEL;

/// Anthropic-backed completion model.
///
/// Sends each prompt as a single user message to a fixed model.
#[derive(Clone, Debug)]
pub struct AnthropicCompletion {
    client: AnthropicClient,
    model: String,
}

impl AnthropicCompletion {
    /// Create a new completion model with the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: AnthropicClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from configured credentials.
    pub fn from_credentials(credentials: &AICredentials) -> Self {
        let mut client = AnthropicClient::new(credentials.api_key.expose());
        if let Some(base_url) = &credentials.base_url {
            client = client.with_base_url(base_url.clone());
        }
        Self {
            client,
            model: credentials.model.clone(),
        }
    }

    /// Create from environment variable `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let client =
            AnthropicClient::from_env().map_err(|e| AnalysisError::Config(e.to_string()))?;
        Ok(Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Set the model (default: claude-3-sonnet-20240229).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies, test servers, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    /// Get the underlying client.
    pub fn client(&self) -> &AnthropicClient {
        &self.client
    }
}

#[async_trait]
impl CompletionModel for AnthropicCompletion {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> std::result::Result<String, BoxError> {
        self.client
            .complete(&self.model, prompt, max_tokens)
            .await
            .map_err(|e| Box::new(e) as BoxError)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
