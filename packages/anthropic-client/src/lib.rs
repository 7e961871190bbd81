//! Pure Anthropic REST API client
//!
//! A clean, minimal client for the Anthropic Messages API with no domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use anthropic_client::{AnthropicClient, Message, MessagesRequest};
//!
//! let client = AnthropicClient::from_env()?;
//!
//! let response = client
//!     .messages(
//!         MessagesRequest::new("claude-3-sonnet-20240229", 1000)
//!             .message(Message::user("Hello!")),
//!     )
//!     .await?;
//!
//! println!("{}", response.text());
//! ```

pub mod error;
pub mod types;

pub use error::{AnthropicError, Result};
pub use types::*;

use std::fmt;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Default `anthropic-version` header value.
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Pure Anthropic API client.
pub struct AnthropicClient {
    http_client: Client,
    api_key: SecretString,
    base_url: String,
    api_version: String,
}

impl AnthropicClient {
    /// Create a new Anthropic client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: SecretString::from(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Create from environment variable `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| AnthropicError::Config("ANTHROPIC_API_KEY not set".into()))?;
        if api_key.trim().is_empty() {
            return Err(AnthropicError::Config("ANTHROPIC_API_KEY is empty".into()));
        }
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, test servers, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the `anthropic-version` header.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a message.
    ///
    /// Sends the conversation to the Messages API and returns the raw response.
    pub async fn messages(&self, request: MessagesRequest) -> Result<MessagesResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", &self.api_version)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Anthropic request failed");
                AnthropicError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<types::ErrorEnvelope>(&error_text) {
                Ok(envelope) => format!("{}: {}", envelope.error.error_type, envelope.error.message),
                Err(_) => error_text,
            };
            warn!(status = %status, error = %message, "Anthropic API error");
            return Err(AnthropicError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let messages_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AnthropicError::Parse(e.to_string()))?;

        if messages_response.hit_max_tokens() {
            warn!(
                model = %request.model,
                max_tokens = request.max_tokens,
                "Anthropic response truncated at max_tokens"
            );
        }

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            output_tokens = messages_response.usage.as_ref().map(|u| u.output_tokens),
            "Anthropic message created"
        );

        Ok(messages_response)
    }

    /// Single-turn completion returning only the response text.
    pub async fn complete(&self, model: &str, prompt: &str, max_tokens: u32) -> Result<String> {
        let request = MessagesRequest::new(model, max_tokens).message(Message::user(prompt));
        let response = self.messages(request).await?;
        Ok(response.text())
    }
}

impl Clone for AnthropicClient {
    fn clone(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            api_key: SecretString::from(self.api_key.expose_secret().to_string()),
            base_url: self.base_url.clone(),
            api_version: self.api_version.clone(),
        }
    }
}

impl fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}
