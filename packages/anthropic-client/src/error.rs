//! Error types for Anthropic client.

use thiserror::Error;

/// Result type for Anthropic client operations.
pub type Result<T> = std::result::Result<T, AnthropicError>;

/// Anthropic client errors.
#[derive(Debug, Error)]
pub enum AnthropicError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, overloaded, invalid request)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl AnthropicError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
