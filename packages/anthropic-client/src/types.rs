//! Anthropic Messages API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Messages
// =============================================================================

/// Messages API request.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    /// Model to use (e.g., "claude-3-sonnet-20240229")
    pub model: String,

    /// Upper bound on generated tokens (required by the API)
    pub max_tokens: u32,

    /// Conversation messages
    pub messages: Vec<Message>,

    /// System prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Sampling temperature (0.0 to 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl MessagesRequest {
    /// Create a new request for the given model and token ceiling.
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: Vec::new(),
            system: None,
            temperature: None,
        }
    }

    /// Add a message to the conversation.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Set the system prompt.
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Conversation message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Role: "user" or "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message (for prefilling).
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Messages API response.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    /// Message id assigned by the API
    #[serde(default)]
    pub id: String,

    /// Model that produced the response
    #[serde(default)]
    pub model: String,

    /// Content blocks in the order generated
    pub content: Vec<ContentBlock>,

    /// Why generation stopped ("end_turn", "max_tokens", ...)
    #[serde(default)]
    pub stop_reason: Option<String>,

    /// Token usage statistics
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl MessagesResponse {
    /// Concatenated text of all text blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect()
    }

    /// Whether generation was cut off by the token ceiling.
    pub fn hit_max_tokens(&self) -> bool {
        self.stop_reason.as_deref() == Some("max_tokens")
    }
}

/// A single block of response content.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text output
    Text { text: String },

    /// Tool use and other block kinds this client does not interpret
    #[serde(other)]
    Other,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// Tokens in the prompt
    pub input_tokens: u32,

    /// Tokens in the completion
    pub output_tokens: u32,
}

// =============================================================================
// Errors
// =============================================================================

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = MessagesRequest::new("claude-3-sonnet-20240229", 1000)
            .message(Message::user("Hello"))
            .temperature(0.2);

        assert_eq!(req.model, "claude-3-sonnet-20240229");
        assert_eq!(req.max_tokens, 1000);
        assert_eq!(req.messages, vec![Message::user("Hello")]);
        assert_eq!(req.temperature, Some(0.2));
    }

    #[test]
    fn test_request_omits_unset_fields() {
        let req = MessagesRequest::new("m", 10).message(Message::user("hi"));
        let json = serde_json::to_value(&req).unwrap();

        assert!(json.get("system").is_none());
        assert!(json.get("temperature").is_none());
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_text_skips_non_text_blocks() {
        let raw = r#"{
            "id": "msg_1",
            "model": "claude-3-sonnet-20240229",
            "content": [
                {"type": "text", "text": "TICKERS: "},
                {"type": "tool_use", "id": "t1", "name": "x", "input": {}},
                {"type": "text", "text": "[AAPL]"}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 4}
        }"#;

        let response: MessagesResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.text(), "TICKERS: [AAPL]");
        assert_eq!(response.content[1], ContentBlock::Other);
        assert!(!response.hit_max_tokens());
        assert_eq!(response.usage.unwrap().output_tokens, 4);
    }
}
