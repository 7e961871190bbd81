//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the analysis library
//! without making real LLM or network calls. See also
//! [`MockFetcher`](crate::fetchers::MockFetcher).

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::error::BoxError;
use crate::traits::completion::CompletionModel;

/// Error returned by [`MockCompletion`] for scripted failures.
#[derive(Debug, Clone, Error)]
#[error("mock completion error: {0}")]
pub struct MockCompletionError(pub String);

/// Record of a call made to the mock model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCompletionCall {
    pub prompt: String,
    pub max_tokens: u32,
}

/// A mock completion model for testing.
///
/// Responses are chosen in this order:
/// 1. the next queued response (`with_response`, `with_error`), if any
/// 2. the first `when_prompt_contains` rule matching the prompt
/// 3. the default response
///
/// With none of those, the call fails.
#[derive(Default)]
pub struct MockCompletion {
    /// Queued responses, consumed in order
    queue: Arc<RwLock<VecDeque<Result<String, String>>>>,

    /// (needle, response) pairs matched against the prompt
    rules: Arc<RwLock<Vec<(String, String)>>>,

    /// Response when nothing else applies
    default_response: Arc<RwLock<Option<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockCompletionCall>>>,
}

impl MockCompletion {
    /// Create a new mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one response.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.queue.write().unwrap().push_back(Ok(response.into()));
        self
    }

    /// Queue several responses in order.
    pub fn with_responses<I, S>(self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queue
            .write()
            .unwrap()
            .extend(responses.into_iter().map(|r| Ok(r.into())));
        self
    }

    /// Queue one failure.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.queue.write().unwrap().push_back(Err(message.into()));
        self
    }

    /// Answer `response` whenever the prompt contains `needle`.
    pub fn when_prompt_contains(
        self,
        needle: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        self.rules
            .write()
            .unwrap()
            .push((needle.into(), response.into()));
        self
    }

    /// Answer `response` when no queued response or rule applies.
    pub fn with_default_response(self, response: impl Into<String>) -> Self {
        *self.default_response.write().unwrap() = Some(response.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockCompletionCall> {
        self.calls.read().unwrap().clone()
    }

    /// Prompts sent, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .map(|c| c.prompt.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }

    fn respond(&self, prompt: &str) -> Result<String, String> {
        if let Some(queued) = self.queue.write().unwrap().pop_front() {
            return queued;
        }

        let rules = self.rules.read().unwrap();
        if let Some((_, response)) = rules.iter().find(|(needle, _)| prompt.contains(needle)) {
            return Ok(response.clone());
        }

        self.default_response
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| "no scripted response left".to_string())
    }
}

impl Clone for MockCompletion {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
            rules: Arc::clone(&self.rules),
            default_response: Arc::clone(&self.default_response),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl CompletionModel for MockCompletion {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, BoxError> {
        self.calls.write().unwrap().push(MockCompletionCall {
            prompt: prompt.to_string(),
            max_tokens,
        });

        self.respond(prompt)
            .map_err(|message| Box::new(MockCompletionError(message)) as BoxError)
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queue_then_rules_then_default() {
        let mock = MockCompletion::new()
            .with_response("first")
            .when_prompt_contains("ticker", "rule")
            .with_default_response("fallback");

        assert_eq!(mock.complete("about a ticker", 10).await.unwrap(), "first");
        assert_eq!(mock.complete("about a ticker", 10).await.unwrap(), "rule");
        assert_eq!(mock.complete("something else", 10).await.unwrap(), "fallback");
    }

    #[tokio::test]
    async fn test_exhausted_mock_fails() {
        let mock = MockCompletion::new();
        let err = mock.complete("hello", 10).await.unwrap_err();
        assert!(err.to_string().contains("no scripted response"));
    }

    #[tokio::test]
    async fn test_queued_error() {
        let mock = MockCompletion::new().with_error("rate limited").with_response("ok");

        let err = mock.complete("a", 1).await.unwrap_err();
        assert_eq!(err.to_string(), "mock completion error: rate limited");
        assert_eq!(mock.complete("b", 2).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_call_tracking_is_shared_across_clones() {
        let mock = MockCompletion::new().with_default_response("x");
        let clone = mock.clone();

        clone.complete("p1", 5).await.unwrap();
        mock.complete("p2", 6).await.unwrap();

        assert_eq!(mock.call_count(), 2);
        assert_eq!(
            mock.calls()[0],
            MockCompletionCall {
                prompt: "p1".into(),
                max_tokens: 5
            }
        );
        assert_eq!(mock.prompts(), vec!["p1", "p2"]);

        mock.clear_calls();
        assert_eq!(clone.call_count(), 0);
    }
}
