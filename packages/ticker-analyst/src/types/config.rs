//! Configuration types for the analysis pipeline.

use serde::{Deserialize, Serialize};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";

/// Output token ceiling used when none is configured.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Configuration for the analysis pipeline.
///
/// The model identifier belongs to the [`CompletionModel`](crate::traits::completion::CompletionModel)
/// implementation; the pipeline only bounds how much it may generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum tokens the model may generate per call.
    ///
    /// Applies to both the extraction and the summary call.
    /// Default: 1000.
    pub max_tokens: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output token ceiling.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
