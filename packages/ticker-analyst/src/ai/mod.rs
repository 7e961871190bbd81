//! Reference completion model implementations.

mod anthropic;

pub use anthropic::AnthropicCompletion;
