//! Ticker Analyst
//!
//! Fetches a web page, reduces it to plain text, and asks an LLM two
//! questions about it: which stock tickers does it mention, and what does
//! it say about the first one?
//!
//! # Response format
//!
//! The model is prompted to answer with literal markers, and responses
//! are parsed by matching them:
//!
//! - `TICKERS: [AAPL, GOOGL]` - no marker means no tickers
//! - `SUMMARY: ...` (to end of response) - no marker means `"No summary available"`
//!
//! A page with no tickers ends the run with
//! [`AnalysisError::EmptyTickerSet`] instead of a summary call.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ticker_analyst::{Analyzer, HttpFetcher};
//! use ticker_analyst::ai::AnthropicCompletion;
//!
//! let analyzer = Analyzer::new(HttpFetcher::new()?, AnthropicCompletion::from_env()?);
//! let result = analyzer.analyze("https://example.com/newsletter").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator seams (PageFetcher, CompletionModel)
//! - [`text`] - HTML to plain text
//! - [`pipeline`] - Prompts, response parsing, and the Analyzer
//! - [`fetchers`] - Fetcher implementations (HttpFetcher, MockFetcher)
//! - [`security`] - Credential handling
//! - [`testing`] - Mock completion model

pub mod config;
pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod security;
pub mod testing;
pub mod text;
pub mod traits;
pub mod types;

#[cfg(feature = "anthropic")]
pub mod ai;

// Re-export core types at crate root
pub use config::Config;
pub use error::{AnalysisError, BoxError, FetchError};
pub use traits::{
    completion::CompletionModel,
    fetcher::{PageFetcher, RawPage},
};
pub use types::{
    analysis::{AnalysisResult, Summary, TickerSet, NO_SUMMARY},
    config::AnalyzerConfig,
    page::PageText,
};

// Re-export pipeline components
pub use pipeline::{
    format_extraction_prompt, format_summary_prompt, parse_summary, parse_tickers, AnalysisStage,
    Analyzer,
};

pub use text::extract_text;

// Re-export fetchers
pub use fetchers::{HttpFetcher, MockFetcher};

pub use security::{AICredentials, SecretString};

// Re-export testing utilities
pub use testing::MockCompletion;
