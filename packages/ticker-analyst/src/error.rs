//! Typed errors for the ticker analysis library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Parse misses are not
//! errors: a response without the expected marker degrades to an empty
//! ticker list or the summary sentinel.

use thiserror::Error;

use crate::pipeline::AnalysisStage;

/// Boxed cause from a collaborator (LLM transport, HTTP client).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can end an analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Page could not be fetched
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// LLM completion failed
    #[error("model call failed while {stage}: {source}")]
    ModelCall {
        stage: AnalysisStage,
        #[source]
        source: BoxError,
    },

    /// Summarization was reached but no tickers were extracted
    #[error("no tickers found in page; nothing to summarize")]
    EmptyTickerSet,

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

impl AnalysisError {
    /// Stage the analysis was in when it failed.
    ///
    /// Configuration errors happen before any stage runs.
    pub fn stage(&self) -> Option<AnalysisStage> {
        match self {
            Self::Fetch(_) => Some(AnalysisStage::Fetching),
            Self::ModelCall { stage, .. } => Some(*stage),
            Self::EmptyTickerSet => Some(AnalysisStage::SummarizingFirstTicker),
            Self::Config(_) => None,
        }
    }
}

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// URL scheme not allowed (e.g., file://, ftp://)
    #[error("disallowed URL scheme: {0}")]
    DisallowedScheme(String),

    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[source] BoxError),

    /// Server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Response body could not be read
    #[error("failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: BoxError,
    },
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
