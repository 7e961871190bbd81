//! Analysis pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Fetch and text extraction
//! - Ticker extraction (first model call)
//! - First-ticker summary (second model call)

pub mod analyzer;
pub mod parse;
pub mod prompts;
pub mod stage;

pub use analyzer::Analyzer;
pub use parse::{parse_summary, parse_tickers};
pub use prompts::{
    format_extraction_prompt, format_summary_prompt, EXTRACTION_PROMPT, SUMMARY_MARKER,
    SUMMARY_PROMPT, TICKERS_MARKER,
};
pub use stage::AnalysisStage;
