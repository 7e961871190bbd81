//! LLM prompts for the analysis pipeline.
//!
//! Each prompt asks the model to answer with a literal marker that
//! [`crate::pipeline::parse`] matches on:
//!
//! | Prompt | Expected answer line |
//! |---|---|
//! | [`EXTRACTION_PROMPT`] | `TICKERS: [AAPL, GOOGL]` |
//! | [`SUMMARY_PROMPT`] | `SUMMARY: <text to end of response>` |
//!
//! Page text is embedded verbatim, without escaping.

/// Marker that introduces the ticker list.
pub const TICKERS_MARKER: &str = "TICKERS:";

/// Marker that introduces the summary.
pub const SUMMARY_MARKER: &str = "SUMMARY:";

/// Prompt for extracting ticker symbols from page text.
pub const EXTRACTION_PROMPT: &str = r#"Analyze the following text and:
1. Extract all stock tickers mentioned (e.g., AAPL, GOOGL, etc.)
2. Return your response in this exact format (don't forget the brackets []):
TICKERS: [list all tickers separated by commas]

Text to analyze:
{text}"#;

/// Prompt for summarizing page text with respect to one ticker.
pub const SUMMARY_PROMPT: &str = r#"Analyze the following text and:
1. Provide a brief summary of the main points related to stock ticker {ticker}. The summary should be written for a professional investment analyst.
2. Return your response in this exact format:
SUMMARY: [your summary]

Text to analyze:
{text}"#;

/// Format the ticker extraction prompt.
pub fn format_extraction_prompt(text: &str) -> String {
    EXTRACTION_PROMPT.replace("{text}", text)
}

/// Format the summary prompt for `ticker`.
///
/// `{text}` is substituted last so page text is never re-scanned for
/// placeholders.
pub fn format_summary_prompt(text: &str, ticker: &str) -> String {
    SUMMARY_PROMPT
        .replace("{ticker}", ticker)
        .replace("{text}", text)
}
