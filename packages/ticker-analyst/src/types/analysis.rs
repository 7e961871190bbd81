//! Analysis output types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text used when the model response carries no `SUMMARY:` marker.
pub const NO_SUMMARY: &str = "No summary available";

/// Tickers in order of appearance in the model response.
///
/// Duplicates are kept and case is left as the model emitted it.
pub type TickerSet = Vec<String>;

/// Analyst-style summary for a single ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Summary(String);

impl Summary {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The sentinel summary for a parse miss.
    pub fn missing() -> Self {
        Self(NO_SUMMARY.to_string())
    }

    /// Whether this is the parse-miss sentinel.
    pub fn is_missing(&self) -> bool {
        self.0 == NO_SUMMARY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::missing()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Summary {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Result of analyzing one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// URL that was analyzed
    pub url: String,

    /// Every ticker the model reported
    pub tickers: TickerSet,

    /// Summary for `tickers[0]`
    pub summary: Summary,
}

impl AnalysisResult {
    /// The ticker the summary is about.
    pub fn summarized_ticker(&self) -> Option<&str> {
        self.tickers.first().map(String::as_str)
    }
}
