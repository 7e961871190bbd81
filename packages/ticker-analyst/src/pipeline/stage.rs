//! Stages of a single analysis run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an analysis run is.
///
/// ```text
/// Fetching -> ExtractingTickers -> SummarizingFirstTicker -> Done
///     \              \                      \
///      `-------------+----------------------+--> Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    /// Fetching the page and reducing it to text
    Fetching,
    /// First model call: which tickers does the page mention?
    ExtractingTickers,
    /// Second model call: summary for the first ticker
    SummarizingFirstTicker,
    /// Result assembled
    Done,
    /// A stage failed; terminal
    Failed,
}

impl AnalysisStage {
    /// The stage that follows this one on success.
    ///
    /// Terminal stages map to themselves.
    pub fn next(self) -> Self {
        match self {
            Self::Fetching => Self::ExtractingTickers,
            Self::ExtractingTickers => Self::SummarizingFirstTicker,
            Self::SummarizingFirstTicker => Self::Done,
            Self::Done => Self::Done,
            Self::Failed => Self::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Human-readable description used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fetching => "fetching page",
            Self::ExtractingTickers => "extracting tickers",
            Self::SummarizingFirstTicker => "summarizing first ticker",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
