//! The analysis pipeline.
//!
//! One [`Analyzer::analyze`] call walks the [`AnalysisStage`] machine:
//!
//! 1. **Fetching** - fetch the page, reduce it to [`PageText`]
//! 2. **ExtractingTickers** - extraction prompt, model call, [`parse_tickers`]
//! 3. **SummarizingFirstTicker** - summary prompt for `tickers[0]`, model call, [`parse_summary`]
//! 4. **Done** - return the [`AnalysisResult`]
//!
//! Any failure moves the run to `Failed` and is returned as-is. Nothing
//! is retried and no partial result is returned.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticker_analyst::{Analyzer, HttpFetcher, ai::AnthropicCompletion};
//!
//! let analyzer = Analyzer::new(HttpFetcher::new()?, AnthropicCompletion::from_env()?);
//! let result = analyzer.analyze("https://example.com/newsletter").await?;
//! println!("{:?}: {}", result.tickers, result.summary);
//! ```

use tracing::{debug, info, trace, warn};

use crate::error::{AnalysisError, Result};
use crate::pipeline::parse::{parse_summary, parse_tickers};
use crate::pipeline::prompts::{format_extraction_prompt, format_summary_prompt};
use crate::pipeline::stage::AnalysisStage;
use crate::text::{extract_text, extract_title};
use crate::traits::completion::CompletionModel;
use crate::traits::fetcher::PageFetcher;
use crate::types::analysis::{AnalysisResult, Summary, TickerSet};
use crate::types::config::AnalyzerConfig;
use crate::types::page::PageText;

/// Data carried between stages of one run.
enum Step {
    Fetching,
    ExtractingTickers { text: PageText },
    SummarizingFirstTicker { text: PageText, tickers: TickerSet },
    Done(AnalysisResult),
}

impl Step {
    fn stage(&self) -> AnalysisStage {
        match self {
            Step::Fetching => AnalysisStage::Fetching,
            Step::ExtractingTickers { .. } => AnalysisStage::ExtractingTickers,
            Step::SummarizingFirstTicker { .. } => AnalysisStage::SummarizingFirstTicker,
            Step::Done(_) => AnalysisStage::Done,
        }
    }
}

/// Fetches a page and asks a model which tickers it mentions and what it
/// says about the first one.
///
/// Holds no per-run state, so one analyzer can serve concurrent calls.
pub struct Analyzer<F: PageFetcher, M: CompletionModel> {
    fetcher: F,
    model: M,
    config: AnalyzerConfig,
}

impl<F: PageFetcher, M: CompletionModel> Analyzer<F, M> {
    /// Create an analyzer with the default configuration.
    pub fn new(fetcher: F, model: M) -> Self {
        Self::with_config(fetcher, model, AnalyzerConfig::default())
    }

    /// Create an analyzer with a custom configuration.
    pub fn with_config(fetcher: F, model: M, config: AnalyzerConfig) -> Self {
        Self {
            fetcher,
            model,
            config,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one URL end to end.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult> {
        info!(
            url = %url,
            fetcher = self.fetcher.name(),
            model = self.model.model(),
            "Analysis starting"
        );

        let mut step = Step::Fetching;
        loop {
            let stage = step.stage();
            let next = match step {
                Step::Done(result) => {
                    info!(
                        url = %url,
                        tickers = ?result.tickers,
                        summary_missing = result.summary.is_missing(),
                        "Analysis complete"
                    );
                    return Ok(result);
                }
                Step::Fetching => self
                    .fetch_text(url)
                    .await
                    .map(|text| Step::ExtractingTickers { text }),
                Step::ExtractingTickers { text } => self
                    .extract_tickers(&text)
                    .await
                    .map(|tickers| Step::SummarizingFirstTicker { text, tickers }),
                Step::SummarizingFirstTicker { text, tickers } => self
                    .summarize_first_ticker(&text, &tickers)
                    .await
                    .map(|summary| {
                        Step::Done(AnalysisResult {
                            url: url.to_string(),
                            tickers,
                            summary,
                        })
                    }),
            };

            step = match next {
                Ok(next) => {
                    debug!(from = %stage, to = %next.stage(), "Stage transition");
                    next
                }
                Err(e) => {
                    warn!(
                        url = %url,
                        stage = %stage,
                        to = %AnalysisStage::Failed,
                        error = %e,
                        "Analysis failed"
                    );
                    return Err(e);
                }
            };
        }
    }

    /// Fetch `url` and reduce it to page text.
    pub async fn fetch_text(&self, url: &str) -> Result<PageText> {
        let page = self.fetcher.fetch(url).await?;
        let text = extract_text(&page.html);
        let title = extract_title(&page.html);

        debug!(
            url = %page.final_url,
            title = title.as_deref().unwrap_or(""),
            html_len = page.html.len(),
            text_len = text.len(),
            "Page text extracted"
        );
        trace!(text = %text, "Page text");

        Ok(text)
    }

    /// Ask the model which tickers `text` mentions.
    ///
    /// An answer without the `TICKERS: [...]` line yields an empty set.
    pub async fn extract_tickers(&self, text: &PageText) -> Result<TickerSet> {
        let prompt = format_extraction_prompt(text.as_str());
        let response = self
            .complete(AnalysisStage::ExtractingTickers, &prompt)
            .await?;

        let tickers = parse_tickers(&response);
        if tickers.is_empty() {
            warn!(response_len = response.len(), "No TICKERS line in model response");
        }
        debug!(tickers = ?tickers, "Tickers extracted");

        Ok(tickers)
    }

    /// Summarize `text` for the first of `tickers`.
    ///
    /// Fails with [`AnalysisError::EmptyTickerSet`] before any model call
    /// when there is nothing to summarize.
    pub async fn summarize_first_ticker(
        &self,
        text: &PageText,
        tickers: &[String],
    ) -> Result<Summary> {
        let ticker = tickers.first().ok_or(AnalysisError::EmptyTickerSet)?;
        self.summarize_ticker(text, ticker).await
    }

    /// Summarize `text` for one ticker.
    ///
    /// An answer without a `SUMMARY:` marker yields the sentinel summary.
    pub async fn summarize_ticker(&self, text: &PageText, ticker: &str) -> Result<Summary> {
        debug!(ticker = %ticker, "Summarizing ticker");

        let prompt = format_summary_prompt(text.as_str(), ticker);
        let response = self
            .complete(AnalysisStage::SummarizingFirstTicker, &prompt)
            .await?;

        let summary = parse_summary(&response);
        if summary.is_missing() {
            warn!(ticker = %ticker, "No SUMMARY marker in model response");
        }

        Ok(summary)
    }

    async fn complete(&self, stage: AnalysisStage, prompt: &str) -> Result<String> {
        debug!(
            stage = %stage,
            model = self.model.model(),
            prompt_len = prompt.len(),
            max_tokens = self.config.max_tokens,
            "Calling model"
        );

        let response = self
            .model
            .complete(prompt, self.config.max_tokens)
            .await
            .map_err(|source| AnalysisError::ModelCall { stage, source })?;

        debug!(stage = %stage, response_len = response.len(), "Model responded");
        trace!(stage = %stage, response = %response, "Model response");

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::MockFetcher;
    use crate::testing::MockCompletion;

    const URL: &str = "https://example.com/monitor";

    fn analyzer(responses: &[&str]) -> Analyzer<MockFetcher, MockCompletion> {
        let fetcher = MockFetcher::new().with_html(URL, "<p>AAPL and MSFT moved.</p>");
        let model = MockCompletion::new().with_responses(responses.iter().copied());
        Analyzer::with_config(fetcher, model, AnalyzerConfig::new().with_max_tokens(321))
    }

    #[tokio::test]
    async fn test_summarizes_only_first_ticker() {
        let analyzer = analyzer(&["TICKERS: [MSFT, AAPL]", "SUMMARY: Cloud strength."]);

        let result = analyzer.analyze(URL).await.unwrap();

        assert_eq!(result.tickers, vec!["MSFT", "AAPL"]);
        assert_eq!(result.summary, "Cloud strength.");

        let prompts = analyzer.model().prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("TICKERS: [list all tickers"));
        assert!(prompts[0].ends_with("AAPL and MSFT moved."));
        assert!(prompts[1].contains("stock ticker MSFT."));
        assert!(!prompts[1].contains("stock ticker AAPL"));
    }

    #[tokio::test]
    async fn test_passes_configured_max_tokens() {
        let analyzer = analyzer(&["TICKERS: [AAPL]", "SUMMARY: ok"]);

        analyzer.analyze(URL).await.unwrap();

        assert!(analyzer.model().calls().iter().all(|c| c.max_tokens == 321));
    }

    #[tokio::test]
    async fn test_empty_ticker_set_stops_before_summary() {
        let analyzer = analyzer(&["I found no tickers."]);

        let err = analyzer.analyze(URL).await.unwrap_err();

        assert!(matches!(err, AnalysisError::EmptyTickerSet));
        assert_eq!(err.stage(), Some(AnalysisStage::SummarizingFirstTicker));
        assert_eq!(analyzer.model().call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_summary_marker_is_not_an_error() {
        let analyzer = analyzer(&["TICKERS: [AAPL]", "Apple did fine."]);

        let result = analyzer.analyze(URL).await.unwrap();

        assert!(result.summary.is_missing());
    }

    #[tokio::test]
    async fn test_summarize_first_ticker_rejects_empty() {
        let analyzer = analyzer(&[]);

        let err = analyzer
            .summarize_first_ticker(&PageText::new("text"), &[])
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::EmptyTickerSet));
        assert_eq!(analyzer.model().call_count(), 0);
    }
}
