//! Parsing of model responses.
//!
//! Both parsers look for the first occurrence of their marker and never
//! fail: a response that does not follow the format yields an empty
//! ticker list or the [`NO_SUMMARY`](crate::types::analysis::NO_SUMMARY)
//! sentinel.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::analysis::{Summary, TickerSet};

/// `TICKERS:`, whitespace, then a bracketed list on one line.
static RE_TICKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TICKERS:\s+\[(.*?)\]").unwrap());

/// `SUMMARY:` and everything after it, newlines included.
static RE_SUMMARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)SUMMARY:(.*)").unwrap());

/// Extract the ticker list from an extraction response.
///
/// Pieces are split on commas and trimmed; empty pieces are dropped.
/// Order and duplicates are preserved.
pub fn parse_tickers(response: &str) -> TickerSet {
    let Some(captures) = RE_TICKERS.captures(response) else {
        return Vec::new();
    };

    captures
        .get(1)
        .map(|list| {
            list.as_str()
                .split(',')
                .map(str::trim)
                .filter(|ticker| !ticker.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Extract the summary from a summary response.
pub fn parse_summary(response: &str) -> Summary {
    RE_SUMMARY
        .captures(response)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
        .map(Summary::new)
        .unwrap_or_else(Summary::missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tickers_well_formed() {
        assert_eq!(parse_tickers("TICKERS: [AAPL, GOOG]"), vec!["AAPL", "GOOG"]);
    }

    #[test]
    fn test_parse_tickers_surrounded_by_prose() {
        let response = "Here is what I found.\n\nTICKERS: [ NVDA ,TSLA,  BRK.B ]\n\nLet me know if you need more.";
        assert_eq!(parse_tickers(response), vec!["NVDA", "TSLA", "BRK.B"]);
    }

    #[test]
    fn test_parse_tickers_missing_marker() {
        assert!(parse_tickers("I could not find any tickers in this text.").is_empty());
        assert!(parse_tickers("").is_empty());
    }

    #[test]
    fn test_parse_tickers_requires_brackets() {
        assert!(parse_tickers("TICKERS: AAPL, GOOG").is_empty());
        assert!(parse_tickers("TICKERS: [AAPL, GOOG").is_empty());
    }

    #[test]
    fn test_parse_tickers_requires_whitespace_after_marker() {
        assert!(parse_tickers("TICKERS:[AAPL]").is_empty());
    }

    #[test]
    fn test_parse_tickers_empty_list() {
        assert!(parse_tickers("TICKERS: []").is_empty());
        assert!(parse_tickers("TICKERS: [ , ]").is_empty());
    }

    #[test]
    fn test_parse_tickers_first_match_wins() {
        let response = "TICKERS: [AAPL]\nTICKERS: [MSFT, AMZN]";
        assert_eq!(parse_tickers(response), vec!["AAPL"]);
    }

    #[test]
    fn test_parse_tickers_keeps_duplicates_and_case() {
        assert_eq!(
            parse_tickers("TICKERS: [aapl, AAPL, aapl]"),
            vec!["aapl", "AAPL", "aapl"]
        );
    }

    #[test]
    fn test_parse_summary_multiline() {
        let summary = parse_summary("SUMMARY: Apple is strong.\nMore detail here.");
        assert_eq!(summary, "Apple is strong.\nMore detail here.");
    }

    #[test]
    fn test_parse_summary_trims_and_skips_preamble() {
        let response = "Sure, here you go.\n\nSUMMARY:   Margins expanded.\n\n";
        assert_eq!(parse_summary(response), "Margins expanded.");
    }

    #[test]
    fn test_parse_summary_missing_marker() {
        let summary = parse_summary("Apple had a good quarter.");
        assert!(summary.is_missing());
        assert_eq!(summary, "No summary available");
    }

    #[test]
    fn test_parse_summary_empty_body_is_missing() {
        assert!(parse_summary("SUMMARY:   \n").is_missing());
    }

    #[test]
    fn test_parse_summary_captures_from_first_marker() {
        let response = "SUMMARY: first\nSUMMARY: second";
        assert_eq!(parse_summary(response), "first\nSUMMARY: second");
    }
}
