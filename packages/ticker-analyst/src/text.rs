//! HTML to plain text reduction.
//!
//! Parses the document with `scraper`, drops everything under
//! `<script>`, `<style>` and `<noscript>`, and flattens the remaining
//! text into one line suitable for embedding in a prompt.

use scraper::{Html, Node, Selector};

use crate::types::page::PageText;

/// Elements whose text never reaches the prompt.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// Extract the readable text of an HTML document.
///
/// Text nodes are concatenated in document order, split into lines,
/// each line split again on double spaces, every fragment trimmed and
/// empty fragments dropped. The survivors are joined with single spaces.
pub fn extract_text(html: &str) -> PageText {
    let document = Html::parse_document(html);

    let mut raw = String::with_capacity(html.len() / 2);
    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let skipped = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });
        if !skipped {
            raw.push_str(text);
        }
    }

    PageText::new(normalize_whitespace(&raw))
}

/// Collapse line breaks and double-space runs into single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split(['\n', '\r', '\u{0b}', '\u{0c}'])
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the document title, if any.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty())
}
