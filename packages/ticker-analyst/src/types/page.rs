//! Normalized page text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Readable text of a page, flattened to a single line.
///
/// Produced by [`crate::text::extract_text`]: script and style content
/// removed, whitespace runs collapsed, no newlines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageText(String);

impl PageText {
    /// Wrap already-normalized text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for PageText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
