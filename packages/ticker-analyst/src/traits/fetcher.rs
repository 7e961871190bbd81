//! Page fetcher trait for pluggable page retrieval.
//!
//! A fetcher turns a URL into raw HTML. Only successful (2xx) responses
//! produce a [`RawPage`]; everything else is a [`FetchError`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use ticker_analyst::traits::fetcher::PageFetcher;
//!
//! let page = fetcher.fetch("https://example.com/newsletter").await?;
//! println!("{} bytes from {}", page.html.len(), page.final_url);
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchResult;

/// Raw page content before text extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPage {
    /// URL that was requested
    pub url: String,

    /// URL after redirects
    pub final_url: String,

    /// HTTP status code (always 2xx)
    pub status: u16,

    /// Content type header if present
    pub content_type: Option<String>,

    /// Raw response body
    pub html: String,

    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,
}

impl RawPage {
    /// Create a new raw page with minimal fields.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            final_url: url.clone(),
            url,
            status: 200,
            content_type: None,
            html: html.into(),
            fetched_at: Utc::now(),
        }
    }

    /// Set the URL after redirects.
    pub fn with_final_url(mut self, final_url: impl Into<String>) -> Self {
        self.final_url = final_url.into();
        self
    }

    /// Set the status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the fetched timestamp.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Whether the request was redirected.
    pub fn was_redirected(&self) -> bool {
        self.url != self.final_url
    }
}

/// Fetcher trait for retrieving a single page.
///
/// Implementations:
/// - `HttpFetcher` - reqwest GET with a browser-like user agent
/// - `MockFetcher` - canned pages for tests
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one URL.
    ///
    /// Network failures, non-2xx statuses and unreadable bodies are
    /// all errors; there is no retry.
    async fn fetch(&self, url: &str) -> FetchResult<RawPage>;

    /// Name of this fetcher for logging.
    fn name(&self) -> &str;
}
