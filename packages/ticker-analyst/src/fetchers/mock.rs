//! Mock fetcher for testing.
//!
//! Serves canned pages and canned HTTP failures without touching the network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{PageFetcher, RawPage};

/// Mock fetcher for testing.
///
/// URLs with a canned page return it; URLs with a canned status fail with
/// [`FetchError::Status`]; anything else is a 404.
///
/// # Example
///
/// ```rust
/// use ticker_analyst::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new()
///     .with_html("https://example.com", "<p>AAPL is up</p>")
///     .with_status("https://example.com/gone", 410);
/// ```
#[derive(Default)]
pub struct MockFetcher {
    /// Canned pages indexed by URL
    pages: Arc<RwLock<HashMap<String, RawPage>>>,
    /// Canned failure statuses indexed by URL
    statuses: Arc<RwLock<HashMap<String, u16>>>,
    /// URLs requested, in order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page that will be returned by fetch.
    pub fn add_page(&self, page: RawPage) {
        let mut pages = self.pages.write().unwrap();
        pages.insert(page.url.clone(), page);
    }

    /// Make a URL fail with the given HTTP status.
    pub fn add_status(&self, url: impl Into<String>, status: u16) {
        self.statuses.write().unwrap().insert(url.into(), status);
    }

    /// Create a mock with a pre-configured page (builder pattern).
    pub fn with_page(self, page: RawPage) -> Self {
        self.add_page(page);
        self
    }

    /// Create a mock serving `html` at `url` (builder pattern).
    pub fn with_html(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_page(RawPage::new(url, html).with_content_type("text/html"));
        self
    }

    /// Create a mock failing `url` with `status` (builder pattern).
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.add_status(url, status);
        self
    }

    /// Get the number of times fetch was called.
    pub fn fetch_call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Get the URLs that were requested.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            statuses: Arc::clone(&self.statuses),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawPage> {
        self.calls.write().unwrap().push(url.to_string());

        if let Some(status) = self.statuses.read().unwrap().get(url) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            });
        }

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
