//! HTTP-based page fetcher.
//!
//! Plain reqwest GET with browser-like headers. No JavaScript rendering.

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{PageFetcher, RawPage};

/// Browser-like User-Agent; many publishers reject obvious bots.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Request timeout for a single fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetcher that retrieves pages over HTTP(S).
///
/// # Example
///
/// ```rust,ignore
/// use ticker_analyst::fetchers::HttpFetcher;
///
/// let fetcher = HttpFetcher::new()?;
/// let page = fetcher.fetch("https://toffcap.substack.com/p/toffcaps-monday-monitor-37").await?;
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default settings.
    pub fn new() -> FetchResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.5"),
        );

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(Self { client })
    }

    /// Create a fetcher around a preconfigured HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Parse a URL, adding `https://` when no scheme is present.
    ///
    /// Only `http` and `https` are accepted.
    pub fn validate_url(url: &str) -> FetchResult<Url> {
        let trimmed = url.trim();
        let candidate = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        let parsed = Url::parse(&candidate).map_err(|_| FetchError::InvalidUrl {
            url: url.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(FetchError::DisallowedScheme(other.to_string())),
        }

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
            });
        }

        Ok(parsed)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawPage> {
        let parsed = Self::validate_url(url)?;
        debug!(url = %parsed, "HTTP fetch starting");

        let response = self.client.get(parsed.clone()).send().await.map_err(|e| {
            warn!(url = %parsed, error = %e, "HTTP request failed");
            FetchError::Http(Box::new(e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %parsed, status = %status, "HTTP error status");
            return Err(FetchError::Status {
                url: parsed.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let html = response.text().await.map_err(|e| FetchError::Body {
            url: parsed.to_string(),
            source: Box::new(e),
        })?;

        debug!(
            url = %parsed,
            final_url = %final_url,
            status = status.as_u16(),
            content_length = html.len(),
            "Page fetched successfully"
        );

        let mut page = RawPage::new(parsed.as_str(), html)
            .with_final_url(final_url)
            .with_status(status.as_u16())
            .with_fetched_at(Utc::now());
        if let Some(ct) = content_type {
            page = page.with_content_type(ct);
        }

        Ok(page)
    }

    fn name(&self) -> &str {
        "http"
    }
}
