//! Document fetcher implementation
//!
//! This module retrieves the target page and hands back a parsed document:
//! - `DocumentSource`: the fetch-and-parse capability the pipeline depends on
//! - `ReqwestFetcher`: the network-backed implementation
//!
//! There is no retry logic and no timeout override; a single request is made
//! with the HTTP client's defaults.

use crate::FetchError;
use reqwest::Client;
use scraper::Html;

/// Something that can turn a URL into a parsed, queryable document
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// Retrieves `url` and parses the body into a document tree
    async fn fetch_document(&self, url: &str) -> Result<Html, FetchError>;
}

/// Builds the HTTP client used for the page request
///
/// # Arguments
///
/// * `user_agent` - Value of the `User-Agent` header
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages over HTTP(S) with `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Creates a fetcher with a freshly built client
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = build_http_client(user_agent).map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl DocumentSource for ReqwestFetcher {
    /// Sends one GET request and parses the response body
    ///
    /// # Errors
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | Malformed URL, DNS failure, connection refused, timeout | `FetchError::Request` |
    /// | Non-2xx status | `FetchError::Status` |
    /// | Body cannot be read or decoded | `FetchError::Body` |
    async fn fetch_document(&self, url: &str) -> Result<Html, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(Html::parse_document(&body))
    }
}
