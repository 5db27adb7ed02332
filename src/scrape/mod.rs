//! Scrape module: fetch one page and pull headings and links out of it
//!
//! This module contains:
//! - The `DocumentSource` capability and its `reqwest` implementation
//! - Heading and link extraction over a `scraper::Html` tree

mod extractor;
mod fetcher;

pub use extractor::{extract, extract_headings, extract_links};
pub use fetcher::{build_http_client, DocumentSource, ReqwestFetcher};

use crate::data::ScrapedData;
use crate::FetchError;

/// Fetches `url` through `source` and extracts its headings and links
///
/// Fetching and extraction form one step: the only failure is the fetch
/// itself, since extraction over any document succeeds.
///
/// # Arguments
///
/// * `source` - Where documents come from
/// * `url` - The page to scrape, passed through unvalidated
///
/// # Returns
///
/// * `Ok(ScrapedData)` - The page was retrieved
/// * `Err(FetchError)` - The page could not be retrieved or read
pub async fn scrape_page<S: DocumentSource>(
    source: &S,
    url: &str,
) -> Result<ScrapedData, FetchError> {
    tracing::info!("Starting scrape for URL: {}", url);

    let document = match source.fetch_document(url).await {
        Ok(document) => document,
        Err(e) => {
            tracing::error!("Error fetching URL {}: {}", url, e);
            return Err(e);
        }
    };

    let data = extract(&document);
    tracing::info!("Extracted {} headings from {}", data.headings.len(), url);
    tracing::info!("Extracted {} links from {}", data.links.len(), url);

    Ok(data)
}
