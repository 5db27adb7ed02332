//! Heading and link extraction
//!
//! Walks a parsed document twice:
//! - once over `h1`..`h6`, collecting trimmed, non-empty text
//! - once over `<a>` elements, collecting raw `href` values
//!
//! Nothing is normalized. Relative, fragment-only and empty `href` values are
//! kept exactly as written; anchors without an `href` are skipped.

use crate::data::ScrapedData;
use scraper::{Html, Selector};

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";
const LINK_SELECTOR: &str = "a[href]";

/// Extracts headings and links from a parsed document
///
/// # Example
///
/// ```
/// use page_harvest::scrape::extract;
/// use scraper::Html;
///
/// let html = r#"<html><body><h1> Title </h1><a href="/page">Link</a></body></html>"#;
/// let data = extract(&Html::parse_document(html));
/// assert_eq!(data.headings, vec!["Title"]);
/// assert_eq!(data.links, vec!["/page"]);
/// ```
pub fn extract(document: &Html) -> ScrapedData {
    ScrapedData {
        headings: extract_headings(document),
        links: extract_links(document),
    }
}

/// Collects the text of every heading element in document order
pub fn extract_headings(document: &Html) -> Vec<String> {
    let mut headings = Vec::new();

    if let Ok(selector) = Selector::parse(HEADING_SELECTOR) {
        for element in document.select(&selector) {
            let text = element.text().collect::<String>();
            let heading = text.trim();
            if !heading.is_empty() {
                headings.push(heading.to_string());
            }
        }
    }

    headings
}

/// Collects the raw `href` of every anchor that has one, in document order
pub fn extract_links(document: &Html) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse(LINK_SELECTOR) {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(href.to_string());
            }
        }
    }

    links
}
