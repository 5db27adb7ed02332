//! The single record produced by a harvest run

use serde::{Deserialize, Serialize};

/// Headings and link targets collected from one page, in document order
///
/// Both lists may be empty and may contain duplicates. Headings are trimmed
/// and never empty; links are the raw `href` values, empty strings included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedData {
    pub headings: Vec<String>,
    pub links: Vec<String>,
}

impl ScrapedData {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if neither headings nor links were found
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.links.is_empty()
    }
}
