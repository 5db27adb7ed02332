//! Page-Harvest: a single-page heading and link harvester
//!
//! This crate fetches one web page, collects its heading text and anchor
//! targets, and persists them as CSV and JSON while logging each stage.

pub mod config;
pub mod data;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod scrape;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a run early
///
/// Save failures never appear here: each writer reports them through a
/// `SaveOutcome` and the run carries on.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while retrieving and parsing the target document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP error for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read response body for {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Errors raised while persisting scraped data to disk
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while opening the run log
#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("Failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for Page-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for save operations
pub type SaveResult<T> = std::result::Result<T, SaveError>;

// Re-export commonly used types
pub use config::{HarvestConfig, OutputConfig};
pub use data::ScrapedData;
pub use logging::RunLog;
pub use output::{save_all, OutputFormat, SaveOutcome};
pub use pipeline::{read_url, run, RunReport, COMPLETION_MESSAGE};
pub use scrape::{extract, scrape_page, DocumentSource, ReqwestFetcher};
