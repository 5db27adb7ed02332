//! Run orchestration: one URL in, two files out
//!
//! The only fatal step is the fetch. Once a page has been scraped, every
//! writer is attempted and its failure is logged, never propagated.

use crate::config::OutputConfig;
use crate::data::ScrapedData;
use crate::output::{save_all, SaveOutcome};
use crate::scrape::{scrape_page, DocumentSource};
use crate::FetchError;
use std::io::{self, BufRead};

/// Prompt shown before the URL is read
pub const PROMPT: &str = "Enter the URL to scrape: ";

/// Printed to standard output once a fetched page has been processed
pub const COMPLETION_MESSAGE: &str =
    "Scraping completed. Check output.csv, output.json, and scraper.log for results.";

/// What a completed run produced
#[derive(Debug)]
pub struct RunReport {
    pub data: ScrapedData,

    /// One entry per writer, in the order they ran
    pub outcomes: Vec<SaveOutcome>,
}

impl RunReport {
    /// Returns true if every writer finished
    pub fn all_saved(&self) -> bool {
        self.outcomes.iter().all(SaveOutcome::is_saved)
    }

    pub fn failures(&self) -> impl Iterator<Item = &SaveOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_saved())
    }
}

/// Reads the target URL from one line of input
///
/// Surrounding whitespace, including the line terminator, is removed. No
/// other validation happens here.
pub fn read_url<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Scrapes `url` and persists the result
///
/// # Arguments
///
/// * `source` - Where the document comes from
/// * `url` - The page to scrape
/// * `output` - Destination of the CSV and JSON files
///
/// # Returns
///
/// * `Ok(RunReport)` - The page was scraped; writers may still have failed
/// * `Err(FetchError)` - The page could not be retrieved and nothing was written
pub async fn run<S: DocumentSource>(
    source: &S,
    url: &str,
    output: &OutputConfig,
) -> Result<RunReport, FetchError> {
    let data = scrape_page(source, url).await?;

    let outcomes = save_all(&data, output);
    for outcome in &outcomes {
        if let SaveOutcome::Failed { format, error, .. } = outcome {
            tracing::error!("Error saving {}: {}", format, error);
        }
    }

    Ok(RunReport { data, outcomes })
}
