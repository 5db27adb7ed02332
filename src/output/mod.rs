//! Output module for persisting scraped data
//!
//! This module handles:
//! - Writing the two-section CSV file
//! - Writing the JSON object file
//! - Reporting each writer's result as a `SaveOutcome`

mod csv_output;
mod json_output;
mod outcome;

pub use csv_output::{save_csv, write_csv, HEADINGS_MARKER, LINKS_MARKER};
pub use json_output::{save_json, write_json};
pub use outcome::{OutputFormat, SaveOutcome};

use crate::config::OutputConfig;
use crate::data::ScrapedData;

/// Runs every writer in turn and collects their outcomes
///
/// A failing writer never stops the next one from running. Outcomes are
/// returned in the order the writers ran: CSV first, then JSON.
///
/// # Arguments
///
/// * `data` - The scraped headings and links
/// * `output` - Where each file goes
pub fn save_all(data: &ScrapedData, output: &OutputConfig) -> Vec<SaveOutcome> {
    vec![
        SaveOutcome::from_result(
            OutputFormat::Csv,
            &output.csv_path,
            save_csv(data, &output.csv_path),
        ),
        SaveOutcome::from_result(
            OutputFormat::Json,
            &output.json_path,
            save_json(data, &output.json_path),
        ),
    ]
}
