//! Page-Harvest main entry point
//!
//! Reads one URL from standard input, scrapes it, and writes `output.csv`,
//! `output.json` and `scraper.log` into the working directory.

use clap::Parser;
use page_harvest::config::HarvestConfig;
use page_harvest::pipeline::{read_url, run, RunReport, COMPLETION_MESSAGE, PROMPT};
use page_harvest::{ReqwestFetcher, RunLog};
use std::io::{self, Write};
use std::process::ExitCode;

/// Page-Harvest: collect headings and links from a single web page
///
/// The URL is read from standard input. Results are written to output.csv
/// and output.json, and progress is appended to scraper.log, all in the
/// current directory.
#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(version)]
#[command(about = "Collect headings and links from a single web page", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();
    let config = HarvestConfig::default();

    let log = match RunLog::open(&config.output.log_path) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("Error creating log file: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = log.install();
    tracing::info!("Scraper started");

    match harvest(&config).await {
        Ok(report) => {
            tracing::info!(
                "Scraping completed successfully ({} of {} files saved)",
                report.outcomes.len() - report.failures().count(),
                report.outcomes.len()
            );
            println!("{}", COMPLETION_MESSAGE);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to scrape website: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Prompts for the URL, then scrapes and persists it
async fn harvest(config: &HarvestConfig) -> page_harvest::Result<RunReport> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", PROMPT)?;
    stderr.flush()?;

    let url = read_url(io::stdin().lock())?;
    let fetcher = ReqwestFetcher::new(&config.user_agent)?;

    Ok(run(&fetcher, &url, &config.output).await?)
}
