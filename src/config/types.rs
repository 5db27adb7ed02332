use std::path::{Path, PathBuf};

/// File name of the CSV output
pub const CSV_FILE_NAME: &str = "output.csv";

/// File name of the JSON output
pub const JSON_FILE_NAME: &str = "output.json";

/// File name of the append-only run log
pub const LOG_FILE_NAME: &str = "scraper.log";

/// User agent sent with the page request
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Top-level configuration for a harvest run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    pub output: OutputConfig,

    /// Value of the `User-Agent` header on the page request
    pub user_agent: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Locations of every file a run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Path to the two-section CSV file
    pub csv_path: PathBuf,

    /// Path to the JSON object file
    pub json_path: PathBuf,

    /// Path to the run log (opened in append mode)
    pub log_path: PathBuf,
}

impl OutputConfig {
    /// Roots the fixed file names under `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            csv_path: dir.join(CSV_FILE_NAME),
            json_path: dir.join(JSON_FILE_NAME),
            log_path: dir.join(LOG_FILE_NAME),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(CSV_FILE_NAME),
            json_path: PathBuf::from(JSON_FILE_NAME),
            log_path: PathBuf::from(LOG_FILE_NAME),
        }
    }
}
