//! Configuration module for Page-Harvest
//!
//! There is no configuration file and no environment lookup: every run uses
//! the fixed output names in the working directory. The types here exist so
//! the rest of the crate receives its paths explicitly.
//!
//! # Example
//!
//! ```
//! use page_harvest::config::HarvestConfig;
//!
//! let config = HarvestConfig::default();
//! assert_eq!(config.output.csv_path.to_str(), Some("output.csv"));
//! ```

mod types;

pub use types::{
    HarvestConfig, OutputConfig, CSV_FILE_NAME, DEFAULT_USER_AGENT, JSON_FILE_NAME, LOG_FILE_NAME,
};
