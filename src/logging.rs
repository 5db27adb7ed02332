//! Run log: an append-only file sink for `tracing` events
//!
//! The log is opened once per process and installed as the thread's default
//! subscriber. Events are routed to it until the returned guard is dropped,
//! at which point the file handle is released.

use crate::LogInitError;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

/// Filter applied to the run log
const DEFAULT_FILTER: &str = "page_harvest=info,warn";

/// Timestamp layout of every log line, e.g. `2024/05/01 13:37:00`
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Local wall-clock timer for log lines
#[derive(Debug, Clone, Copy, Default)]
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// An opened, not yet installed run log
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
    file: File,
}

impl RunLog {
    /// Opens (or creates) the log file in append mode
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the log file
    ///
    /// # Returns
    ///
    /// * `Ok(RunLog)` - The file is open and ready to be installed
    /// * `Err(LogInitError)` - The file could not be opened
    pub fn open(path: &Path) -> Result<Self, LogInitError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogInitError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Routes this thread's `tracing` events into the log file
    ///
    /// Logging stays active until the returned guard is dropped.
    pub fn install(self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
            .with_writer(Mutex::new(self.file))
            .with_timer(LocalTimestamp)
            .with_ansi(false)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .finish();

        tracing::subscriber::set_default(subscriber)
    }
}
