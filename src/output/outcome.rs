//! Per-writer save outcomes
//!
//! Each writer reports success or failure as a value instead of aborting the
//! run, so the caller can keep going after one format fails.

use crate::SaveError;
use std::fmt;
use std::path::{Path, PathBuf};

/// The file formats a run persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Result of one writer's attempt to persist the scraped data
#[derive(Debug)]
pub enum SaveOutcome {
    /// The file was written completely
    Saved { format: OutputFormat, path: PathBuf },

    /// The writer gave up; the file may be missing or partial
    Failed {
        format: OutputFormat,
        path: PathBuf,
        error: SaveError,
    },
}

impl SaveOutcome {
    /// Wraps a writer's result into an outcome
    pub fn from_result(format: OutputFormat, path: &Path, result: Result<(), SaveError>) -> Self {
        match result {
            Ok(()) => Self::Saved {
                format,
                path: path.to_path_buf(),
            },
            Err(error) => Self::Failed {
                format,
                path: path.to_path_buf(),
                error,
            },
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            Self::Saved { format, .. } | Self::Failed { format, .. } => *format,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Saved { path, .. } | Self::Failed { path, .. } => path,
        }
    }

    /// Returns true if the file was written completely
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    /// The failure, if the writer gave up
    pub fn error(&self) -> Option<&SaveError> {
        match self {
            Self::Saved { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}
