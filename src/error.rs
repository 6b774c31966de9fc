//! Error kinds returned by the pipeline components.
//!
//! Components never log; they return one of these and the CLI decides whether to
//! report and continue. See `cli::commands` for the reporting side.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::Prompt;

/// Failure while enumerating the projects root or one of its entries
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read projects directory {}: {source}", path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("skipped {}: {source}", path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// A single line that could not be turned into a record or prompt
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("user record is missing `{0}`")]
    MissingField(&'static str),
}

/// Failure while parsing one session file
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read session file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Extraction stopped at `line`; `partial` holds the prompts found before it
    #[error("malformed record on line {line} of {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        partial: Vec<Prompt>,
        #[source]
        source: RecordError,
    },
}

impl SessionError {
    /// Move out the prompts extracted before the failure, leaving none behind
    pub fn take_partial(&mut self) -> Vec<Prompt> {
        match self {
            SessionError::Read { .. } => Vec::new(),
            SessionError::Malformed { partial, .. } => std::mem::take(partial),
        }
    }
}

/// Failure while writing an export file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
