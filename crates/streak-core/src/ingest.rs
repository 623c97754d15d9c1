//! Ingest collaborator: load login events from a JSON file.
//!
//! The only part of the repository that can fail before the core runs. A
//! missing input file and malformed JSON are caller errors and surface as
//! typed variants; everything past this boundary is total.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::event::LoginEvent;

/// Errors raised while loading the input file, before the core runs.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input path does not exist.
    #[error("input file '{0}' not found")]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read input file '{path}'")]
    Io {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of login records.
    #[error("input file '{path}' is not a JSON array of login records")]
    Parse {
        /// The offending path.
        path: PathBuf,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Load an ordered sequence of login events from a JSON array file.
///
/// An empty array is valid input and yields an empty event sequence.
/// Records missing the `login_date` field load fine; records missing
/// `user_id` are a [`IngestError::Parse`] — the core assumes upstream
/// filtered those out.
pub fn load_events(path: &Path) -> Result<Vec<LoginEvent>, IngestError> {
    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events: Vec<LoginEvent> =
        serde_json::from_str(&raw).map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), events = events.len(), "loaded login events");
    Ok(events)
}
