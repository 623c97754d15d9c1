//! Persist collaborator: write the result collection back to JSON.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::scan::UserStreak;

/// Errors raised while writing the output file.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output file could not be written.
    #[error("failed to write output file '{path}'")]
    Io {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The result collection could not be serialized.
    #[error("failed to serialize streak results")]
    Serialize(#[from] serde_json::Error),
}

/// Write the streak results to `path` as a pretty-printed JSON array.
///
/// Overwrites an existing file after logging a warning.
pub fn write_streaks(path: &Path, streaks: &[UserStreak]) -> Result<(), ReportError> {
    if path.exists() {
        warn!(path = %path.display(), "output file already exists, overwriting");
    }

    let json = serde_json::to_string_pretty(streaks)?;
    fs::write(path, json).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), users = streaks.len(), "wrote streak results");
    Ok(())
}
