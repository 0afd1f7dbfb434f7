//! Pre-move manifest.
//!
//! The full rename plan is serialized to `<timestamp>_output.json` before any
//! file is moved. A successful write is the run's durability checkpoint: the
//! mover only runs once the manifest is on disk, and a write failure aborts
//! the run with nothing mutated.

use crate::select::FileRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while writing or reading a manifest.
#[derive(Debug)]
pub enum ManifestError {
    /// JSON serialization of the plan failed.
    Serialize(String),
    /// Writing the manifest file failed.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Reading a manifest file failed.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A manifest file did not parse as a plan.
    Parse(String),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(msg) => write!(f, "Failed to serialize manifest: {}", msg),
            Self::Write { path, source } => {
                write!(f, "Failed to write manifest {}: {}", path.display(), source)
            }
            Self::Read { path, source } => {
                write!(f, "Failed to read manifest {}: {}", path.display(), source)
            }
            Self::Parse(msg) => write!(f, "Invalid manifest format: {}", msg),
        }
    }
}

impl std::error::Error for ManifestError {}

/// Manifest file name for the current moment: `YYYY-MM-DD_HH-MM-SS_output.json`.
fn manifest_file_name() -> String {
    format!(
        "{}_output.json",
        chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Writes the rename plan as pretty-printed JSON into `dir` and returns the
/// path of the written file.
///
/// # Errors
///
/// Returns `ManifestError` on serialization or write failure; the caller
/// must treat either as fatal and perform no moves.
pub fn write_manifest(plan: &[FileRecord], dir: &Path) -> Result<PathBuf, ManifestError> {
    let json =
        serde_json::to_string_pretty(plan).map_err(|e| ManifestError::Serialize(e.to_string()))?;

    let path = dir.join(manifest_file_name());
    fs::write(&path, json).map_err(|e| ManifestError::Write {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}

/// Parses a previously written manifest back into a plan list.
pub fn read_manifest(path: &Path) -> Result<Vec<FileRecord>, ManifestError> {
    let json = fs::read_to_string(path).map_err(|e| ManifestError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&json).map_err(|e| ManifestError::Parse(e.to_string()))
}
