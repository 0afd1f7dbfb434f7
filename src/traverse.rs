//! Directory traversal.
//!
//! Lists the files of a root directory, either only its direct children or
//! the entire subtree. Entries come back in directory-read / walk order; no
//! sorting is guaranteed. Traversal failure is fatal to the whole run.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Errors that can occur while listing files.
#[derive(Debug)]
pub enum TraversalError {
    /// The root directory does not exist or is not a directory.
    RootNotFound(PathBuf),
    /// Reading a directory entry failed.
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for TraversalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootNotFound(path) => {
                write!(f, "Root directory not found: {}", path.display())
            }
            Self::ReadFailed { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for TraversalError {}

/// Lists files under `root`.
///
/// With `recursive` false only the root's direct non-directory children are
/// returned; with `recursive` true every non-directory entry of the whole
/// subtree is, depth-first.
///
/// # Errors
///
/// Returns `TraversalError` when the root is missing or any directory read
/// fails. The caller treats this as fatal.
pub fn list_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, TraversalError> {
    if !root.is_dir() {
        return Err(TraversalError::RootNotFound(root.to_path_buf()));
    }

    if recursive {
        list_subtree(root)
    } else {
        list_children(root)
    }
}

/// Direct non-directory children of `root`, in directory-read order.
fn list_children(root: &Path) -> Result<Vec<PathBuf>, TraversalError> {
    let entries = fs::read_dir(root).map_err(|e| TraversalError::ReadFailed {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        if let Ok(file_type) = entry.file_type()
            && !file_type.is_dir()
        {
            files.push(entry.path());
        }
    }

    Ok(files)
}

/// Every non-directory entry under `root`, depth-first.
fn list_subtree(root: &Path) -> Result<Vec<PathBuf>, TraversalError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
            TraversalError::ReadFailed {
                path,
                source: e.into(),
            }
        })?;

        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
