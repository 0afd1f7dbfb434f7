//! Run configuration loading.
//!
//! Configuration is a single JSON file read once at startup and never
//! mutated afterwards. The field names are the tool's external contract:
//!
//! ```json
//! {
//!     "path": "/photos/incoming",
//!     "prefixes": ["IMG_", "DSC_"],
//!     "isRecursive": true,
//!     "removeFileType": [".log"],
//!     "deleteFileType": [".tmp"],
//!     "isCreateFolderFlag": true,
//!     "folderLayout": "YYYY/MM",
//!     "fileLayout": "YYYYMMDD_HHmmss",
//!     "outFilePath": "/photos/sorted"
//! }
//! ```
//!
//! `folderLayout` and `fileLayout` use the token dialect described in the
//! [`crate::layout`] module. Extension lists accept entries with or without
//! the leading dot; matching is case-insensitive.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading the run configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    NotFound(PathBuf),
    /// Invalid JSON syntax or structure.
    Invalid(String),
    /// IO error while reading the configuration file.
    Io(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::Io(msg) => write!(f, "IO error reading configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for one organizer run.
///
/// Loaded once from JSON and treated as immutable for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Root directory to scan for files.
    #[serde(rename = "path")]
    pub root: PathBuf,

    /// File name prefixes that select a file for processing (case-sensitive,
    /// matching any one is sufficient). An empty list selects nothing.
    #[serde(default)]
    pub prefixes: Vec<String>,

    /// Whether to walk the whole subtree or only the root's direct children.
    #[serde(rename = "isRecursive", default)]
    pub is_recursive: bool,

    /// Extensions whose files are excluded from processing but left on disk.
    #[serde(rename = "removeFileType", default)]
    pub exclude_file_types: Vec<String>,

    /// Extensions whose files are deleted from disk outright.
    #[serde(rename = "deleteFileType", default)]
    pub delete_file_types: Vec<String>,

    /// Master switch for the rename/move stage. When false the run stops
    /// after filtering and selection without planning or moving anything.
    #[serde(rename = "isCreateFolderFlag", default)]
    pub create_folders: bool,

    /// Layout for the date-derived destination folder, e.g. "YYYY/MM".
    #[serde(rename = "folderLayout", default)]
    pub folder_layout: String,

    /// Layout for the new file name (extension is appended automatically),
    /// e.g. "YYYYMMDD_HHmmss".
    #[serde(rename = "fileLayout", default)]
    pub file_layout: String,

    /// Destination root under which the date-derived folders are created.
    #[serde(rename = "outFilePath")]
    pub output_root: PathBuf,
}

impl RunConfig {
    /// Load configuration from a specific JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist,
    /// `ConfigError::Io` if it cannot be read, and `ConfigError::Invalid`
    /// if JSON parsing fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
