//! Prefix-based file selection.
//!
//! The last filtering stage: each surviving path is stat'ed and kept only if
//! its base name starts with one of the configured prefixes. Selected files
//! become [`FileRecord`]s carrying the modification time the planner needs.

use crate::output::OutputFormatter;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A file flowing through the rename pipeline.
///
/// Created by prefix selection; the planner fills in the planned fields. The
/// serialized form uses the manifest's legacy JSON keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Base name of the file.
    pub name: String,
    /// Modification time, serialized as ISO-8601.
    #[serde(rename = "modTime")]
    pub modified: DateTime<Local>,
    /// Original absolute path.
    #[serde(rename = "filePath")]
    pub path: PathBuf,
    /// Planned new file name, set by the planner.
    #[serde(rename = "reName", default, skip_serializing_if = "Option::is_none")]
    pub planned_name: Option<String>,
    /// Planned destination directory, set by the planner.
    #[serde(rename = "reFilePath", default, skip_serializing_if = "Option::is_none")]
    pub planned_dir: Option<PathBuf>,
}

/// Selects the files whose base name starts with any configured prefix.
///
/// Prefix matching is case-sensitive and applies to the base name only, not
/// the full path. An empty prefix list selects nothing. A path that fails to
/// stat gets a warning and is dropped (non-fatal).
pub fn select_by_prefix(paths: &[PathBuf], prefixes: &[String]) -> Vec<FileRecord> {
    let mut records = Vec::new();

    for path in paths {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                OutputFormatter::warning(&format!("Could not stat {}: {}", path.display(), e));
                continue;
            }
        };

        let name = base_name(path);
        if !prefixes.iter().any(|prefix| name.starts_with(prefix)) {
            continue;
        }

        let modified = match metadata.modified() {
            Ok(time) => DateTime::<Local>::from(time),
            Err(e) => {
                OutputFormatter::warning(&format!(
                    "Could not read modification time of {}: {}",
                    path.display(),
                    e
                ));
                continue;
            }
        };

        records.push(FileRecord {
            name,
            modified,
            path: path.clone(),
            planned_name: None,
            planned_dir: None,
        });
    }

    records
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "x").expect("Failed to write file");
        path
    }

    fn prefixes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selects_matching_prefix_only() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let img = touch(&dir, "IMG_001.jpg");
        let note = touch(&dir, "note.txt");

        let records = select_by_prefix(&[img.clone(), note], &prefixes(&["IMG_"]));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "IMG_001.jpg");
        assert_eq!(records[0].path, img);
        assert!(records[0].planned_name.is_none());
        assert!(records[0].planned_dir.is_none());
    }

    #[test]
    fn test_any_prefix_is_sufficient() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let a = touch(&dir, "IMG_001.jpg");
        let b = touch(&dir, "DSC_002.jpg");

        let records = select_by_prefix(&[a, b], &prefixes(&["IMG_", "DSC_"]));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = touch(&dir, "img_001.jpg");

        let records = select_by_prefix(&[path], &prefixes(&["IMG_"]));
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_prefix_set_selects_nothing() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = touch(&dir, "IMG_001.jpg");

        let records = select_by_prefix(&[path], &[]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_file_is_dropped_not_fatal() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let present = touch(&dir, "IMG_001.jpg");
        let gone = dir.path().join("IMG_gone.jpg");

        let records = select_by_prefix(&[gone, present], &prefixes(&["IMG_"]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "IMG_001.jpg");
    }

    #[test]
    fn test_record_carries_modification_time() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = touch(&dir, "IMG_001.jpg");

        let expected: DateTime<Local> = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map(DateTime::from)
            .expect("Failed to stat file");

        let records = select_by_prefix(&[path], &prefixes(&["IMG_"]));
        assert_eq!(records[0].modified, expected);
    }
}
