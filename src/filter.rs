//! Extension-based file filtering.
//!
//! Two independent extension sets drive the first filtering stages: one whose
//! matches are deleted from disk outright, one whose matches are merely
//! dropped from the working list. Matching is case-insensitive and accepts
//! configured entries with or without the leading dot.

use crate::output::OutputFormatter;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A compiled set of file extensions for matching.
///
/// Extensions are normalized once at construction (lowercased, leading dot
/// stripped) so per-file matching is a single hash lookup.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: HashSet<String>,
}

impl ExtensionFilter {
    /// Builds a filter from configured extension strings such as `".tmp"`
    /// or `"TMP"`.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Whether the path's extension is in the set. Files without an
    /// extension never match, and an empty set matches nothing.
    pub fn matches(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return false;
        }

        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    /// Delete pass: removes matching files from the filesystem and returns
    /// the survivors. A failed delete is logged, not fatal; the file is
    /// dropped from the list either way.
    pub fn delete_matching(&self, paths: Vec<PathBuf>) -> Vec<PathBuf> {
        let mut survivors = Vec::with_capacity(paths.len());
        for path in paths {
            if self.matches(&path) {
                if let Err(e) = std::fs::remove_file(&path) {
                    OutputFormatter::warning(&format!(
                        "Could not delete {}: {}",
                        path.display(),
                        e
                    ));
                }
            } else {
                survivors.push(path);
            }
        }
        survivors
    }

    /// Exclude pass: returns the paths whose extension is not in the set.
    /// The filesystem is not touched.
    pub fn drop_matching(&self, paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.into_iter().filter(|p| !self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_matching_is_case_insensitive() {
        let filter = ExtensionFilter::new([".tmp"]);

        assert!(filter.matches(Path::new("a.tmp")));
        assert!(filter.matches(Path::new("a.TMP")));
        assert!(filter.matches(Path::new("a.Tmp")));
        assert!(!filter.matches(Path::new("a.txt")));
    }

    #[test]
    fn test_leading_dot_is_optional_in_config() {
        let with_dot = ExtensionFilter::new([".log"]);
        let without_dot = ExtensionFilter::new(["LOG"]);

        assert!(with_dot.matches(Path::new("app.log")));
        assert!(without_dot.matches(Path::new("app.log")));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let filter = ExtensionFilter::new(Vec::<String>::new());
        assert!(!filter.matches(Path::new("a.tmp")));
    }

    #[test]
    fn test_extensionless_file_never_matches() {
        let filter = ExtensionFilter::new(["tmp"]);
        assert!(!filter.matches(Path::new("Makefile")));
    }

    #[test]
    fn test_delete_pass_removes_files_and_drops_them() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let doomed = temp_dir.path().join("a.tmp");
        let kept = temp_dir.path().join("b.txt");
        fs::write(&doomed, "x").expect("Failed to write file");
        fs::write(&kept, "y").expect("Failed to write file");

        let filter = ExtensionFilter::new([".tmp"]);
        let survivors = filter.delete_matching(vec![doomed.clone(), kept.clone()]);

        assert_eq!(survivors, vec![kept.clone()]);
        assert!(!doomed.exists());
        assert!(kept.exists());
    }

    #[test]
    fn test_delete_pass_failure_is_not_fatal() {
        // The file does not exist, so the delete fails; it must still be
        // dropped from the list and the pass must not panic.
        let filter = ExtensionFilter::new([".tmp"]);
        let survivors = filter.delete_matching(vec![PathBuf::from("/no/such/file.tmp")]);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_exclude_pass_leaves_disk_alone() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let excluded = temp_dir.path().join("a.log");
        fs::write(&excluded, "x").expect("Failed to write file");

        let filter = ExtensionFilter::new([".log"]);
        let survivors = filter.drop_matching(vec![excluded.clone()]);

        assert!(survivors.is_empty());
        assert!(excluded.exists());
    }
}
