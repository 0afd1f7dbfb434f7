//! Rename planning.
//!
//! Computes, for every selected file, its new name and destination directory
//! from the modification time and the two configured layouts. Planning is
//! pure: nothing touches the filesystem until the manifest has been written
//! and the mover runs.

use crate::config::RunConfig;
use crate::layout;
use crate::select::FileRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Computes the rename plan for the selected records.
///
/// When folder creation is disabled in the configuration the plan is empty
/// and the whole downstream pipeline becomes a no-op. Otherwise each record
/// gets `planned_name = render(modified, fileLayout) + original extension`
/// and `planned_dir = outputRoot / render(modified, folderLayout)`.
///
/// Two records formatting to the same destination are disambiguated
/// deterministically in plan order: the second and later ones get a `_<n>`
/// counter inserted before the extension.
pub fn plan_moves(records: Vec<FileRecord>, config: &RunConfig) -> Vec<FileRecord> {
    if !config.create_folders {
        return Vec::new();
    }

    let mut seen: HashMap<PathBuf, u32> = HashMap::new();
    let mut plan = Vec::with_capacity(records.len());

    for mut record in records {
        let ext = extension_of(&record.name);
        let stem = layout::render(&record.modified, &config.file_layout);
        let dir = config
            .output_root
            .join(layout::render(&record.modified, &config.folder_layout));

        let count = seen.entry(dir.join(format!("{stem}{ext}"))).or_insert(0);
        let name = if *count == 0 {
            format!("{stem}{ext}")
        } else {
            format!("{stem}_{count}{ext}")
        };
        *count += 1;

        record.planned_name = Some(name);
        record.planned_dir = Some(dir);
        plan.push(record);
    }

    plan
}

/// Extension of a file name including the dot, or empty for none.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
