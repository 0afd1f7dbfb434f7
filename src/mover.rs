//! Applying the rename plan.
//!
//! Runs only after the manifest has been written. Each plan entry gets its
//! destination directory created and is then renamed into place. Failures
//! are per-record: the entry is logged and skipped, the run continues, and
//! there is no rollback of earlier moves.

use crate::output::OutputFormatter;
use crate::select::FileRecord;
use std::fs;
use std::path::PathBuf;

/// Outcome of applying a rename plan.
#[derive(Debug, Default)]
pub struct MoveReport {
    /// Number of files successfully moved.
    pub moved: usize,
    /// Entries that could not be moved, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

impl MoveReport {
    /// Returns true if every plan entry was moved.
    pub fn is_complete_success(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Moves every planned file into its destination, in plan order.
///
/// Directory creation uses `create_dir_all`; the move itself is a plain
/// filesystem rename. A directory-creation or rename failure is logged,
/// recorded in the report and skipped.
pub fn apply_moves(plan: &[FileRecord]) -> MoveReport {
    let mut report = MoveReport::default();
    let progress = OutputFormatter::create_progress_bar(plan.len() as u64);

    for record in plan {
        let (Some(name), Some(dir)) = (record.planned_name.as_ref(), record.planned_dir.as_ref())
        else {
            report.skipped.push((
                record.path.clone(),
                "record has no planned destination".to_string(),
            ));
            progress.inc(1);
            continue;
        };

        if let Err(e) = fs::create_dir_all(dir) {
            OutputFormatter::error(&format!(
                "Could not create directory {}: {}",
                dir.display(),
                e
            ));
            report
                .skipped
                .push((record.path.clone(), format!("directory creation: {}", e)));
            progress.inc(1);
            continue;
        }

        let destination = dir.join(name);
        match fs::rename(&record.path, &destination) {
            Ok(()) => report.moved += 1,
            Err(e) => {
                OutputFormatter::error(&format!(
                    "Could not move {} to {}: {}",
                    record.path.display(),
                    destination.display(),
                    e
                ));
                report
                    .skipped
                    .push((record.path.clone(), format!("rename: {}", e)));
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    report
}
