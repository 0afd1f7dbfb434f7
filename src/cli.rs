//! Command-line interface and pipeline orchestration.
//!
//! Wires the stages together in their fixed order: traversal, delete pass,
//! exclude pass, prefix selection, rename planning, manifest write, moves.
//! Each stage fully materializes its output before the next starts, and the
//! manifest write gates any move.

use crate::config::RunConfig;
use crate::filter::ExtensionFilter;
use crate::manifest;
use crate::mover;
use crate::output::OutputFormatter;
use crate::planner::plan_moves;
use crate::select::select_by_prefix;
use crate::traverse::list_files;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Organize files into date-derived folders by modification time.
#[derive(Parser, Debug)]
#[command(name = "chronosort", version, about)]
pub struct Cli {
    /// Path to the JSON run configuration.
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Directory the pre-move manifest is written into.
    #[arg(long, default_value = ".")]
    pub manifest_dir: PathBuf,

    /// Show what would happen without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,
}

/// Counters describing one run, printed at the end and used by tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files removed from disk by the delete pass.
    pub deleted: usize,
    /// Files dropped from processing by the exclude pass.
    pub excluded: usize,
    /// Files selected by prefix.
    pub selected: usize,
    /// Plan entries produced.
    pub planned: usize,
    /// Files actually moved.
    pub moved: usize,
    /// Plan entries skipped due to per-record failures.
    pub skipped: usize,
}

/// Runs the CLI: loads the configuration and executes the pipeline.
///
/// # Errors
///
/// Returns an error string on either fatal condition: configuration/traversal
/// failure or manifest write failure.
pub fn run_cli(cli: &Cli) -> Result<(), String> {
    let config = RunConfig::load(&cli.config)
        .map_err(|e| format!("Error loading configuration: {}", e))?;

    run_pipeline(&config, &cli.manifest_dir, cli.dry_run).map(|_| ())
}

/// Executes one full organizer run for a loaded configuration.
///
/// Fatal errors (traversal, manifest write) abort before further mutation;
/// everything else is logged and the run continues. In dry-run mode nothing
/// on the filesystem is touched and no manifest is written.
pub fn run_pipeline(
    config: &RunConfig,
    manifest_dir: &Path,
    dry_run: bool,
) -> Result<RunSummary, String> {
    OutputFormatter::info(&format!("Scanning {}", config.root.display()));

    let files = list_files(&config.root, config.is_recursive).map_err(|e| e.to_string())?;

    let delete_filter = ExtensionFilter::new(&config.delete_file_types);
    let exclude_filter = ExtensionFilter::new(&config.exclude_file_types);

    let mut summary = RunSummary::default();

    // Delete pass first, on the full traversal output.
    let files = if dry_run {
        let (doomed, rest): (Vec<_>, Vec<_>) =
            files.into_iter().partition(|p| delete_filter.matches(p));
        for path in &doomed {
            OutputFormatter::dry_run_notice(&format!("Would delete {}", path.display()));
        }
        summary.deleted = doomed.len();
        rest
    } else {
        let before = files.len();
        let files = delete_filter.delete_matching(files);
        summary.deleted = before - files.len();
        files
    };

    // Exclude pass on the survivors; disk is left alone.
    let before = files.len();
    let files = exclude_filter.drop_matching(files);
    summary.excluded = before - files.len();

    let records = select_by_prefix(&files, &config.prefixes);
    summary.selected = records.len();

    if !config.create_folders {
        OutputFormatter::info("Folder creation is disabled; no files will be moved.");
        print_summary(&summary);
        return Ok(summary);
    }

    let plan = plan_moves(records, config);
    summary.planned = plan.len();

    if dry_run {
        for record in &plan {
            if let (Some(name), Some(dir)) = (&record.planned_name, &record.planned_dir) {
                OutputFormatter::dry_run_notice(&format!(
                    "Would move {} to {}",
                    record.path.display(),
                    dir.join(name).display()
                ));
            }
        }
        OutputFormatter::plain(&format!(
            "Dry run complete. {} file(s) would be moved.",
            plan.len()
        ));
        return Ok(summary);
    }

    // The manifest write is the durability checkpoint: no move happens
    // unless it succeeded.
    let manifest_path = manifest::write_manifest(&plan, manifest_dir)
        .map_err(|e| e.to_string())?;
    OutputFormatter::success(&format!("Manifest written to {}", manifest_path.display()));

    let report = mover::apply_moves(&plan);
    summary.moved = report.moved;
    summary.skipped = report.skipped.len();

    for (path, reason) in &report.skipped {
        OutputFormatter::warning(&format!("Skipped {}: {}", path.display(), reason));
    }

    print_summary(&summary);
    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    OutputFormatter::header("SUMMARY");
    OutputFormatter::plain(&format!("  Deleted:  {}", summary.deleted));
    OutputFormatter::plain(&format!("  Excluded: {}", summary.excluded));
    OutputFormatter::plain(&format!("  Selected: {}", summary.selected));
    OutputFormatter::plain(&format!("  Planned:  {}", summary.planned));
    OutputFormatter::plain(&format!("  Moved:    {}", summary.moved));
    if summary.skipped > 0 {
        OutputFormatter::warning(&format!("  Skipped:  {}", summary.skipped));
    }
}
