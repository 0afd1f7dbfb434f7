//! chronosort - a batch file organizer driven by modification timestamps
//!
//! This library provides the pieces of a one-shot rename/relocation pipeline:
//! directory traversal, extension-based delete/exclude filtering, filename
//! prefix selection, timestamp-derived rename planning, a pre-move JSON
//! manifest, and the mover that applies the plan.

pub mod cli;
pub mod config;
pub mod filter;
pub mod layout;
pub mod manifest;
pub mod mover;
pub mod output;
pub mod planner;
pub mod select;
pub mod traverse;

pub use config::{ConfigError, RunConfig};
pub use filter::ExtensionFilter;
pub use manifest::{ManifestError, read_manifest, write_manifest};
pub use mover::{MoveReport, apply_moves};
pub use planner::plan_moves;
pub use select::{FileRecord, select_by_prefix};
pub use traverse::{TraversalError, list_files};

pub use cli::{Cli, RunSummary, run_cli, run_pipeline};
