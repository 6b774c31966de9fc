//! chistory - Browse and export the prompts you gave Claude Code
//!
//! This library reads Claude Code's per-project session logs stored in
//! `~/.claude/projects/`. It supports:
//!
//! - Discovering project directories and their `.jsonl` session files
//! - Extracting user-authored prompts from session records
//! - Merging a project's prompts into one chronological history
//! - Exporting a history as pretty-printed JSON or CSV
//!
//! # Example
//!
//! ```no_run
//! use chistory::{collect_project_history, discover_projects};
//! use std::path::PathBuf;
//!
//! let projects_dir = PathBuf::from("/Users/alice/.claude/projects");
//! for project in discover_projects(&projects_dir)? {
//!     let history = collect_project_history(&project);
//!     println!("{}: {} prompts", project.name, history.prompts.len());
//! }
//! # Ok::<(), chistory::error::ScanError>(())
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use export::{ExportOutcome, export_history};
pub use indexer::{collect_project_history, discover_projects};
pub use models::{ExportFormat, Project, Prompt};
pub use parsers::parse_session_file;
pub use utils::{format_path_with_tilde, format_project_name};
