//! Project discovery and history aggregation
//!
//! # Error Handling Strategy
//!
//! Both stages degrade per unit instead of failing as a whole:
//!
//! - **Project-level failures**: an entry under the projects root that cannot be
//!   stat'ed or listed is skipped and reported in [`ProjectScan::skipped`].
//!
//! - **File-level failures**: a session file that cannot be read or stops on a malformed
//!   line is reported in [`ProjectHistory::failures`]; prompts from every other file
//!   (and from the failed file's lines before the error) are kept.
//!
//! Only an unreadable projects root is returned as an error. Nothing here logs; the
//! CLI reports skipped units.

pub mod aggregator;
pub mod project_discovery;

pub use aggregator::{FileFailure, ProjectHistory, collect_project_history};
pub use project_discovery::{ProjectScan, SESSION_FILE_EXTENSION, discover_projects, scan_projects};
