//! Data models for Claude Code session logs.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`RawLogRecord`] - One JSON line from a project session file
//! - [`Prompt`] - A normalized, non-empty user prompt extracted from a record
//! - [`Project`] - A discovered project directory and its session files
//! - [`ExportDocument`] - The JSON export layout
//!
//! Message content comes in several shapes on disk; [`MessageContent`] models them as
//! a serde tagged union so extraction can match on every shape explicitly.

pub mod export;
pub mod project;
pub mod prompt;
pub mod record;

pub use export::{ExportDocument, ExportFormat, ExportedProject, ExportedPrompt};
pub use project::Project;
pub use prompt::Prompt;
pub use record::{ContentBlock, Message, MessageContent, RawLogRecord};
