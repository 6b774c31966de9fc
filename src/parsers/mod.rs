//! JSONL parser for Claude Code session files
//!
//! # Error Handling Strategy
//!
//! Session files are parsed conservatively and without logging:
//!
//! - **Unreadable files**: reported as [`SessionError::Read`]; the caller skips the file.
//!
//! - **Malformed lines**: the first line that is not valid JSON, or a user record missing
//!   one of the fields a prompt needs, stops extraction for the rest of that file. The
//!   error is [`SessionError::Malformed`] and carries the prompts already extracted.
//!   There is no per-line recovery, so a single bad line hides everything after it.
//!
//! - **Non-prompt lines**: assistant turns, summaries, tool results and whitespace-only
//!   messages are not errors; they simply produce no prompt.
//!
//! [`SessionError::Read`]: crate::error::SessionError::Read
//! [`SessionError::Malformed`]: crate::error::SessionError::Malformed

pub mod session;

pub use session::{extract_prompt, parse_session_file, parse_session_str};
