//! Command-line interface: argument parsing, project selection and console output
//!
//! This is the only layer that logs. Pipeline errors come back as values and are
//! reported here with `tracing` before the command carries on.

pub mod commands;
pub mod render;

pub use commands::{Cli, Commands, run};
