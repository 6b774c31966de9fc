//! JSON and CSV export of a project's prompt history
//!
//! [`export_history`] re-reads the project from disk, renders the chosen format and
//! writes a single file. Rendering lives in [`json`] and [`csv`] and is pure; only
//! this module touches the filesystem.

pub mod csv;
pub mod json;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::indexer::{FileFailure, collect_project_history};
use crate::models::{ExportFormat, Project, Prompt};
use crate::utils::{file_name_safe, now_rfc3339, sanitize_for_file_name};

/// Prefix of generated export file names
pub const DEFAULT_FILE_PREFIX: &str = "claude-history";

/// Result of an export that did not fail
#[derive(Debug)]
pub enum ExportOutcome {
    /// The project had no prompts; no file was created
    Empty { failures: Vec<FileFailure> },
    Written { path: PathBuf, prompt_count: usize, failures: Vec<FileFailure> },
}

impl ExportOutcome {
    /// Session files that could not be fully read while collecting the history
    pub fn failures(&self) -> &[FileFailure] {
        match self {
            ExportOutcome::Empty { failures } | ExportOutcome::Written { failures, .. } => {
                failures
            }
        }
    }
}

/// Export the prompt history of `project` as `format`
///
/// Writes to `output` when given, otherwise to [`default_output_path`] in the current
/// directory.
///
/// # Errors
///
/// Returns [`ExportError`] if the document cannot be serialized or the file cannot be
/// written. A partially written file may be left behind.
pub fn export_history(
    project: &Project,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<ExportOutcome, ExportError> {
    let history = collect_project_history(project);

    if history.prompts.is_empty() {
        return Ok(ExportOutcome::Empty { failures: history.failures });
    }

    let exported_at = now_rfc3339();
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(project, format, &exported_at),
    };

    let rendered = render(project, &history.prompts, format, &exported_at)?;
    fs::write(&path, rendered).map_err(|source| ExportError::Write { path: path.clone(), source })?;

    Ok(ExportOutcome::Written {
        path,
        prompt_count: history.prompts.len(),
        failures: history.failures,
    })
}

/// Render prompts in the requested format
pub fn render(
    project: &Project,
    prompts: &[Prompt],
    format: ExportFormat,
    exported_at: &str,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Json => {
            Ok(json::render_json(project, prompts, exported_at.to_string())?.into_bytes())
        }
        ExportFormat::Csv => Ok(csv::render_csv(prompts)?),
    }
}

/// `claude-history-<project>-<instant>.<ext>`, with the project name's separators and the
/// instant's `:`/`.` replaced by `-`
pub fn default_output_path(project: &Project, format: ExportFormat, instant: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}-{}-{}.{}",
        DEFAULT_FILE_PREFIX,
        sanitize_for_file_name(&project.name),
        file_name_safe(instant),
        format.extension()
    ))
}
