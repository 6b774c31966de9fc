use crate::error::SessionError;
use crate::models::{Project, Prompt};
use crate::parsers::parse_session_file;
use crate::utils::parse_timestamp;

/// A session file that contributed fewer prompts than it holds
#[derive(Debug)]
pub struct FileFailure {
    pub file_name: String,
    pub error: SessionError,
}

/// Prompts of one project in chronological order, plus per-file failures
#[derive(Debug, Default)]
pub struct ProjectHistory {
    pub prompts: Vec<Prompt>,
    pub failures: Vec<FileFailure>,
}

/// Read every session file of `project` and merge the prompts chronologically
///
/// Files are parsed one after another. A file that fails keeps whatever it produced
/// before the failure and is recorded in [`ProjectHistory::failures`]; the remaining
/// files are still read.
///
/// Prompts are sorted ascending by their parsed timestamp with a stable sort, so equal
/// instants keep file order. Timestamps that don't parse sort before all others.
///
/// # Examples
///
/// ```no_run
/// use chistory::{collect_project_history, discover_projects};
/// use std::path::Path;
///
/// for project in discover_projects(Path::new("/home/alice/.claude/projects"))? {
///     let history = collect_project_history(&project);
///     println!("{}: {} prompts", project.name, history.prompts.len());
/// }
/// # Ok::<(), chistory::error::ScanError>(())
/// ```
pub fn collect_project_history(project: &Project) -> ProjectHistory {
    let mut history = ProjectHistory::default();

    for file_name in &project.session_file_names {
        match parse_session_file(&project.root_path.join(file_name)) {
            Ok(prompts) => history.prompts.extend(prompts),
            Err(mut error) => {
                history.prompts.extend(error.take_partial());
                history.failures.push(FileFailure { file_name: file_name.clone(), error });
            }
        }
    }

    history.prompts.sort_by_cached_key(|prompt| parse_timestamp(&prompt.timestamp));

    history
}
