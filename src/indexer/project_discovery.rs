use std::cmp::Ordering;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::ScanError;
use crate::models::Project;
use crate::utils::format_project_name;

/// Extension of session log files inside a project directory
pub const SESSION_FILE_EXTENSION: &str = ".jsonl";

/// Projects found under the root, plus the entries that had to be skipped
#[derive(Debug, Default)]
pub struct ProjectScan {
    pub projects: Vec<Project>,
    pub skipped: Vec<ScanError>,
}

/// Discover all projects under `projects_dir` (normally ~/.claude/projects)
///
/// Convenience wrapper over [`scan_projects`] that drops the skipped entries.
pub fn discover_projects(projects_dir: &Path) -> Result<Vec<Project>, ScanError> {
    Ok(scan_projects(projects_dir)?.projects)
}

/// Scan the projects root for project directories and their session files
///
/// Each immediate subdirectory becomes one [`Project`]; symlinks are followed the same
/// way `stat` would. Session files are the subdirectory's immediate files ending in
/// `.jsonl`, kept in enumeration order. Projects are sorted by display name.
///
/// # Returns
///
/// An empty scan if `projects_dir` doesn't exist (not an error).
///
/// # Errors
///
/// Returns [`ScanError::ReadRoot`] if the root exists but cannot be listed. Entries that
/// cannot be stat'ed and project directories that cannot be listed end up in
/// [`ProjectScan::skipped`] instead.
pub fn scan_projects(projects_dir: &Path) -> Result<ProjectScan, ScanError> {
    let mut scan = ProjectScan::default();

    if !projects_dir.exists() {
        return Ok(scan);
    }

    for entry in immediate_children(projects_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(ScanError::ReadRoot { path: projects_dir.to_path_buf(), source });
            }
            Err(source) => {
                let path = source.path().map(Path::to_path_buf).unwrap_or_default();
                scan.skipped.push(ScanError::Entry { path, source });
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let name = format_project_name(&entry.file_name().to_string_lossy());
        match list_session_files(entry.path()) {
            Ok(session_file_names) => {
                scan.projects.push(Project { name, root_path: entry.into_path(), session_file_names });
            }
            Err(source) => {
                scan.skipped.push(ScanError::Entry { path: entry.into_path(), source });
            }
        }
    }

    scan.projects.sort_by(|a, b| compare_display_names(&a.name, &b.name));

    Ok(scan)
}

fn immediate_children(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).into_iter()
}

/// Names of the session files directly inside `project_dir`
///
/// A file that disappears or cannot be stat'ed mid-listing is left out; failing to
/// list the directory itself is an error.
fn list_session_files(project_dir: &Path) -> Result<Vec<String>, walkdir::Error> {
    let mut names = Vec::new();

    for entry in WalkDir::new(project_dir).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e),
            Err(_) => continue,
        };
        if entry.depth() == 1 && is_session_file(&entry) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(names)
}

fn is_session_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry.file_name().to_string_lossy().ends_with(SESSION_FILE_EXTENSION)
}

/// Case-insensitive ordering; names equal up to case put lowercase first, as
/// locale collation does
fn compare_display_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use tempfile::TempDir;

    use super::*;

    /// Helper to create a project directory with the given session files
    fn create_project_dir(projects_dir: &Path, dir_name: &str, files: &[&str]) -> PathBuf {
        let project_dir = projects_dir.join(dir_name);
        fs::create_dir(&project_dir).expect("Failed to create project dir");

        for filename in files {
            let mut file =
                fs::File::create(project_dir.join(filename)).expect("Failed to create file");
            file.write_all(b"{}").expect("Failed to write file");
        }

        project_dir
    }

    #[test]
    fn test_discover_projects_with_valid_structure() {
        let root = TempDir::new().unwrap();
        create_project_dir(root.path(), "-home-dev-beta", &["s1.jsonl"]);
        create_project_dir(root.path(), "-home-dev-alpha", &["s2.jsonl", "s3.jsonl"]);

        let projects = discover_projects(root.path()).unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "home/dev/alpha");
        assert_eq!(projects[0].root_path, root.path().join("-home-dev-alpha"));
        assert_eq!(projects[0].session_count(), 2);
        assert_eq!(projects[1].name, "home/dev/beta");
        assert_eq!(projects[1].session_file_names, vec!["s1.jsonl".to_string()]);
    }

    #[test]
    fn test_discover_projects_missing_directory() {
        let root = TempDir::new().unwrap();

        let projects = discover_projects(&root.path().join("projects")).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_discover_projects_empty_root() {
        let root = TempDir::new().unwrap();
        assert!(discover_projects(root.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_projects_skips_non_directories() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("stray.jsonl"), "{}").unwrap();
        create_project_dir(root.path(), "-srv-app", &[]);

        let projects = discover_projects(root.path()).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "srv/app");
        assert_eq!(projects[0].session_count(), 0);
    }

    #[test]
    fn test_discover_projects_only_jsonl_files() {
        let root = TempDir::new().unwrap();
        let project_dir = create_project_dir(
            root.path(),
            "-srv-app",
            &["a.jsonl", "notes.txt", "b.jsonl.bak", "c.jsonl"],
        );
        fs::create_dir(project_dir.join("nested.jsonl")).unwrap();

        let projects = discover_projects(root.path()).unwrap();
        let mut names = projects[0].session_file_names.clone();
        names.sort();
        assert_eq!(names, vec!["a.jsonl".to_string(), "c.jsonl".to_string()]);
    }

    #[test]
    fn test_discover_projects_does_not_descend() {
        let root = TempDir::new().unwrap();
        let project_dir = create_project_dir(root.path(), "-srv-app", &["top.jsonl"]);
        let nested = project_dir.join("sub");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.jsonl"), "{}").unwrap();

        let projects = discover_projects(root.path()).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].session_file_names, vec!["top.jsonl".to_string()]);
    }

    #[test]
    fn test_discover_projects_sorted_case_insensitively() {
        let root = TempDir::new().unwrap();
        create_project_dir(root.path(), "Zeta", &[]);
        create_project_dir(root.path(), "alpha", &[]);
        create_project_dir(root.path(), "Beta", &[]);

        let names: Vec<String> =
            discover_projects(root.path()).unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn test_discover_projects_known_prefix_display_name() {
        let root = TempDir::new().unwrap();
        create_project_dir(root.path(), "-mnt-c-Users-Owner-Develop-myproj", &["s.jsonl"]);

        let projects = discover_projects(root.path()).unwrap();
        assert_eq!(projects[0].name, "myproj");
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_broken_symlink() {
        let root = TempDir::new().unwrap();
        create_project_dir(root.path(), "-srv-app", &["s.jsonl"]);
        std::os::unix::fs::symlink(root.path().join("missing"), root.path().join("-dangling"))
            .unwrap();

        let scan = scan_projects(root.path()).unwrap();
        assert_eq!(scan.projects.len(), 1);
        assert_eq!(scan.skipped.len(), 1);
        assert!(matches!(scan.skipped[0], ScanError::Entry { .. }));
    }

    #[test]
    fn test_compare_display_names_total_order() {
        assert_eq!(compare_display_names("app", "App"), Ordering::Less);
        assert_eq!(compare_display_names("App", "app"), Ordering::Greater);
        assert_eq!(compare_display_names("App", "apq"), Ordering::Less);
        assert_eq!(compare_display_names("app", "apq"), Ordering::Less);
        assert_eq!(compare_display_names("same", "same"), Ordering::Equal);
    }
}
