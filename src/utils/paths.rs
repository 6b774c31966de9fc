use std::borrow::Cow;
use std::env;
use std::path::Path;

/// Machine-specific prefix left over after decoding, stripped from display names
const KNOWN_HOME_PREFIX: &str = "mnt/c/Users/Owner/Develop/";

/// Turns a project directory name into a human-readable project name
///
/// Claude stores each project under its working directory with `/` written as `-`.
/// The transform is best-effort and lossy: hyphens that were part of the original
/// path come back as separators too.
///
/// # Examples
///
/// ```
/// use chistory::format_project_name;
///
/// assert_eq!(format_project_name("-mnt-c-Users-Owner-Develop-myproj"), "myproj");
/// assert_eq!(format_project_name("-home-alice-code-app"), "home/alice/code/app");
/// ```
pub fn format_project_name(dir_name: &str) -> String {
    let without_leading = dir_name.strip_prefix('-').unwrap_or(dir_name);
    let slashed = without_leading.replace('-', "/");
    let without_home = slashed.strip_prefix(KNOWN_HOME_PREFIX).unwrap_or(&slashed);
    without_home.strip_prefix('/').unwrap_or(without_home).to_string()
}

/// Makes a project name usable inside a single file name
pub fn sanitize_for_file_name(name: &str) -> String {
    name.replace('/', "-")
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use chistory::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.claude/projects");
/// // Returns "~/.claude/projects" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
