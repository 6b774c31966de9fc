use std::path::PathBuf;

/// A project directory under the Claude projects root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Display name derived from the directory name (lossy)
    pub name: String,
    pub root_path: PathBuf,
    /// Session file names (not paths), in directory-enumeration order
    pub session_file_names: Vec<String>,
}

impl Project {
    pub fn session_count(&self) -> usize {
        self.session_file_names.len()
    }
}
