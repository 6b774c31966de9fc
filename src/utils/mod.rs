pub mod environment;
pub mod paths;
pub mod terminal;
pub mod timestamps;

pub use environment::{get_claude_dir, get_projects_dir};
pub use paths::{format_path_with_tilde, format_project_name, sanitize_for_file_name};
pub use timestamps::{file_name_safe, format_local_date, now_rfc3339, parse_timestamp};
