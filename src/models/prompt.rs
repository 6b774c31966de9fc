use serde::{Deserialize, Serialize};

/// A user-authored prompt extracted from a session record.
///
/// `text` is trimmed and never empty. `timestamp` is kept exactly as it appears in
/// the log; it is only parsed for ordering and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub session_id: String,
    pub text: String,
    pub timestamp: String,
    pub working_directory: String,
}
