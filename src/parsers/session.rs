use std::fs;
use std::path::Path;

use crate::error::{RecordError, SessionError};
use crate::models::record::ROLE_USER;
use crate::models::{Prompt, RawLogRecord};

/// Parse a session JSONL file and return the user prompts it contains, in file order
///
/// The file is decoded lossily, so stray invalid UTF-8 bytes do not make it unreadable.
pub fn parse_session_file(path: &Path) -> Result<Vec<Prompt>, SessionError> {
    let bytes =
        fs::read(path).map_err(|source| SessionError::Read { path: path.to_path_buf(), source })?;
    // Invalid UTF-8 becomes U+FFFD instead of costing the whole file
    let content = String::from_utf8_lossy(&bytes);

    parse_session_str(&content).map_err(|(line, partial, source)| SessionError::Malformed {
        path: path.to_path_buf(),
        line,
        partial,
        source,
    })
}

/// Parse session content already in memory.
///
/// On failure returns the 1-based line number, the prompts extracted before it and
/// the cause.
pub fn parse_session_str(
    content: &str,
) -> Result<Vec<Prompt>, (usize, Vec<Prompt>, RecordError)> {
    let mut prompts = Vec::new();

    for (line_num, line) in content.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let extracted = serde_json::from_str::<RawLogRecord>(line)
            .map_err(RecordError::from)
            .and_then(|record| extract_prompt(&record));

        match extracted {
            Ok(Some(prompt)) => prompts.push(prompt),
            Ok(None) => {}
            Err(e) => return Err((line_num + 1, prompts, e)),
        }
    }

    Ok(prompts)
}

/// Turn one record into a prompt.
///
/// Returns `Ok(None)` for anything that is not a user-authored message with non-blank
/// text. A user record without a `message`, or a prompt-bearing record missing
/// `uuid`, `sessionId`, `timestamp` or `cwd`, is an error.
pub fn extract_prompt(record: &RawLogRecord) -> Result<Option<Prompt>, RecordError> {
    if !record.is_user_record() {
        return Ok(None);
    }

    let message = record.message.as_ref().ok_or(RecordError::MissingField("message"))?;
    if message.role.as_deref() != Some(ROLE_USER) {
        return Ok(None);
    }

    let content = message.content.to_text();
    let text = content.trim();
    if text.is_empty() {
        return Ok(None);
    }

    Ok(Some(Prompt {
        id: required(&record.uuid, "uuid")?,
        session_id: required(&record.session_id, "sessionId")?,
        text: text.to_string(),
        timestamp: required(&record.timestamp, "timestamp")?,
        working_directory: required(&record.cwd, "cwd")?,
    }))
}

fn required(field: &Option<String>, name: &'static str) -> Result<String, RecordError> {
    field.clone().ok_or(RecordError::MissingField(name))
}
