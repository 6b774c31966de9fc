//! Console text helpers for rendering prompts
//!
//! Prompt text comes straight from session logs and may carry ANSI escape sequences
//! (pasted terminal output is common). Anything printed by `list` goes through
//! [`strip_ansi_codes`] first so a prompt cannot recolor or clear the operator's terminal.

/// Number of characters shown for each prompt in `list`
pub const PREVIEW_CHARS: usize = 100;

/// Strips ANSI CSI escape sequences and control characters other than tab, newline and
/// carriage return
///
/// # Examples
///
/// ```
/// use chistory::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI sequences end at the first letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Shortens `text` to `max_chars` characters, appending `...` when anything was cut
///
/// Counts characters, not bytes, so multi-byte text is never split mid-character.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Leading part of an identifier, used for compact session labels
pub fn short_id(id: &str, len: usize) -> &str {
    match id.char_indices().nth(len) {
        Some((byte_idx, _)) => &id[..byte_idx],
        None => id,
    }
}
