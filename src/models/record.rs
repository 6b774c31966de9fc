use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Record type tag for user-authored lines
pub const RECORD_TYPE_USER: &str = "user";
/// Message role for user-authored messages
pub const ROLE_USER: &str = "user";

/// Type tag of blocks that carry prompt text
pub const CONTENT_TYPE_TEXT: &str = "text";

/// One element of a structured message body.
///
/// Built from any JSON value, so an odd element never invalidates its neighbours:
/// anything not tagged `"type": "text"` becomes [`ContentBlock::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ContentBlock {
    /// `text` is kept as raw JSON; it is usually a string but not always
    Text { text: Value },
    /// Images, tool calls, tool results, thinking, untyped values, ...
    Other(Value),
}

impl From<Value> for ContentBlock {
    fn from(value: Value) -> Self {
        if value.get("type").and_then(Value::as_str) == Some(CONTENT_TYPE_TEXT) {
            let text = value.get("text").cloned().unwrap_or(Value::Null);
            ContentBlock::Text { text }
        } else {
            ContentBlock::Other(value)
        }
    }
}

impl From<ContentBlock> for Value {
    fn from(block: ContentBlock) -> Self {
        match block {
            ContentBlock::Text { text } => json!({ "type": CONTENT_TYPE_TEXT, "text": text }),
            ContentBlock::Other(value) => value,
        }
    }
}

impl ContentBlock {
    /// Text this block contributes to a prompt, `None` for non-text blocks
    pub fn text(&self) -> Option<String> {
        match self {
            ContentBlock::Text { text } => Some(join_fragment(text)),
            ContentBlock::Other(_) => None,
        }
    }
}

/// Render a `text` value the way a string join would: strings verbatim, missing or
/// null as empty, scalars in their literal form, arrays comma-joined
fn join_fragment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(join_fragment).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Message body: either plain text or a list of content blocks
///
/// Anything else (null, numbers, objects) lands in [`MessageContent::Unsupported`] and
/// yields no text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Unsupported(Value),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Unsupported(Value::Null)
    }
}

impl MessageContent {
    /// Flatten the content into prompt text.
    ///
    /// Text blocks are joined with a single space; a text block without a `text`
    /// field contributes an empty string. The result is not trimmed.
    pub fn to_text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Blocks(blocks) => {
                blocks.iter().filter_map(ContentBlock::text).collect::<Vec<_>>().join(" ")
            }
            MessageContent::Unsupported(_) => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: MessageContent,
}

/// One line of a session file.
///
/// Only the fields needed for prompt extraction are modelled; everything is optional
/// because summary and snapshot lines share the file with conversation turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLogRecord {
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl RawLogRecord {
    /// True for records typed `user`, regardless of the nested role
    pub fn is_user_record(&self) -> bool {
        self.record_type.as_deref() == Some(RECORD_TYPE_USER)
    }
}
