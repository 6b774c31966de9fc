//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

pub const SESSION_A: &str = "550e8400-e29b-41d4-a716-446655440000";
pub const SESSION_B: &str = "550e8400-e29b-41d4-a716-446655440001";

/// Builder for a fake home directory containing `.claude/projects`
pub struct ClaudeHomeBuilder {
    temp_dir: TempDir,
}

impl ClaudeHomeBuilder {
    /// Create a new home with an empty `.claude/projects` directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join(".claude").join("projects"))
            .expect("Failed to create projects dir");
        Self { temp_dir }
    }

    /// Create a home without any `.claude` directory
    pub fn without_claude_dir() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    /// The fake HOME
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.temp_dir.path().join(".claude").join("projects")
    }

    /// Add a project directory with the given directory name and session files
    pub fn with_project(self, dir_name: &str, sessions: &[SessionFileBuilder]) -> Self {
        let project_dir = self.projects_dir().join(dir_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for session in sessions {
            session.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeHomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `.jsonl` session file
pub struct SessionFileBuilder {
    filename: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new() }
    }

    /// Add a record
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Add a raw line verbatim (may be invalid JSON)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn create_in(&self, dir: &Path) {
        fs::write(dir.join(&self.filename), self.lines.join("\n"))
            .expect("Failed to write session file");
    }
}

/// Builder for session records
pub struct RecordBuilder {
    record_type: String,
    role: String,
    content: Value,
    uuid: String,
    session_id: String,
    cwd: String,
    timestamp: String,
}

impl RecordBuilder {
    /// A user prompt with plain string content
    pub fn user(uuid: &str, text: &str, timestamp: &str) -> Self {
        Self {
            record_type: "user".to_string(),
            role: "user".to_string(),
            content: Value::String(text.to_string()),
            uuid: uuid.to_string(),
            session_id: SESSION_A.to_string(),
            cwd: "/home/dev/app".to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    /// An assistant reply
    pub fn assistant(uuid: &str, text: &str, timestamp: &str) -> Self {
        Self {
            record_type: "assistant".to_string(),
            role: "assistant".to_string(),
            content: json!([{ "type": "text", "text": text }]),
            ..Self::user(uuid, text, timestamp)
        }
    }

    /// Replace the content with structured blocks
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.content = Value::Array(blocks);
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = cwd.to_string();
        self
    }

    pub fn text_block(text: &str) -> Value {
        json!({ "type": "text", "text": text })
    }

    pub fn image_block() -> Value {
        json!({ "type": "image", "source": { "type": "base64", "media_type": "image/png", "data": "iVBORw0KGgo=" } })
    }

    pub fn tool_result_block(tool_use_id: &str, content: &str) -> Value {
        json!({ "type": "tool_result", "tool_use_id": tool_use_id, "content": content })
    }

    pub fn to_json(&self) -> String {
        json!({
            "parentUuid": null,
            "isSidechain": false,
            "userType": "external",
            "cwd": self.cwd,
            "sessionId": self.session_id,
            "version": "1.0.0",
            "type": self.record_type,
            "message": { "role": self.role, "content": self.content },
            "uuid": self.uuid,
            "timestamp": self.timestamp,
        })
        .to_string()
    }
}

/// A home with two projects: one with prompts across two sessions, one with only
/// assistant output
pub fn realistic_claude_home() -> TempDir {
    ClaudeHomeBuilder::new()
        .with_project(
            "-mnt-c-Users-Owner-Develop-myproj",
            &[
                SessionFileBuilder::new("a.jsonl")
                    .with_raw_line(r#"{"type":"summary","summary":"Setup","leafUuid":"l1"}"#)
                    .with_record(RecordBuilder::user("u-a1", "Set up CI", "2024-01-01T00:00:00Z"))
                    .with_record(RecordBuilder::assistant("a-a1", "Done", "2024-01-01T00:00:05Z")),
                SessionFileBuilder::new("b.jsonl").with_record(
                    RecordBuilder::user("u-b1", "Initial commit", "2023-12-31T00:00:00Z")
                        .session_id(SESSION_B),
                ),
            ],
        )
        .with_project(
            "-home-dev-quiet",
            &[SessionFileBuilder::new("only-assistant.jsonl").with_record(
                RecordBuilder::assistant("a1", "Nothing to see", "2024-02-01T00:00:00Z"),
            )],
        )
        .build()
}
