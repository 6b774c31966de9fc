use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{Project, Prompt};
use crate::utils::format_local_date;

/// Output format for `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension used for default output names
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedProject {
    pub name: String,
    pub path: String,
    pub session_count: usize,
}

/// A prompt as written to the JSON export, with a locally rendered date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedPrompt {
    pub uuid: String,
    pub session_id: String,
    pub content: String,
    pub timestamp: String,
    pub cwd: String,
    pub date: String,
}

impl From<&Prompt> for ExportedPrompt {
    fn from(prompt: &Prompt) -> Self {
        Self {
            uuid: prompt.id.clone(),
            session_id: prompt.session_id.clone(),
            content: prompt.text.clone(),
            timestamp: prompt.timestamp.clone(),
            cwd: prompt.working_directory.clone(),
            date: format_local_date(&prompt.timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub project: ExportedProject,
    pub exported_at: String,
    pub total_prompts: usize,
    pub prompts: Vec<ExportedPrompt>,
}

impl ExportDocument {
    pub fn new(project: &Project, prompts: &[Prompt], exported_at: String) -> Self {
        Self {
            project: ExportedProject {
                name: project.name.clone(),
                path: project.root_path.to_string_lossy().into_owned(),
                session_count: project.session_count(),
            },
            exported_at,
            total_prompts: prompts.len(),
            prompts: prompts.iter().map(ExportedPrompt::from).collect(),
        }
    }
}
