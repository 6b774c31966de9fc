use crate::models::{ExportDocument, Project, Prompt};

/// Pretty-printed JSON export document (two-space indentation)
pub fn render_json(
    project: &Project,
    prompts: &[Prompt],
    exported_at: String,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ExportDocument::new(project, prompts, exported_at))
}
