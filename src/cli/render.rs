use colored::Colorize;

use crate::models::{Project, Prompt};
use crate::utils::format_local_date;
use crate::utils::terminal::{PREVIEW_CHARS, short_id, strip_ansi_codes, truncate_preview};

/// Characters of the session id shown under each prompt
const SESSION_ID_PREVIEW: usize = 8;

pub fn print_project_list(projects: &[Project]) {
    println!("{}", "Claude Projects:".blue().bold());
    for (i, project) in projects.iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).green(), strip_ansi_codes(&project.name));
        println!("   {}", format!("Sessions: {}", project.session_count()).bright_black());
    }
}

pub fn print_history(project: &Project, prompts: &[Prompt]) {
    println!("{}", format!("\nHistory for {}:", strip_ansi_codes(&project.name)).blue().bold());
    println!("{}", format!("Found {} prompts\n", prompts.len()).bright_black());

    for (i, prompt) in prompts.iter().enumerate() {
        let preview = truncate_preview(&strip_ansi_codes(&prompt.text), PREVIEW_CHARS);
        let details = format!(
            "Session: {}... | CWD: {}",
            short_id(&prompt.session_id, SESSION_ID_PREVIEW),
            strip_ansi_codes(&prompt.working_directory)
        );

        println!("{} {}", format!("{}.", i + 1).green(), format_local_date(&prompt.timestamp).cyan());
        println!("   {}", preview.white());
        println!("   {}", details.bright_black());
        println!();
    }
}
