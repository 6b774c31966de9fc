use std::io::{IsTerminal, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use tracing::{debug, error, warn};

use super::render::{print_history, print_project_list};
use crate::export::{ExportOutcome, export_history};
use crate::indexer::{FileFailure, collect_project_history, scan_projects};
use crate::models::{ExportFormat, Project};
use crate::utils::{format_path_with_tilde, get_projects_dir};

#[derive(Parser)]
#[command(name = "chistory")]
#[command(version = "0.1.0")]
#[command(about = "Claude history viewer CLI tool", long_about = None)]
pub struct Cli {
    /// Directory holding one subdirectory per project [default: ~/.claude/projects]
    #[arg(long, global = true, value_name = "DIR")]
    pub projects_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all Claude projects and browse the prompts of one
    List {
        /// Project number to show instead of asking
        #[arg(long, value_name = "N")]
        project: Option<usize>,
    },
    /// Export history to JSON or CSV
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file path [default: claude-history-<project>-<time>.<format>]
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Project number to export instead of asking
        #[arg(long, value_name = "N")]
        project: Option<usize>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if !stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let projects_dir = match cli.projects_dir {
        Some(dir) => dir,
        None => get_projects_dir()?,
    };
    debug!(projects_dir = %projects_dir.display(), "using projects directory");

    match cli.command {
        Some(Commands::List { project }) => list(&projects_dir, project),
        Some(Commands::Export { format, output, project }) => {
            export(&projects_dir, format, output.as_deref(), project)
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn list(projects_dir: &Path, requested: Option<usize>) -> Result<()> {
    let projects = load_projects(projects_dir);

    if projects.is_empty() {
        println!(
            "{}",
            format!("No Claude projects found in {}", format_path_with_tilde(projects_dir))
                .yellow()
        );
        return Ok(());
    }

    print_project_list(&projects);

    let project = match requested {
        Some(number) => project_by_number(&projects, number)?,
        None => prompt_project_number(&projects)?,
    };

    let history = collect_project_history(project);
    report_failures(project, &history.failures);

    if history.prompts.is_empty() {
        println!("{}", "No user prompts found in this project".yellow());
        return Ok(());
    }

    print_history(project, &history.prompts);
    Ok(())
}

fn export(
    projects_dir: &Path,
    format: ExportFormat,
    output: Option<&Path>,
    requested: Option<usize>,
) -> Result<()> {
    let projects = load_projects(projects_dir);

    if projects.is_empty() {
        println!("{}", "No Claude projects found".yellow());
        return Ok(());
    }

    let project = match requested {
        Some(number) => project_by_number(&projects, number)?,
        None => prompt_project_choice(&projects)?,
    };

    match export_history(project, format, output) {
        Ok(outcome) => {
            report_failures(project, outcome.failures());
            match outcome {
                ExportOutcome::Empty { .. } => {
                    println!("{}", "No user prompts found to export".yellow());
                }
                ExportOutcome::Written { path, prompt_count, .. } => {
                    println!("{}", format!("History exported to: {}", path.display()).green());
                    println!("{}", format!("Exported {} prompts", prompt_count).bright_black());
                }
            }
        }
        Err(e) => {
            error!(project = %project.name, "Error exporting history: {e}");
        }
    }

    Ok(())
}

/// Scan the projects root, logging anything skipped; degrades to no projects
fn load_projects(projects_dir: &Path) -> Vec<Project> {
    match scan_projects(projects_dir) {
        Ok(scan) => {
            for skipped in &scan.skipped {
                warn!("Skipping project entry: {skipped}");
            }
            scan.projects
        }
        Err(e) => {
            error!("Error reading Claude projects: {e}");
            Vec::new()
        }
    }
}

fn report_failures(project: &Project, failures: &[FileFailure]) {
    for failure in failures {
        warn!(
            project = %project.name,
            "Error reading session file {}: {}",
            failure.file_name,
            failure.error
        );
    }
}

/// Look up a 1-based project number
fn project_by_number(projects: &[Project], number: usize) -> Result<&Project> {
    if number == 0 || number > projects.len() {
        bail!("Please enter a number between 1 and {}", projects.len());
    }
    Ok(&projects[number - 1])
}

fn prompt_project_number(projects: &[Project]) -> Result<&Project> {
    let count = projects.len();
    let number: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a project number to view history")
        .validate_with(|input: &usize| -> Result<(), String> {
            if *input == 0 || *input > count {
                Err(format!("Please enter a number between 1 and {}", count))
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("Failed to read project selection")?;

    project_by_number(projects, number)
}

fn prompt_project_choice(projects: &[Project]) -> Result<&Project> {
    let items: Vec<String> = projects
        .iter()
        .map(|p| format!("{} ({} sessions)", p.name, p.session_count()))
        .collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a project to export")
        .items(&items)
        .default(0)
        .interact()
        .context("Failed to read project selection")?;

    Ok(&projects[index])
}
