//! `rulekit memory` commands - gate memory rules and scaffold memory files

use chrono::Local;
use serde_json::json;

use crate::cli::{Cli, MemoryCommands};
use crate::commands::format::{print_json, print_json_status, print_records_header};
use crate::commands::helpers::SelectionSession;
use crate::output_by_format_result;
use rulekit_core::error::Result;
use rulekit_core::memory_files::{create_memory_files, FileOutcome};
use rulekit_core::project::Project;
use rulekit_core::records::path_relative_to_cwd;

/// Execute a memory subcommand
pub fn execute(cli: &Cli, project: &Project, command: &MemoryCommands) -> Result<()> {
    match command {
        MemoryCommands::Enable => set_enabled(cli, project, true),
        MemoryCommands::Disable => set_enabled(cli, project, false),
        MemoryCommands::Files { force } => files(cli, project, *force),
    }
}

fn set_enabled(cli: &Cli, project: &Project, enabled: bool) -> Result<()> {
    let mut session = SelectionSession::open(project)?;
    session.selection.set_memory_enabled(enabled);
    session.save()?;

    let counted = session.selection.memory_active_count();
    let state = if enabled { "enabled" } else { "disabled" };

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            None,
            &[
                ("memory_enabled", json!(enabled)),
                ("selected_memory", json!(session.selection.selected_memory)),
            ],
        ),
        human => {
            println!("Memory rules {}", state);
            if enabled && counted == 0 && !cli.quiet {
                println!("No memory rules selected yet; see `rulekit list`.");
            }
        },
        records => {
            print_records_header(
                "memory",
                &[("state", state.to_string()), ("active", counted.to_string())],
            );
        }
    )
}

fn files(cli: &Cli, project: &Project, force: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let results = create_memory_files(project.root(), today, force)?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({ "files": results })),
        human => {
            for result in &results {
                let path = path_relative_to_cwd(&result.path);
                match result.outcome {
                    FileOutcome::Created => println!("Created {}", path),
                    FileOutcome::Overwritten => println!("Overwrote {}", path),
                    FileOutcome::Skipped => println!("Kept existing {} (use --force to overwrite)", path),
                }
            }
        },
        records => {
            print_records_header("memory.files", &[("force", force.to_string())]);
            for result in &results {
                let outcome = match result.outcome {
                    FileOutcome::Created => "created",
                    FileOutcome::Overwritten => "overwritten",
                    FileOutcome::Skipped => "skipped",
                };
                println!(
                    "D file \"{}\" outcome={}",
                    path_relative_to_cwd(&result.path),
                    outcome
                );
            }
        }
    )
}
