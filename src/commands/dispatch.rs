//! Command dispatch logic for rulekit

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::helpers::SelectionSession;
use rulekit_core::error::Result;
use rulekit_core::project::Project;
use rulekit_core::trace_time;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return handle_no_command();
    };

    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let project = Project::open(&root)?.with_legacy_file(cli.legacy_file.clone());
    trace_time!(start, "open_project");

    let catalog = project.config().catalog();

    match command {
        Commands::Init => commands::init::execute(cli, &project),

        Commands::List => {
            let session = SelectionSession::open(&project)?;
            commands::list::execute(cli, &session.selection, &catalog)
        }

        Commands::Active => {
            let session = SelectionSession::open(&project)?;
            commands::active::execute(cli, &session.selection)
        }

        Commands::Toggle { list, rule } => {
            let mut session = SelectionSession::open(&project)?;
            commands::toggle::execute(cli, &mut session, &catalog, *list, rule)
        }

        Commands::Memory { command } => commands::memory::execute(cli, &project, command),

        Commands::Personal { command } => {
            let mut session = SelectionSession::open(&project)?;
            commands::personal::execute(cli, &mut session, command)
        }

        Commands::Template { command } => {
            commands::template::execute(cli, &project, &catalog.templates, command)
        }

        Commands::Save { yes } => {
            let session = SelectionSession::open(&project)?;
            commands::save::execute(cli, &project, &session.selection, *yes)
        }

        Commands::Status => {
            let session = SelectionSession::open(&project)?;
            commands::status::execute(cli, &project, &session.selection)
        }

        Commands::Export { path } => {
            let session = SelectionSession::open(&project)?;
            commands::exchange::export(cli, &session.selection, path)
        }

        Commands::Import { path } => {
            let mut session = SelectionSession::open(&project)?;
            commands::exchange::import(cli, &mut session, path)
        }

        Commands::Suggest { apply } => commands::suggest::execute(cli, &project, *apply),
    }?;

    trace_time!(start, "command_done");
    Ok(())
}

fn handle_no_command() -> Result<()> {
    println!("rulekit - curate coding rules for assistant instruction files");
    println!();
    println!("Run `rulekit --help` for usage information.");
    Ok(())
}
