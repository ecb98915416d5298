//! `rulekit export` / `rulekit import` commands

use std::path::Path;

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{print_json_status, print_records_header};
use crate::commands::helpers::SelectionSession;
use crate::output_by_format_result;
use rulekit_core::error::Result;
use rulekit_core::exchange::{export_entries, import_into, write_export};
use rulekit_core::records::{path_relative_to_cwd, rule_line};
use rulekit_core::selection::Selection;

/// Execute the export command. Nothing selected means no file is written.
pub fn export(cli: &Cli, selection: &Selection, path: &Path) -> Result<()> {
    let entries = export_entries(selection);
    if entries.is_empty() {
        tracing::warn!("no rules selected, nothing to export");
        return output_by_format_result!(cli.format,
            json => print_json_status("empty", Some("No rules selected to export"), &[]),
            human => {
                if !cli.quiet {
                    println!("No rules selected to export.");
                }
            },
            records => {
                print_records_header("export", &[("status", "empty".to_string())]);
            }
        );
    }

    let written = write_export(path, &entries)?;
    let shown = path_relative_to_cwd(path);

    output_by_format_result!(cli.format,
        json => print_json_status(
            "exported",
            None,
            &[("path", json!(path.display().to_string())), ("rules", json!(written))],
        ),
        human => {
            println!("Exported {} rule(s) to {}", written, shown);
        },
        records => {
            print_records_header(
                "export",
                &[("status", "exported".to_string()), ("rules", written.to_string())],
            );
            for entry in &entries {
                println!("{}", rule_line(entry.kind.as_str(), &entry.rule, &[]));
            }
        }
    )
}

/// Execute the import command
pub fn import(cli: &Cli, session: &mut SelectionSession, path: &Path) -> Result<()> {
    let update = import_into(&mut session.selection, path)?;
    if update.changed() {
        session.save()?;
    }

    output_by_format_result!(cli.format,
        json => print_json_status(
            "imported",
            None,
            &[("added", json!(update.added)), ("skipped", json!(update.skipped))],
        ),
        human => {
            println!(
                "Imported {} personal rule(s) ({} already present)",
                update.added.len(),
                update.skipped.len()
            );
        },
        records => {
            print_records_header(
                "import",
                &[
                    ("added", update.added.len().to_string()),
                    ("skipped", update.skipped.len().to_string()),
                ],
            );
            for rule in &update.added {
                println!("{}", rule_line("personal", rule, &[]));
            }
        }
    )
}
