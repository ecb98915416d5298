//! `rulekit save` command - merge the active rules into the instructions file
//!
//! Merging is additive: rules already in the file stay, new active rules are
//! appended. Replacing an existing file needs confirmation (`--yes`,
//! `confirm_overwrite = false`, or a `y` answer on stdin). Declining leaves
//! every file untouched.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{print_json_status, print_records_header};
use crate::output_by_format_result;
use rulekit_core::error::{Result, RulekitError};
use rulekit_core::instructions::{reconcile, Reconciliation};
use rulekit_core::project::{Project, SaveReport};
use rulekit_core::records::{path_relative_to_cwd, rule_line};
use rulekit_core::selection::Selection;
use rulekit_core::trace_time;

/// Source of yes/no answers for the overwrite prompt
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Always answers yes
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Asks on stderr, reads one line from stdin. EOF counts as no.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        eprint!("{} [y/N] ", prompt);
        io::stderr()
            .flush()
            .map_err(|e| RulekitError::io_operation("write", "stderr", e))?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| RulekitError::io_operation("read", "stdin", e))?;
        Ok(is_yes(&answer))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// What a save did
pub enum SaveOutcome {
    Written(Reconciliation, SaveReport),
    Declined(Reconciliation),
}

/// Reconcile and write, asking `confirm` before replacing an existing file
pub fn save_rules(
    project: &Project,
    selection: &Selection,
    confirm: &mut dyn Confirm,
) -> Result<SaveOutcome> {
    let start = Instant::now();
    let existing = project.read_instructions()?;
    let reconciliation = reconcile(existing.as_deref(), &selection.active_rules());
    trace_time!(start, "reconcile", merged = reconciliation.merged_rules.len());

    if existing.is_some() {
        let prompt = format!(
            "{} already exists. Merge {} new rule(s) into it?",
            path_relative_to_cwd(&project.instructions_path()),
            reconciliation.new_rules.len()
        );
        if !confirm.confirm(&prompt)? {
            tracing::debug!("overwrite declined");
            return Ok(SaveOutcome::Declined(reconciliation));
        }
    }

    let report = project.write_reconciliation(&reconciliation)?;
    trace_time!(start, "save");
    Ok(SaveOutcome::Written(reconciliation, report))
}

/// Execute the save command
pub fn execute(cli: &Cli, project: &Project, selection: &Selection, yes: bool) -> Result<()> {
    let outcome = if yes || !project.config().confirm_overwrite {
        save_rules(project, selection, &mut AssumeYes)?
    } else {
        save_rules(project, selection, &mut StdinConfirm)?
    };

    match outcome {
        SaveOutcome::Written(result, report) => output_written(cli, &result, &report),
        SaveOutcome::Declined(result) => output_declined(cli, &result),
    }
}

fn output_written(
    cli: &Cli,
    result: &Reconciliation,
    report: &SaveReport,
) -> Result<()> {
    let instructions = path_relative_to_cwd(&report.instructions_path);

    output_by_format_result!(cli.format,
        json => print_json_status(
            "saved",
            None,
            &[
                ("instructions_file", json!(report.instructions_path.display().to_string())),
                ("legacy_file", json!(report.legacy_path.display().to_string())),
                ("merged_rules", json!(result.merged_rules)),
                ("new_rules", json!(result.new_rules)),
                ("duplicate_rules", json!(result.duplicate_rules)),
                ("inactive_rules", json!(result.inactive_rules)),
            ],
        ),
        human => {
            println!(
                "Saved {} rule(s) to {} ({} new, {} already present)",
                result.merged_rules.len(),
                instructions,
                result.new_rules.len(),
                result.duplicate_rules.len()
            );
            if !result.inactive_rules.is_empty() && !cli.quiet {
                println!(
                    "{} rule(s) in the file are not currently selected and were kept",
                    result.inactive_rules.len()
                );
            }
        },
        records => {
            print_records_header(
                "save",
                &[
                    ("status", "saved".to_string()),
                    ("file", format!("\"{}\"", instructions)),
                    ("merged", result.merged_rules.len().to_string()),
                    ("new", result.new_rules.len().to_string()),
                    ("duplicate", result.duplicate_rules.len().to_string()),
                ],
            );
            for rule in &result.merged_rules {
                let state = if result.new_rules.contains(rule) { "new" } else { "kept" };
                println!("{}", rule_line("merged", rule, &[("state", state.to_string())]));
            }
        }
    )
}

fn output_declined(cli: &Cli, result: &Reconciliation) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json_status(
            "declined",
            Some("Instructions file left unchanged"),
            &[("new_rules", json!(result.new_rules))],
        ),
        human => {
            println!("Cancelled; instructions file left unchanged.");
        },
        records => {
            print_records_header("save", &[("status", "declined".to_string())]);
        }
    )
}
