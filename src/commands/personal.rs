//! `rulekit personal` commands - edit the personal rules block

use serde_json::json;

use crate::cli::{Cli, PersonalCommands};
use crate::commands::format::{print_json, print_json_status, print_records_header};
use crate::commands::helpers::{read_stdin, SelectionSession};
use crate::output_by_format_result;
use rulekit_core::error::{Result, RulekitError};
use rulekit_core::records::rule_line;

/// Execute a personal subcommand
pub fn execute(cli: &Cli, session: &mut SelectionSession, command: &PersonalCommands) -> Result<()> {
    match command {
        PersonalCommands::Show => show(cli, session),
        PersonalCommands::Add { rule } => add(cli, session, rule),
        PersonalCommands::Remove { rule } => remove(cli, session, rule),
        PersonalCommands::Set { text } => {
            let text = match text {
                Some(text) => text.clone(),
                None => read_stdin()?,
            };
            set(cli, session, &text)
        }
    }
}

fn show(cli: &Cli, session: &SelectionSession) -> Result<()> {
    let rules = session.selection.personal_rules();

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "text": session.selection.personal_text,
            "rules": rules,
        })),
        human => {
            if rules.is_empty() {
                if !cli.quiet {
                    println!("No personal rules saved.");
                }
            } else {
                for rule in &rules {
                    println!("{}", rule);
                }
            }
        },
        records => {
            print_records_header("personal", &[("count", rules.len().to_string())]);
            for rule in &rules {
                println!("{}", rule_line("personal", rule, &[]));
            }
        }
    )
}

fn add(cli: &Cli, session: &mut SelectionSession, rule: &str) -> Result<()> {
    if rule.trim().is_empty() {
        return Err(RulekitError::invalid_value("rule", "(empty)"));
    }
    let update = session.selection.add_personal_rules(&[rule]);
    if update.changed() {
        session.save()?;
    }
    let status = if update.changed() { "added" } else { "exists" };

    output_by_format_result!(cli.format,
        json => print_json_status(status, None, &[("rule", json!(rule.trim()))]),
        human => {
            if update.changed() {
                println!("Added personal rule: {}", rule.trim());
            } else {
                println!("Already present: {}", rule.trim());
            }
        },
        records => {
            print_records_header("personal.add", &[("status", status.to_string())]);
            println!("{}", rule_line("personal", rule.trim(), &[]));
        }
    )
}

fn remove(cli: &Cli, session: &mut SelectionSession, rule: &str) -> Result<()> {
    if !session.selection.remove_personal_rule(rule) {
        return Err(RulekitError::not_found("personal rule", rule));
    }
    session.save()?;

    output_by_format_result!(cli.format,
        json => print_json_status("removed", None, &[("rule", json!(rule))]),
        human => {
            println!("Removed personal rule: {}", rule);
        },
        records => {
            print_records_header("personal.remove", &[("status", "removed".to_string())]);
            println!("{}", rule_line("personal", rule, &[]));
        }
    )
}

fn set(cli: &Cli, session: &mut SelectionSession, text: &str) -> Result<()> {
    session.selection.set_personal_text(text);
    session.save()?;
    let count = session.selection.personal_rules().len();

    output_by_format_result!(cli.format,
        json => print_json_status("ok", None, &[("rules", json!(count))]),
        human => {
            println!("Saved {} personal rule(s)", count);
        },
        records => {
            print_records_header("personal.set", &[("count", count.to_string())]);
        }
    )
}
