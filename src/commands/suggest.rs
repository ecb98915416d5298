//! `rulekit suggest` command - rule suggestions from the project's sources

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::commands::helpers::SelectionSession;
use crate::output_by_format_result;
use rulekit_core::error::Result;
use rulekit_core::project::Project;
use rulekit_core::records::escape_quotes;
use rulekit_core::suggest::suggest_rules;

/// Execute the suggest command
pub fn execute(cli: &Cli, project: &Project, apply: bool) -> Result<()> {
    let suggestions = suggest_rules(project.root());

    let added = if apply && !suggestions.is_empty() {
        let mut session = SelectionSession::open(project)?;
        let rules: Vec<&str> = suggestions.iter().map(|s| s.rule.as_str()).collect();
        let update = session.selection.add_personal_rules(&rules);
        if update.changed() {
            session.save()?;
        }
        update.added
    } else {
        Vec::new()
    };

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "suggestions": suggestions,
            "applied": apply,
            "added": added,
        })),
        human => {
            if suggestions.is_empty() {
                if !cli.quiet {
                    println!("No suggestions for this project.");
                }
            } else {
                for suggestion in &suggestions {
                    println!("{} (from {})", suggestion.rule, suggestion.evidence);
                }
                if apply {
                    println!("Added {} rule(s) to personal rules", added.len());
                } else if !cli.quiet {
                    println!();
                    println!("Run `rulekit suggest --apply` to add them to personal rules.");
                }
            }
        },
        records => {
            print_records_header(
                "suggest",
                &[("count", suggestions.len().to_string()), ("added", added.len().to_string())],
            );
            for suggestion in &suggestions {
                println!(
                    "D suggestion \"{}\" evidence=\"{}\"",
                    escape_quotes(&suggestion.rule),
                    escape_quotes(&suggestion.evidence)
                );
            }
        }
    )
}
