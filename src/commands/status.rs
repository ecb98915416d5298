//! `rulekit status` command - compare the saved files with the selection

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;
use rulekit_core::error::Result;
use rulekit_core::instructions::extract_rules;
use rulekit_core::legacy::read_legacy;
use rulekit_core::project::Project;
use rulekit_core::records::{path_relative_to_cwd, rule_line};
use rulekit_core::rule::contains_rule;
use rulekit_core::selection::Selection;

/// Execute the status command
pub fn execute(cli: &Cli, project: &Project, selection: &Selection) -> Result<()> {
    let instructions_path = project.instructions_path();
    let legacy_path = project.legacy_path()?;

    let saved = project.read_instructions()?.map(|text| extract_rules(&text));
    let legacy = read_legacy(&legacy_path)?;
    let active = selection.active_rules();

    let saved_rules = saved.as_deref().unwrap_or_default();
    let unsaved: Vec<&String> = active
        .iter()
        .filter(|rule| !contains_rule(saved_rules, rule))
        .collect();

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "instructions_file": instructions_path.display().to_string(),
            "instructions_exists": saved.is_some(),
            "saved_rules": saved_rules,
            "legacy_file": legacy_path.display().to_string(),
            "legacy": legacy.as_ref().map(|l| json!({
                "active": l.active,
                "inactive": l.inactive,
            })),
            "active_rules": active,
            "unsaved_rules": unsaved,
        })),
        human => {
            let shown = path_relative_to_cwd(&instructions_path);
            match &saved {
                Some(rules) => println!("{}: {} rule(s)", shown, rules.len()),
                None => println!("{}: not written yet", shown),
            }
            match &legacy {
                Some(l) => println!(
                    "{}: {} active, {} inactive",
                    path_relative_to_cwd(&legacy_path),
                    l.active.len(),
                    l.inactive.len()
                ),
                None => println!("{}: not written yet", path_relative_to_cwd(&legacy_path)),
            }
            println!("Active selection: {} rule(s)", active.len());
            if !unsaved.is_empty() {
                println!("Not yet saved:");
                for rule in &unsaved {
                    println!("  + {}", rule);
                }
            }
        },
        records => {
            print_records_header(
                "status",
                &[
                    ("saved", saved_rules.len().to_string()),
                    ("active", active.len().to_string()),
                    ("unsaved", unsaved.len().to_string()),
                ],
            );
            for rule in saved_rules {
                println!("{}", rule_line("saved", rule, &[]));
            }
            for rule in &unsaved {
                println!("{}", rule_line("unsaved", rule, &[]));
            }
        }
    )
}
