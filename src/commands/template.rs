//! `rulekit template` commands - browse groups, copy rules to personal
//!
//! An unknown group is not an error: it lists nothing and adds nothing.

use serde_json::json;

use crate::cli::{Cli, OutputFormat, TemplateCommands};
use crate::commands::format::{print_json, print_json_status, print_records_header};
use crate::commands::helpers::{resolve_rule_ref, SelectionSession};
use crate::output_by_format_result;
use rulekit_core::catalog::TemplateCatalog;
use rulekit_core::error::Result;
use rulekit_core::project::Project;
use rulekit_core::records::{escape_quotes, rule_line};
use rulekit_core::template::resolve_group;

/// Execute a template subcommand
pub fn execute(
    cli: &Cli,
    project: &Project,
    templates: &TemplateCatalog,
    command: &TemplateCommands,
) -> Result<()> {
    match command {
        TemplateCommands::List { group: None } => list_groups(cli, templates),
        TemplateCommands::List { group: Some(group) } => list_rules(cli, templates, group),
        TemplateCommands::Add { group, rule } => {
            let mut session = SelectionSession::open(project)?;
            add(cli, &mut session, templates, group, rule.as_deref())
        }
    }
}

fn list_groups(cli: &Cli, templates: &TemplateCatalog) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let groups: Vec<_> = templates
                .groups()
                .map(|(name, rules)| json!({ "name": name, "rules": rules.len() }))
                .collect();
            print_json(&json!({ "groups": groups }))?;
        }
        OutputFormat::Human => {
            for (name, rules) in templates.groups() {
                println!("{} ({})", name, rules.len());
            }
        }
        OutputFormat::Records => {
            print_records_header("template.list", &[("groups", templates.len().to_string())]);
            for (name, rules) in templates.groups() {
                println!("D group \"{}\" rules={}", escape_quotes(name), rules.len());
            }
        }
    }
    Ok(())
}

fn list_rules(cli: &Cli, templates: &TemplateCatalog, group: &str) -> Result<()> {
    let rules = resolve_group(templates, group);
    let name = templates.canonical_name(group).unwrap_or(group);

    output_by_format_result!(cli.format,
        json => print_json(&json!({ "group": name, "rules": rules })),
        human => {
            if rules.is_empty() {
                if !cli.quiet {
                    println!("No template rules for {}", group);
                }
            } else {
                println!("{}", name);
                for (idx, rule) in rules.iter().enumerate() {
                    println!("  {:>2}. {}", idx + 1, rule);
                }
            }
        },
        records => {
            print_records_header(
                "template.show",
                &[("group", format!("\"{}\"", escape_quotes(name))), ("rules", rules.len().to_string())],
            );
            for rule in &rules {
                println!("{}", rule_line("template", rule, &[]));
            }
        }
    )
}

fn add(
    cli: &Cli,
    session: &mut SelectionSession,
    templates: &TemplateCatalog,
    group: &str,
    rule: Option<&str>,
) -> Result<()> {
    let group_rules = resolve_group(templates, group);
    let picked: Vec<String> = match rule {
        Some(reference) if !group_rules.is_empty() => {
            vec![resolve_rule_ref(&group_rules, reference, "template rule")?.to_string()]
        }
        _ => group_rules,
    };

    let update = session.selection.add_personal_rules(&picked);
    if update.changed() {
        session.save()?;
    }
    tracing::debug!(
        group,
        added = update.added.len(),
        skipped = update.skipped.len(),
        "template add"
    );

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            None,
            &[
                ("group", json!(group)),
                ("added", json!(update.added)),
                ("skipped", json!(update.skipped)),
            ],
        ),
        human => {
            println!(
                "Added {} rule(s) from {} to personal rules",
                update.added.len(),
                group
            );
            if !update.skipped.is_empty() && !cli.quiet {
                println!("Skipped {} already present", update.skipped.len());
            }
        },
        records => {
            print_records_header(
                "template.add",
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
