//! `rulekit list` command - print the rule tree

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, print_records_header};
use rulekit_core::catalog::Catalog;
use rulekit_core::error::Result;
use rulekit_core::records::{escape_quotes, rule_line};
use rulekit_core::selection::Selection;
use rulekit_core::tree::{build_tree, SectionKind, SectionNode, TreeNode};

/// Execute the list command
pub fn execute(cli: &Cli, selection: &Selection, catalog: &Catalog) -> Result<()> {
    let tree = build_tree(selection, catalog);

    match cli.format {
        OutputFormat::Json => print_json(&tree)?,
        OutputFormat::Human => {
            for section in &tree {
                print_section_human(section, 0);
            }
        }
        OutputFormat::Records => {
            print_records_header(
                "list",
                &[("active", selection.active_rules().len().to_string())],
            );
            for section in &tree {
                print_section_records(section, None);
            }
        }
    }

    Ok(())
}

fn print_section_human(section: &SectionNode, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}{}", indent, section.display_label());

    // Numbered so `toggle` can take an index
    let mut index = 0;
    for child in &section.children {
        match child {
            TreeNode::Section(inner) => print_section_human(inner, depth + 1),
            TreeNode::Rule(rule) => {
                let marker = match rule.checked {
                    Some(true) => "[x] ",
                    Some(false) => "[ ] ",
                    None => "",
                };
                index += 1;
                if rule.checked.is_some() || rule.group.is_some() {
                    println!("{}  {:>2}. {}{}", indent, index, marker, rule.text);
                } else {
                    println!("{}  - {}", indent, rule.text);
                }
            }
            TreeNode::Button(button) => {
                println!(
                    "{}  > {} ({})",
                    indent,
                    button.action.label(),
                    button.action.command()
                );
            }
        }
    }
}

fn print_section_records(section: &SectionNode, parent: Option<SectionKind>) {
    let mut line = format!(
        "S {} label=\"{}\"",
        section.kind.as_str(),
        escape_quotes(&section.label)
    );
    if let Some(count) = section.active_count {
        line.push_str(&format!(" active={}", count));
    }
    if let Some(parent) = parent {
        line.push_str(&format!(" parent={}", parent.as_str()));
    }
    println!("{}", line);

    for child in &section.children {
        match child {
            TreeNode::Section(inner) => print_section_records(inner, Some(section.kind)),
            TreeNode::Rule(rule) => {
                let mut extra = Vec::new();
                if let Some(checked) = rule.checked {
                    extra.push(("checked", checked.to_string()));
                }
                if let Some(group) = &rule.group {
                    extra.push(("group", format!("\"{}\"", escape_quotes(group))));
                }
                println!("{}", rule_line(rule.kind.as_str(), &rule.text, &extra));
            }
            TreeNode::Button(button) => {
                println!(
                    "D action {} command=\"{}\"",
                    button.action.as_str(),
                    button.action.command()
                );
            }
        }
    }
}
