//! `rulekit toggle` command - flip a default or memory rule

use serde_json::json;

use crate::cli::{Cli, ToggleList};
use crate::commands::format::{print_json_status, print_records_header};
use crate::commands::helpers::{resolve_rule_ref, SelectionSession};
use crate::output_by_format_result;
use rulekit_core::catalog::Catalog;
use rulekit_core::error::Result;
use rulekit_core::records::rule_line;

/// Execute the toggle command
pub fn execute(
    cli: &Cli,
    session: &mut SelectionSession,
    catalog: &Catalog,
    list: ToggleList,
    reference: &str,
) -> Result<()> {
    let kind = list.kind();
    let (rules, context) = match list {
        ToggleList::Default => (&catalog.default_rules, "default rule"),
        ToggleList::Memory => (&catalog.memory_rules, "memory rule"),
    };
    let rule = resolve_rule_ref(rules, reference, context)?.to_string();

    let selected = match list {
        ToggleList::Default => session.selection.toggle_default(&rule),
        ToggleList::Memory => session.selection.toggle_memory(&rule),
    };
    session.save()?;
    tracing::debug!(kind = %kind, selected, "toggle");

    let memory_inactive = list == ToggleList::Memory && !session.selection.memory_enabled;
    let active_count = session.selection.active_rules().len();

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            None,
            &[
                ("type", json!(kind)),
                ("rule", json!(rule)),
                ("selected", json!(selected)),
                ("active", json!(active_count)),
            ],
        ),
        human => {
            let verb = if selected { "Selected" } else { "Deselected" };
            println!("{} {} rule: {}", verb, kind, rule);
            if memory_inactive && !cli.quiet {
                println!("Memory rules are disabled; run `rulekit memory enable` to include them.");
            }
        },
        records => {
            print_records_header(
                "toggle",
                &[("active", active_count.to_string())],
            );
            println!(
                "{}",
                rule_line(kind.as_str(), &rule, &[("selected", selected.to_string())])
            );
        }
    )
}
