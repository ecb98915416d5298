//! `rulekit active` command - print the Active Rule Set

use std::time::Instant;

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;
use rulekit_core::error::Result;
use rulekit_core::records::rule_line;
use rulekit_core::selection::Selection;
use rulekit_core::trace_time;

/// Execute the active command
pub fn execute(cli: &Cli, selection: &Selection) -> Result<()> {
    let start = Instant::now();
    let rules = selection.active_rules();
    trace_time!(start, "aggregate", count = rules.len());

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "memory_enabled": selection.memory_enabled,
            "rules": rules,
        })),
        human => {
            if rules.is_empty() {
                if !cli.quiet {
                    println!("No active rules. Select some with `rulekit toggle` or `rulekit personal add`.");
                }
            } else {
                for rule in &rules {
                    println!("- {}", rule);
                }
            }
        },
        records => {
            print_records_header("active", &[("count", rules.len().to_string())]);
            for rule in &rules {
                println!("{}", rule_line("active", rule, &[]));
            }
        }
    )
}
