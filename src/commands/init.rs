//! `rulekit init` command - write the default project config
//!
//! Idempotent: an existing config file is left as is.

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{print_json_status, print_records_header};
use crate::output_by_format_result;
use rulekit_core::error::Result;
use rulekit_core::project::Project;
use rulekit_core::records::path_relative_to_cwd;

/// Execute the init command
pub fn execute(cli: &Cli, project: &Project) -> Result<()> {
    let created = project.init()?;
    let config_path = project.config_path();
    let status = if created { "created" } else { "exists" };
    tracing::debug!(path = %config_path.display(), status, "init");

    output_by_format_result!(cli.format,
        json => print_json_status(
            status,
            None,
            &[
                ("config", json!(config_path.display().to_string())),
                ("instructions_file", json!(project.instructions_path().display().to_string())),
            ],
        ),
        human => {
            if created {
                println!("Wrote {}", path_relative_to_cwd(&config_path));
            } else if !cli.quiet {
                println!("Config already exists at {}", path_relative_to_cwd(&config_path));
            }
            if !cli.quiet {
                println!();
                println!("Run `rulekit list` to pick rules, then `rulekit save`.");
            }
        },
        records => {
            print_records_header(
                "init",
                &[
                    ("status", status.to_string()),
                    ("config", path_relative_to_cwd(&config_path)),
                ],
            );
        }
    )
}
