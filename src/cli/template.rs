//! Template subcommands

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List template groups, or the rules of one group
    List {
        /// Group name (case-insensitive)
        group: Option<String>,
    },

    /// Copy a group's rules (or one of them) into personal rules
    Add {
        /// Group name (case-insensitive)
        group: String,

        /// Only this rule: 1-based index in the group, or exact text
        #[arg(long, short)]
        rule: Option<String>,
    },
}
