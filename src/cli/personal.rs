//! Personal rule subcommands

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PersonalCommands {
    /// Print the personal rules block
    Show,

    /// Append a rule (skipped if already present)
    Add {
        /// Rule text
        rule: String,
    },

    /// Remove a rule (case-insensitive match)
    Remove {
        /// Rule text
        rule: String,
    },

    /// Replace the whole block. Reads stdin when TEXT is omitted.
    Set {
        /// New block, one rule per line
        text: Option<String>,
    },
}
