//! Memory rule subcommands

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum MemoryCommands {
    /// Include selected memory rules in the active set
    Enable,

    /// Leave memory rules out of the active set (selection is kept)
    Disable,

    /// Create README.md and STATUS.md in the project root
    Files {
        /// Overwrite files that already exist
        #[arg(long, short)]
        force: bool,
    },
}
