//! CLI argument parsing for rulekit
//!
//! Global flags: --root, --format, --quiet, --verbose, --log-level,
//! --log-json, --legacy-file

pub mod format;
pub mod memory;
pub mod parse;
pub mod personal;
pub mod template;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use memory::MemoryCommands;
pub use parse::ToggleList;
pub use personal::PersonalCommands;
pub use rulekit_core::format::OutputFormat;
pub use template::TemplateCommands;
use parse::{parse_output_format, parse_toggle_list};

/// Rulekit - curate coding rules for assistant instruction files
#[derive(Parser, Debug)]
#[command(name = "rulekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(long, global = true, env = "RULEKIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, rulekit_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Legacy JSON sidecar path (overrides config)
    #[arg(long, global = true)]
    pub legacy_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .rulekit/config.toml
    Init,

    /// Show the rule tree with selection state
    List,

    /// Print the active rule set
    Active,

    /// Select or deselect a default or memory rule
    Toggle {
        /// Which list the rule belongs to: default or memory
        #[arg(value_parser = parse_toggle_list)]
        list: ToggleList,

        /// 1-based index in the list, or the exact rule text
        rule: String,
    },

    /// Manage memory rules
    Memory {
        #[command(subcommand)]
        command: MemoryCommands,
    },

    /// Manage personal rules
    Personal {
        #[command(subcommand)]
        command: PersonalCommands,
    },

    /// Browse template groups and copy their rules into personal rules
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },

    /// Merge the active rules into the instructions file
    Save {
        /// Overwrite the existing instructions file without asking
        #[arg(long, short)]
        yes: bool,
    },

    /// Show the rules currently in the instructions file and sidecar
    Status,

    /// Export the selected rules to a JSON file
    Export {
        /// Output file
        path: PathBuf,
    },

    /// Import personal rules from an exported JSON file
    Import {
        /// Input file
        path: PathBuf,
    },

    /// Suggest rules from a scan of the project's source files
    Suggest {
        /// Add the suggestions to personal rules
        #[arg(long)]
        apply: bool,
    },
}
