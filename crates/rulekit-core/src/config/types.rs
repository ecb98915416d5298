//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default instructions file location, relative to the project root
pub const DEFAULT_INSTRUCTIONS_FILE: &str = ".github/copilot-instructions.md";

/// Project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulekitConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Instructions file, relative to the project root unless absolute
    #[serde(default = "default_instructions_file")]
    pub instructions_file: PathBuf,

    /// Legacy JSON sidecar (optional; defaults to the user config dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_file: Option<PathBuf>,

    /// Ask before overwriting an existing instructions file
    #[serde(default = "default_confirm_overwrite")]
    pub confirm_overwrite: bool,

    /// Extra or replacement template groups
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub templates: BTreeMap<String, Vec<String>>,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_instructions_file() -> PathBuf {
    PathBuf::from(DEFAULT_INSTRUCTIONS_FILE)
}

fn default_confirm_overwrite() -> bool {
    true
}

impl Default for RulekitConfig {
    fn default() -> Self {
        RulekitConfig {
            version: CONFIG_FORMAT_VERSION,
            instructions_file: default_instructions_file(),
            legacy_file: None,
            confirm_overwrite: default_confirm_overwrite(),
            templates: BTreeMap::new(),
        }
    }
}
