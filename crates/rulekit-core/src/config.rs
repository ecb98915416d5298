//! Project configuration for rulekit
//!
//! Configuration is stored in `.rulekit/config.toml`. Every field has a
//! default, so a missing file behaves like an empty one.

pub mod types;

use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{Result, RulekitError};

pub use types::{RulekitConfig, CONFIG_FORMAT_VERSION, DEFAULT_INSTRUCTIONS_FILE};

impl RulekitConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RulekitConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer rulekit"
            );
        }

        Ok(config)
    }

    /// Load if present, otherwise defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| RulekitError::io_operation("create directory", parent.display(), e))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Built-in catalog with this config's template groups overlaid
    pub fn catalog(&self) -> Catalog {
        Catalog::with_templates(&self.templates)
    }
}
