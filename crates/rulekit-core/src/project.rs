//! Project layout and file writes
//!
//! A project is the directory rulekit works in. State and config live in
//! `<root>/.rulekit/`; the instructions file lives wherever the config
//! points, relative to the root by default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::RulekitConfig;
use crate::error::{Result, RulekitError};
use crate::instructions::Reconciliation;
use crate::legacy;
use crate::store::JsonFileStore;

pub const PROJECT_DIR: &str = ".rulekit";
pub const CONFIG_FILE: &str = "config.toml";
pub const STATE_FILE: &str = "state.json";

#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: RulekitConfig,
    legacy_override: Option<PathBuf>,
}

/// Where a save wrote to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    pub instructions_path: PathBuf,
    pub legacy_path: PathBuf,
    /// The instructions file existed before this save
    pub replaced_existing: bool,
}

impl Project {
    /// Open the project at `root`, loading `.rulekit/config.toml` if present
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(RulekitError::MissingWorkspace {
                path: root.to_path_buf(),
            });
        }
        let config = RulekitConfig::load_or_default(&root.join(PROJECT_DIR).join(CONFIG_FILE))?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
            legacy_override: None,
        })
    }

    /// Use an explicit sidecar path instead of the configured one
    pub fn with_legacy_file(mut self, path: Option<PathBuf>) -> Self {
        self.legacy_override = path;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &RulekitConfig {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(PROJECT_DIR).join(CONFIG_FILE)
    }

    pub fn state_path(&self) -> PathBuf {
        self.root.join(PROJECT_DIR).join(STATE_FILE)
    }

    pub fn open_store(&self) -> Result<JsonFileStore> {
        JsonFileStore::open(&self.state_path())
    }

    pub fn instructions_path(&self) -> PathBuf {
        resolve(&self.root, &self.config.instructions_file)
    }

    /// Sidecar path: override, then config, then the user config dir
    pub fn legacy_path(&self) -> Result<PathBuf> {
        if let Some(path) = self.legacy_override.as_ref().or(self.config.legacy_file.as_ref()) {
            return Ok(resolve(&self.root, path));
        }
        legacy::default_legacy_path()
            .ok_or_else(|| RulekitError::Other("cannot determine user config directory".into()))
    }

    /// Write the default config file if none exists; returns whether it wrote
    pub fn init(&self) -> Result<bool> {
        let path = self.config_path();
        if path.exists() {
            return Ok(false);
        }
        self.config.save(&path)?;
        Ok(true)
    }

    /// Current instructions document, if the file exists
    pub fn read_instructions(&self) -> Result<Option<String>> {
        let path = self.instructions_path();
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| RulekitError::io_operation("read", path.display(), e))
    }

    /// Write the reconciled document, then mirror the merged rules to the
    /// legacy sidecar. Last writer wins; nothing is merged on disk.
    #[tracing::instrument(skip(self, reconciliation), fields(rules = reconciliation.merged_rules.len()))]
    pub fn write_reconciliation(&self, reconciliation: &Reconciliation) -> Result<SaveReport> {
        let instructions_path = self.instructions_path();
        let legacy_path = self.legacy_path()?;
        let replaced_existing = instructions_path.exists();

        if let Some(parent) = instructions_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| RulekitError::io_operation("create directory", parent.display(), e))?;
        }
        fs::write(&instructions_path, &reconciliation.document_text)
            .map_err(|e| RulekitError::io_operation("write", instructions_path.display(), e))?;
        tracing::debug!(path = %instructions_path.display(), "wrote instructions");

        legacy::write_legacy(&legacy_path, &reconciliation.merged_rules)?;

        Ok(SaveReport {
            instructions_path,
            legacy_path,
            replaced_existing,
        })
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
