//! Key-value selection store
//!
//! Selection state (which rules are ticked, the personal block, the memory
//! flag) lives behind [`SelectionStore`] so that selection logic can run
//! against an in-memory map in tests and a JSON file in the CLI.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, RulekitError};

pub const KEY_SELECTED_DEFAULT: &str = "selected_default_rules";
pub const KEY_PERSONAL: &str = "personal_rules";
pub const KEY_MEMORY_ENABLED: &str = "enable_memory_rules";
pub const KEY_SELECTED_MEMORY: &str = "selected_memory_rules";

/// Persistent key-value state
pub trait SelectionStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

impl dyn SelectionStore + '_ {
    /// Typed read; missing keys and values of the wrong shape give `default`
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.get(key) {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!(key, error = %e, "ignoring malformed state value");
                default
            }),
            None => default,
        }
    }

    /// Typed write
    pub fn update<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        self.set(key, serde_json::to_value(value)?)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a JSON object on disk.
///
/// The file is read once at open and rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl JsonFileStore {
    /// Open a store file; a missing file is an empty store
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let text = fs::read_to_string(path)
                .map_err(|e| RulekitError::io_operation("read", path.display(), e))?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&text)?
            }
        } else {
            BTreeMap::new()
        };
        tracing::debug!(keys = values.len(), "opened selection store");
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                RulekitError::io_operation("create directory", parent.display(), e)
            })?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)
            .map_err(|e| RulekitError::io_operation("write", self.path.display(), e))
    }
}

impl SelectionStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}
