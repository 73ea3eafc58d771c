//! Store configuration
//!
//! Read from a JSON file:
//!
//! ```json
//! { "data_dir": "/var/lib/stockbook", "slot_key": "products" }
//! ```
//!
//! `slot_key` is optional and defaults to `"products"`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::ClockIds;
use crate::observability::{log_event, Event};
use crate::slot::{validate_key, FileSlot};
use crate::store::{InventoryStore, DEFAULT_SLOT_KEY};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory that holds the slot files (required)
    pub data_dir: PathBuf,

    /// Slot key the collection is stored under
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl StoreConfig {
    /// Configuration with the default slot key
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            slot_key: default_slot_key(),
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_json(&content)?;

        let data_dir = config.data_dir.display().to_string();
        log_event(
            Event::ConfigLoaded,
            &[("data_dir", data_dir.as_str()), ("slot_key", config.slot_key.as_str())],
        );
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_dir must not be empty".to_string()));
        }

        validate_key(&self.slot_key).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Build a store over a [`FileSlot`] in `data_dir`, with clock-based ids.
    pub fn open_store(&self) -> InventoryStore<FileSlot, ClockIds> {
        InventoryStore::with_key(
            FileSlot::new(&self.data_dir),
            ClockIds::new(),
            self.slot_key.clone(),
        )
    }
}
