//! Configuration management
//!
//! Settings live in `~/.streamorder/config.toml` unless another file is
//! given explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::adapters::{JsonFileStore, KvOrderStore};
use crate::core::models::StreamId;
use crate::core::services::{SortDirection, SortMode};
use crate::paths;

/// Failure loading or saving a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("cannot access config {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// The config could not be encoded
    #[error("cannot encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// streamorder configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where persisted state lives
    #[serde(default)]
    pub storage: StorageConfig,
    /// Sorting defaults
    #[serde(default)]
    pub order: OrderConfig,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key-value store file; defaults to `~/.streamorder/state.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Sorting settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Stream ids always dropped from the stored manual order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_ids: Vec<StreamId>,
    /// Default sort mode
    #[serde(default)]
    pub mode: SortMode,
    /// Default direction for the `last_updated` mode
    #[serde(default)]
    pub direction: SortDirection,
}

impl Config {
    /// Load the global config, or defaults if it is missing or invalid
    #[must_use]
    pub fn load() -> Self {
        let path = paths::global_config();
        Self::load_from(&path).unwrap_or_else(|err| {
            log::warn!("{err}; using defaults");
            Self::default()
        })
    }

    /// Load a config file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io)
    }

    /// Effective key-value store path
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.storage.path.clone().unwrap_or_else(paths::default_state_file)
    }

    /// Order store configured from this config
    #[must_use]
    pub fn order_store(&self) -> KvOrderStore<JsonFileStore> {
        KvOrderStore::new(JsonFileStore::new(self.state_path()))
            .with_excluded(self.order.excluded_ids.iter().copied())
    }
}
