//! Storage configuration
//!
//! Read from the `[storage]` section of the player config file, overridden by
//! `MELODY__STORAGE__*` environment variables.

use crate::error::Result;
use crate::favorites::{KvFavoritesStore, FAVORITES_KEY};
use crate::file::FileStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file used when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "melody.toml";

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON file per key
    pub directory: PathBuf,

    /// Key the favorites array is stored under
    pub favorites_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./data"),
            favorites_key: FAVORITES_KEY.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    storage: StorageConfig,
}

impl StorageConfig {
    /// Load from an optional config file and the environment
    ///
    /// Precedence (highest wins):
    /// 1) Environment variables (`MELODY__STORAGE__DIRECTORY`, ...)
    /// 2) Config file (`path`, or `melody.toml` in the working directory)
    /// 3) Struct defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(
                ::config::Environment::with_prefix("MELODY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let file: ConfigFile = settings.try_deserialize()?;
        Ok(file.storage)
    }

    /// Open the file-backed favorites store described by this config
    pub fn open_favorites(&self) -> Result<KvFavoritesStore<FileStore>> {
        let store = FileStore::open(&self.directory)?;
        Ok(KvFavoritesStore::with_key(store, self.favorites_key.clone()))
    }
}
