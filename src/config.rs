// Optional user configuration, read from `<config_dir>/theme-store/config.yml`.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{FileStorage, MemoryStorage, PreferenceStorage, StorageError, ThemeStore};
use crate::theme::ThemeName;

const APP_CONFIG_DIR: &str = "theme-store";
const FILE_NAME: &str = "config.yml";
const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config YAML in {path}: {source}")]
    InvalidYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    Memory,
    None,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage: StorageKind,
    pub storage_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage: StorageKind::File,
            storage_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

/// `<config_dir>/theme-store`, if the platform has a config directory
pub fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .map(|dir| dir.join(APP_CONFIG_DIR))
}

pub fn default_log_file() -> Option<PathBuf> {
    app_config_dir().map(|dir| dir.join(LOG_FILE))
}

impl Config {
    /// Load from the default location; a missing file yields the defaults.
    pub fn load() -> Result<Config, ConfigError> {
        match app_config_dir() {
            Some(dir) => Config::load_from(&dir.join(FILE_NAME)),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // An empty file deserializes to unit, not to an empty map.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&content).map_err(|source| ConfigError::InvalidYaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the storage backend this config asks for; `None` means headless.
    pub fn build_storage(&self) -> Result<Option<Box<dyn PreferenceStorage>>, StorageError> {
        let storage: Box<dyn PreferenceStorage> = match self.storage {
            StorageKind::None => return Ok(None),
            StorageKind::Memory => Box::new(MemoryStorage::new()),
            StorageKind::File => match &self.storage_path {
                Some(path) => Box::new(FileStorage::new(path)),
                None => Box::new(FileStorage::at_default_location()?),
            },
        };
        Ok(Some(storage))
    }

    /// Store backed by the configured storage, or a headless one when that
    /// storage cannot be set up.
    pub fn open_store(&self, default: ThemeName) -> ThemeStore {
        store_with_fallback(default, self.build_storage())
    }
}

fn store_with_fallback(
    default: ThemeName,
    storage: Result<Option<Box<dyn PreferenceStorage>>, StorageError>,
) -> ThemeStore {
    match storage {
        Ok(storage) => ThemeStore::new(default, storage),
        Err(e) => {
            log::warn!("Preference storage unavailable, theme will not persist: {e}");
            ThemeStore::new(default, None)
        }
    }
}
