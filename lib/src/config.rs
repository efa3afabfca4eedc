use crate::import_export::CsvDialect;
use crate::models::{DEFAULT_CATEGORY_ICON, PLACEHOLDER_THUMBNAIL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Thumbnail URL used when a bookmark has none
    #[serde(default = "default_placeholder_thumbnail")]
    pub placeholder_thumbnail: String,

    /// Icon given to categories added at runtime
    #[serde(default = "default_category_icon")]
    pub default_category_icon: String,

    /// CSV grammar for import and export
    #[serde(default)]
    pub csv_dialect: CsvDialect,

    /// Override for the directory holding the persisted store
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder_thumbnail: default_placeholder_thumbnail(),
            default_category_icon: default_category_icon(),
            csv_dialect: CsvDialect::default(),
            data_dir: None,
        }
    }
}

fn default_placeholder_thumbnail() -> String {
    PLACEHOLDER_THUMBNAIL.to_string()
}

fn default_category_icon() -> String {
    DEFAULT_CATEGORY_ICON.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> crate::error::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/linkshelf/config.yml)
    /// Falls back to default config if file doesn't exist
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "Failed to load config from {:?}: {}; using default configuration",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Directory for the persisted store, honouring `data_dir`
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(crate::utils::get_default_data_dir)
    }
}
