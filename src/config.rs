use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::favorites::FAVORITES_KEY;

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file with the recipe catalogue; the built-in catalogue when unset
    #[serde(default)]
    pub recipes_path: Option<PathBuf>,
    /// File backing the favorites key-value store
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    /// Key the favorites are stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Quiet period before search input is applied, in milliseconds
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipes_path: None,
            storage_path: default_storage_path(),
            storage_key: default_storage_key(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

// Default value functions
fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("recipe-finder")
        .join("storage.json")
}

fn default_storage_key() -> String {
    FAVORITES_KEY.to_string()
}

fn default_search_debounce_ms() -> u64 {
    300
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__SEARCH_DEBOUNCE_MS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-finder").required(false))
        // Environment variables, e.g. RECIPE_FINDER__STORAGE_KEY
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
