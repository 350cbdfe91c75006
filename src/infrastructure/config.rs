// src/infrastructure/config.rs
//
// Movie service configuration
//
// RULES:
// - Layering is defaults -> JSON file -> explicit overrides
// - A missing default file is not an error, a missing explicit file is
// - The client never reads configuration on its own, it is handed one

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_API_KEY: &str = "9a5f0b82";

const CONFIG_DIR_NAME: &str = "movie-explorer";
const CONFIG_FILE_NAME: &str = "config.json";

/// Endpoint and credentials of the movie service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl OmdbConfig {
    /// `<platform config dir>/movie-explorer/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a config file; fields it omits keep their defaults
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path)?;
        let config: OmdbConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and skipped when absent.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.is_file() => {
                    log::debug!("Loading configuration from {}", default.display());
                    Self::from_file(&default)?
                }
                _ => Self::default(),
            },
        };
        Ok(config)
    }

    /// Apply overrides coming from the command line or environment
    pub fn with_overrides(mut self, api_key: Option<String>, base_url: Option<String>) -> Self {
        if let Some(api_key) = api_key {
            self.api_key = api_key;
        }
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Config("API key cannot be empty".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(AppError::Config("Base URL cannot be empty".to_string()));
        }
        Ok(())
    }
}
