//! Credentials file loading

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings as settings_config;
use crate::error::{Result, TfwsError};

/// API credentials read from the settings file
#[derive(Deserialize, Clone)]
pub struct Credentials {
    #[serde(rename = "API_TOKEN")]
    pub token: String,
    #[serde(rename = "API_BASE_URL")]
    pub base_url: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Credentials {
    /// Load credentials from the given path, or from the default location
    /// (`<config dir>/tfws/config.json`) when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path().ok_or_else(|| {
                TfwsError::Config(
                    "Could not determine the user config directory; pass --config".to_string(),
                )
            })?,
        };
        Self::load_from(&path)
    }

    /// Load and validate credentials from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading credentials from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            TfwsError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let creds: Credentials = serde_json::from_str(&content).map_err(|e| {
            TfwsError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        creds.validate(path)?;
        Ok(creds)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(TfwsError::Config(format!(
                "API_TOKEN is empty in {}",
                path.display()
            )));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(TfwsError::Config(format!(
                "API_BASE_URL in {} must start with http:// or https:// (got '{}')",
                path.display(),
                self.base_url
            )));
        }
        Ok(())
    }

    /// Default settings file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| {
            p.join(settings_config::DIR_NAME)
                .join(settings_config::FILE_NAME)
        })
    }
}
