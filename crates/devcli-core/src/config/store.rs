//! Loading and saving `~/.dev-cli-tool/config.json`
//!
//! The file is the only state that survives across runs. A missing file is
//! the same as an empty config; a corrupt one is logged and treated as empty
//! so a bad edit never blocks the tool.

use crate::error::Result;
use crate::utils::get_config_dir;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Configuration file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Saved user defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Project type preselected by `new`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_project_type: Option<String>,

    /// GitHub token offered by `create-repo`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Keys this version does not know about, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserConfig {
    /// Saved auth token, ignoring blank values
    pub fn token(&self) -> Option<&str> {
        self.auth_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Token suitable for display: the first four characters followed by `****`
    pub fn masked_token(&self) -> Option<String> {
        self.token().map(|t| {
            let prefix: String = t.chars().take(4).collect();
            format!("{}****", prefix)
        })
    }
}

/// Reads and writes the user config at a fixed path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the default location under the user's home directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: get_config_dir()?.join(CONFIG_FILE_NAME),
        })
    }

    /// Store backed by an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, falling back to defaults when absent or unreadable
    pub fn load(&self) -> UserConfig {
        if !self.path.exists() {
            debug!("No config at {}, using defaults", self.path.display());
            return UserConfig::default();
        }

        match self.try_load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Error loading configuration: {}", e);
                UserConfig::default()
            }
        }
    }

    fn try_load(&self) -> Result<UserConfig> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the config, creating the directory on first save
    pub fn save(&self, config: &UserConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut json = serde_json::to_string_pretty(config)?;
        json.push('\n');
        fs::write(&self.path, json)?;

        info!("Configuration saved to {}", self.path.display());
        Ok(())
    }
}
