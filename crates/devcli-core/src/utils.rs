//! Shared utility functions for dev-cli crates

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Name of the per-user directory holding dev-cli state
pub const CONFIG_DIR_NAME: &str = ".dev-cli-tool";

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that
/// shells and containers overriding HOME are respected. USERPROFILE is
/// consulted on Windows hosts where HOME is usually unset.
pub fn get_home_dir() -> Result<PathBuf> {
    for var in ["HOME", "USERPROFILE"] {
        if let Ok(home) = std::env::var(var) {
            if !home.is_empty() {
                return Ok(PathBuf::from(home));
            }
        }
    }

    dirs::home_dir().ok_or(Error::HomeDirNotFound)
}

/// Get the dev-cli configuration directory (~/.dev-cli-tool)
pub fn get_config_dir() -> Result<PathBuf> {
    Ok(get_home_dir()?.join(CONFIG_DIR_NAME))
}
