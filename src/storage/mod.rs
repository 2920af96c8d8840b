//! Storage Layer
//!
//! Per-user locations for files the application persists.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "scripta", "Scripta")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Default path of the configuration file.
///
/// Falls back to the working directory when no per-user directory is available.
pub fn default_config_path() -> PathBuf {
    match get_config_dir() {
        Ok(dir) => dir.join(CONFIG_FILE_NAME),
        Err(e) => {
            tracing::warn!("{}; using {} in the working directory", e, CONFIG_FILE_NAME);
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }
}
