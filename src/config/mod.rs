//! Application Configuration
//!
//! The API key for the OCR service, stored as a small JSON file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// File name of the configuration inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Persisted application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the OCR service
    #[serde(default)]
    pub api_key: Option<String>,
}

impl AppConfig {
    /// Build a config holding the given key (trimmed)
    pub fn with_api_key(api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.trim().to_string()),
        }
    }

    /// The stored key as a usable credential, if one is set
    pub fn credential(&self) -> Option<Credential> {
        self.api_key.as_deref().and_then(Credential::new)
    }
}

/// Opaque secret used to authenticate against the OCR service
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for blank input
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Load configuration, falling back to defaults when the file is missing or unreadable
pub fn load_or_default(path: &Path) -> AppConfig {
    if !path.exists() {
        debug!("No configuration at {:?}, starting without API key", path);
        return AppConfig::default();
    }

    match load_config(path) {
        Ok(config) => {
            debug!("Loaded configuration from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Ignoring configuration: {:#}", e);
            AppConfig::default()
        }
    }
}

/// Save configuration to file, replacing its previous contents
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
