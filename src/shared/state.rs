//! Session state owned by the window
//!
//! Everything the shell needs between user actions lives here and is passed
//! explicitly to the code that uses it.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::config::{self, AppConfig, Credential};
use crate::shared::StatusMessage;

/// Per-window session context
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Persisted configuration
    pub config: AppConfig,
    /// Where the configuration is read from and written to
    pub config_path: PathBuf,
    /// Credential used for OCR calls
    pub credential: Option<Credential>,
    /// Whether the image preview is shown
    pub preview_visible: bool,
    /// Current status label
    pub status: StatusMessage,
}

impl SessionState {
    /// Create a session from a loaded configuration
    pub fn new(config: AppConfig, config_path: PathBuf) -> Self {
        let credential = config.credential();
        Self {
            config,
            config_path,
            credential,
            preview_visible: true,
            status: StatusMessage::Ready,
        }
    }

    /// Load the configuration at `config_path`, tolerating a missing or broken file
    pub fn load(config_path: PathBuf) -> Self {
        let config = config::load_or_default(&config_path);
        Self::new(config, config_path)
    }

    pub fn toggle_preview(&mut self) {
        self.preview_visible = !self.preview_visible;
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = status;
    }

    /// Adopt a newly entered API key and persist it.
    ///
    /// The key is used for this session even when writing the file fails;
    /// the write error is returned for the caller to report.
    pub fn update_api_key(&mut self, raw: &str) -> Result<()> {
        self.config = AppConfig::with_api_key(raw);
        self.credential = self.config.credential();

        config::save_config(&self.config, &self.config_path)?;
        info!("Configuration saved to {:?}", self.config_path);
        Ok(())
    }
}
