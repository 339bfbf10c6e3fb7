//! Configuration
//!
//! Application configuration for BloodStudio: where the remote compiler
//! service lives and how the editor looks. Loaded from TOML with defaults
//! for everything, so a missing or partial file never blocks startup.

pub mod loader;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use loader::ConfigLoader;

/// Main configuration structure for BloodStudio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote compiler service settings
    pub server: ServerConfig,

    /// UI settings
    pub ui: UiConfig,
}

impl Config {
    /// Validate all sections.
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.ui.validate()
    }
}

/// Remote compiler service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the compile/execute service
    pub base_url: String,

    /// Transport-layer request timeout in seconds. The session protocol
    /// itself imposes no timeout.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 60,
        }
    }
}

impl ServerConfig {
    /// The timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the server settings.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "server.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::ConfigValidationFailed {
                field: "server.base_url".to_string(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "server.timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Editor font size in points
    pub font_size: u32,

    /// Window dimensions
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 14,
            window_width: 1100,
            window_height: 800,
        }
    }
}

impl UiConfig {
    /// Validate the UI settings.
    pub fn validate(&self) -> Result<()> {
        if !(8..=72).contains(&self.font_size) {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_size".to_string(),
                reason: format!("{} is outside 8..=72", self.font_size),
            });
        }
        if self.window_width < 400 || self.window_height < 300 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.window_width/window_height".to_string(),
                reason: "window must be at least 400x300".to_string(),
            });
        }
        Ok(())
    }
}
