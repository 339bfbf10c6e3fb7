//! Configuration File Loading
//!
//! Finds and loads the TOML configuration file from the usual locations,
//! falling back to defaults when none exists. A file that exists but fails
//! to parse or validate is an error; silently ignoring a broken config
//! hides user mistakes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::Config;

/// Configuration file loader.
pub struct ConfigLoader {
    /// Search paths in priority order
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader with the default search paths.
    pub fn new() -> Self {
        Self {
            search_paths: Self::default_search_paths(),
        }
    }

    /// Load configuration from the first file found in the search paths,
    /// or defaults when none exists.
    pub fn load() -> Result<Config> {
        let loader = Self::new();
        for path in &loader.search_paths {
            if path.exists() {
                debug!("Loading config from {}", path.display());
                return Self::load_from_file(path);
            }
        }
        debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Load and validate a specific configuration file.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Search paths in priority order: `$XDG_CONFIG_HOME` (via `dirs`),
    /// then a dotfile in the home directory, then the working directory.
    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("bloodstudio").join("config.toml"));
        }
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".bloodstudio").join("config.toml"));
        }
        paths.push(PathBuf::from("bloodstudio.toml"));

        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
