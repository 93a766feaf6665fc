// Configuration module
// Loads the optional guest_rsvp.toml and falls back to defaults

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod app_config;

pub use app_config::*;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "guest_rsvp.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
    config: AppConfig,
}

impl ConfigManager {
    /// Create new configuration manager with default path
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CONFIG_FILE)
    }

    /// Create configuration manager with custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
            config: AppConfig::default(),
        }
    }

    /// Load and validate the configuration file
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ConfigError::FileNotFound(self.config_path.display().to_string())
            } else {
                ConfigError::Io(e)
            }
        })?;
        self.config = AppConfig::from_toml_str(&content)?;
        Ok(())
    }

    /// Load with fallback to defaults if the file is missing or invalid.
    /// Returns the load error so the caller can report it once logging is up.
    pub fn load_or_default(&mut self) -> Option<ConfigError> {
        match self.load() {
            Ok(()) => None,
            Err(e) => {
                self.config = AppConfig::default();
                Some(e)
            }
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
