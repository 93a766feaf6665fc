// Application configuration structures
// All sections fall back to defaults when omitted from the TOML file

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub form: FormConfig,
    pub gui: GuiConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of off, error, warn, info, debug, trace. RUST_LOG takes precedence.
    pub level: String,
    /// Log file, appended to. Empty string logs to stderr.
    pub file: String,
}

/// Form behaviour configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Also reset the attendance flag to "no" on RESET
    pub reset_clears_attendance: bool,
    /// Capacity of the pending UI event queue
    pub event_buffer_size: usize,
}

/// GUI window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: "guest_rsvp.log".to_string(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_clears_attendance: false,
            event_buffer_size: 256,
        }
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Guest RSVP".to_string(),
            width: 420.0,
            height: 640.0,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::Invalid(format!("Unknown log level '{}'", self.level)))
    }
}

impl AppConfig {
    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.level_filter()?;

        if self.form.event_buffer_size == 0 {
            return Err(ConfigError::Invalid("form.event_buffer_size must be greater than 0".to_string()));
        }

        if !(self.gui.width > 0.0 && self.gui.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "gui window size must be positive, got {}x{}",
                self.gui.width, self.gui.height
            )));
        }

        Ok(())
    }
}
