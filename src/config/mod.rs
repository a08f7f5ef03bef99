//! Configuration management module
//!
//! Handles loading, saving, and validation of the application settings:
//! where the generation service lives and which languages the session
//! starts with.

use crate::{LingoError, Result, APP_NAME, CONFIG_FILE, DEFAULT_ENDPOINT, ENDPOINT_ENV};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log levels accepted in the config file
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL of the flashcard generation endpoint
    pub endpoint: String,
    /// Source language the session starts with
    pub source_language: String,
    /// Target language the session starts with
    pub target_language: String,
    /// Default log filter when RUST_LOG is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            source_language: "en".to_string(),
            target_language: "es".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generation endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            LingoError::ConfigError(format!("Invalid endpoint URL '{}': {}", self.endpoint, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(LingoError::ConfigError(format!(
                "Endpoint must use http or https: {}",
                self.endpoint
            )));
        }

        if self.source_language.trim().is_empty() || self.target_language.trim().is_empty() {
            return Err(LingoError::ConfigError(
                "Source and target language must not be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(LingoError::ConfigError(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location and apply
    /// environment overrides. Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_file_path()?)?;
        config.apply_env_overrides(std::env::var(ENDPOINT_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            LingoError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            LingoError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the endpoint with an override when one is set
    pub fn apply_env_overrides(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LingoError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| {
            LingoError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// ($CONFIG_HOME/lingocards/lingocards.toml)
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            LingoError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
