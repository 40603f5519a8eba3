//! Configuration loading and management for notesum.
//!
//! Loads settings from `notesum.toml` with environment variable overrides for sensitive data.

use crate::retry::{DEFAULT_BASE_DELAY, DEFAULT_MAX_RETRIES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const CONFIG_FILE: &str = "notesum.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Model and request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model identifier (e.g., "gemini-2.0-flash")
    pub model: String,
    /// Base URL of the Generative Language API
    pub endpoint: String,
    /// Total attempts per summary, including the first
    pub max_retries: u32,
    /// Backoff unit between attempts, in milliseconds
    pub base_delay_ms: u64,
    /// Per-request HTTP timeout, in seconds
    pub request_timeout_secs: u64,
}

/// API keys configuration (loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub gemini_key: Option<String>,
}

/// Storage paths configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the settings database
    pub path: PathBuf,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from the default location (notesum.toml in cwd or home).
    ///
    /// A missing file is not an error; defaults plus environment overrides are used.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env();
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Parse configuration text without touching the environment
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Override API keys from environment variables
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            self.api.gemini_key = Some(key);
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        let home_config = dirs::home_dir()?
            .join(".config")
            .join("notesum")
            .join(CONFIG_FILE);
        home_config.exists().then_some(home_config)
    }

    /// The Gemini API key, if one is configured and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api
            .gemini_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api.gemini_key = Some(key.into());
        self
    }
}

impl AgentConfig {
    /// Full `generateContent` URL for the configured model, without the key
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay_ms: DEFAULT_BASE_DELAY.as_millis() as u64,
            request_timeout_secs: 60,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let path = dirs::data_local_dir()
            .map(|dir| dir.join("notesum"))
            .unwrap_or_else(|| PathBuf::from("./data"));
        Self { path }
    }
}
