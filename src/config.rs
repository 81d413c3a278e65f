//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_BASE;
use crate::views::{Theme, DEFAULT_REVIEW_YEAR};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Customer API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Settings for [`crate::api::HttpPortalApi`]
    pub fn client_config(&self) -> crate::api::ApiConfig {
        crate::api::ApiConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_secs.saturating_mul(1000),
        }
    }
}

/// Where the logged-in customer is kept between commands
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_path")]
    pub path: String,
}

fn default_session_path() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("subs-portal").join("session.json").to_string_lossy().to_string())
        .unwrap_or_else(|| "./subs_portal_session.json".to_string())
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

/// Dashboard look
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub name: String,

    #[serde(default = "default_year")]
    pub year: i32,
}

fn default_theme_name() -> String {
    "stacked".to_string()
}

fn default_year() -> i32 {
    DEFAULT_REVIEW_YEAR
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            year: default_year(),
        }
    }
}

impl ThemeConfig {
    pub fn theme(&self) -> Theme {
        Theme::named(&self.name).year(self.year)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config file locations, most specific first
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("subs-portal").join("config.toml")),
            Some(PathBuf::from("/etc/subs-portal/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// First existing file among the standard locations
    pub fn locate_default() -> Option<PathBuf> {
        Self::first_existing(&Self::default_paths())
    }

    fn first_existing(paths: &[PathBuf]) -> Option<PathBuf> {
        paths.iter().find(|p| p.exists()).cloned()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = var("SUBS_PORTAL_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = var("SUBS_PORTAL_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        // Session overrides
        if let Some(path) = var("SUBS_PORTAL_SESSION_FILE") {
            self.session.path = path;
        }

        // Theme overrides
        if let Some(name) = var("SUBS_PORTAL_THEME") {
            self.theme.name = name;
        }

        // Logging overrides
        if let Some(level) = var("SUBS_PORTAL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SUBS_PORTAL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Subs Portal Configuration
#
# Environment variables override these settings:
# - SUBS_PORTAL_API_URL
# - SUBS_PORTAL_TIMEOUT_SECS
# - SUBS_PORTAL_SESSION_FILE
# - SUBS_PORTAL_THEME
# - SUBS_PORTAL_LOG_LEVEL
# - SUBS_PORTAL_LOG_FORMAT

[api]
# Base URL of the customer API
base_url = "http://localhost:8000/api"

# Request timeout in seconds
request_timeout_secs = 10

[session]
# File holding the logged-in customer
# path = "~/.local/share/subs-portal/session.json"

[theme]
# Dashboard look: stacked or classic
name = "stacked"

# Year shown in the dashboard headline
year = 2023

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
