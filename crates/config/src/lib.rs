//! Configuration loading, validation, and management for tutorlab.
//!
//! Loads configuration from `~/.tutorlab/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// The root configuration structure.
///
/// Maps directly to `~/.tutorlab/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Which tools the registry exposes, and how results are printed
    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> String {
    "text".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Tool names to register
    #[serde(default = "default_enabled_tools")]
    pub enabled: Vec<String>,

    /// Pretty-print results on the command line
    #[serde(default = "default_true")]
    pub pretty_output: bool,
}

fn default_enabled_tools() -> Vec<String> {
    [
        "calculator",
        "physics_calc",
        "physics_constants_lookup",
        "memorize",
        "memorize_list",
        "forget",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_true() -> bool {
    true
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_tools(),
            pretty_output: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.tutorlab/config.toml).
    ///
    /// Environment variables override the file:
    /// - `TUTORLAB_LOG_LEVEL`
    /// - `TUTORLAB_LOG_FORMAT`
    /// - `TUTORLAB_TOOLS` (comma-separated enabled list)
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("TUTORLAB_LOG_LEVEL") {
            self.logging.level = level.trim().to_lowercase();
        }

        if let Some(format) = lookup("TUTORLAB_LOG_FORMAT") {
            self.logging.format = format.trim().to_lowercase();
        }

        if let Some(tools) = lookup("TUTORLAB_TOOLS") {
            self.tools.enabled = tools
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".tutorlab")
    }

    /// Get the configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be one of {}, got '{}'",
                LOG_FORMATS.join(", "),
                self.logging.format
            )));
        }

        if self.tools.enabled.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "tools.enabled must not contain blank names".into(),
            ));
        }

        Ok(())
    }

    /// Whether log lines should be emitted as JSON.
    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
