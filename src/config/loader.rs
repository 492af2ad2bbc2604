use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/quizterm/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("quizterm").join("config.toml")
    }

    /// Loads configuration from a specific file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint URL is present and uses an http(s) scheme
    /// - Timeouts and the auto-advance delay are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.source.endpoint_url.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "source.endpoint_url must not be empty".to_string(),
            });
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                message: format!("source.endpoint_url '{}' must be an http(s) URL", endpoint),
            });
        }

        if self.source.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "source.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.source.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "source.connect_timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.quiz.auto_advance && self.quiz.auto_advance_delay_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "quiz.auto_advance_delay_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
