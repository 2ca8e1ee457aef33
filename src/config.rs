//! Process configuration loaded from environment variables.

use std::env;

use crate::models::time::DEFAULT_TIME_PATTERN;

/// Configuration error raised when an environment variable cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server bind host
    pub host: String,
    /// Server bind port
    pub port: u16,
    /// Time-of-day pattern applied to every emitted start/end time
    pub time_format_pattern: String,
}

impl AppConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): server bind host
    /// - `PORT` (optional, default: 8080): server bind port
    /// - `TIME_FORMAT_PATTERN` (optional, default: `%I:%M%p`): strftime
    ///   pattern for rendering clock times
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 8080,
        };
        let time_format_pattern =
            env::var("TIME_FORMAT_PATTERN").unwrap_or_else(|_| DEFAULT_TIME_PATTERN.to_string());

        Ok(Self {
            host,
            port,
            time_format_pattern,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            time_format_pattern: DEFAULT_TIME_PATTERN.to_string(),
        }
    }
}
