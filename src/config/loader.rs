//! Configuration Loader
//!
//! Loads the optional TOML tuning file. Every key has a default, so an absent
//! file and an empty file behave the same.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_TWILIO_API_URL: &str = "https://api.twilio.com";

/// Main tuning structure matching courier.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub alpha_vantage: AlphaVantageSection,
    pub twilio: TwilioSection,
    pub logging: LoggingSection,
}

/// Quote provider section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AlphaVantageSection {
    /// GLOBAL_QUOTE query endpoint
    pub base_url: String,
    /// Pause before every symbol except the first (free tier allows 5 req/min)
    pub request_interval_secs: u64,
    /// Pause between a failed attempt and its retry
    pub retry_delay_secs: u64,
    /// Attempts per symbol, first try included
    pub max_attempts: u32,
    /// Per-request timeout; 0 leaves the transport default in place
    pub timeout_secs: u64,
}

impl Default for AlphaVantageSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ALPHA_VANTAGE_URL.to_string(),
            request_interval_secs: 15,
            retry_delay_secs: 30,
            max_attempts: 2,
            timeout_secs: 30,
        }
    }
}

impl AlphaVantageSection {
    pub fn request_interval(&self) -> Duration {
        Duration::from_secs(self.request_interval_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        timeout_from_secs(self.timeout_secs)
    }
}

/// Messaging provider section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TwilioSection {
    /// REST API root, without the `/2010-04-01` version segment
    pub api_base_url: String,
    /// Per-request timeout; 0 leaves the transport default in place
    pub timeout_secs: u64,
}

impl Default for TwilioSection {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_TWILIO_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl TwilioSection {
    pub fn timeout(&self) -> Option<Duration> {
        timeout_from_secs(self.timeout_secs)
    }
}

/// Logging section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing {0}")]
    MissingVar(&'static str),
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load tuning from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl FileConfig {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alpha_vantage.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "alpha_vantage.base_url cannot be empty".to_string(),
            ));
        }

        if self.alpha_vantage.max_attempts == 0 {
            return Err(ConfigError::ValidationError(
                "alpha_vantage.max_attempts must be >= 1, got 0".to_string(),
            ));
        }

        if self.twilio.api_base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "twilio.api_base_url cannot be empty".to_string(),
            ));
        }

        match self.logging.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "logging.level must be one of trace/debug/info/warn/error, got {}",
                    other
                )));
            }
        }

        Ok(())
    }
}
