//! Configuration Module
//!
//! Environment settings (credentials, addresses, symbols) plus an optional
//! TOML file for pacing, retry and endpoint tuning.

pub mod loader;
pub mod settings;

pub use loader::{
    load_config, AlphaVantageSection, ConfigError, FileConfig, LoggingSection, TwilioSection,
    DEFAULT_ALPHA_VANTAGE_URL, DEFAULT_TWILIO_API_URL,
};
pub use settings::{MessagingSettings, Settings, REQUIRED_MESSAGING_VARS};
