//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - Alpha Vantage: GLOBAL_QUOTE market data client
//! - Twilio: SMS / WhatsApp message creation
//! - CLI: Command-line interface handlers

pub mod alpha_vantage;
pub mod twilio;
pub mod cli;

pub use alpha_vantage::AlphaVantageClient;
pub use twilio::TwilioClient;
pub use cli::CliApp;
