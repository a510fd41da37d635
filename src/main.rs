//! Quote Courier - Morning Stock Digest
//!
//! Fetches Alpha Vantage quotes and texts a one-line digest via Twilio.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use quote_courier::adapters::cli::{self, CliApp};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists (local runs keep credentials there)
    dotenvy::dotenv().ok();

    let app = match CliApp::try_parse() {
        Ok(app) => app,
        Err(e) => {
            let _ = e.print();
            return if cli::is_usage_error(&e) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let file_config = match app.file_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(app.log_level(&file_config)) {
        eprintln!("Failed to initialise logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    match cli::execute(&app, &file_config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

/// Emit the single failure line, even when RUST_LOG filters out errors
fn report_failure(err: &anyhow::Error) {
    if error_logging_enabled() {
        tracing::error!("{:#}", err);
    } else {
        eprintln!("ERROR {:#}", err);
    }
}

fn error_logging_enabled() -> bool {
    tracing::enabled!(Level::ERROR)
}

/// RUST_LOG, when set, overrides the level picked from flags and config
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_level_detection_follows_filter() {
        let silenced = fmt().with_env_filter(EnvFilter::new("off")).finish();
        tracing::subscriber::with_default(silenced, || {
            assert!(!error_logging_enabled());
        });

        let errors_only = fmt().with_env_filter(EnvFilter::new("error")).finish();
        tracing::subscriber::with_default(errors_only, || {
            assert!(error_logging_enabled());
        });
    }
}
