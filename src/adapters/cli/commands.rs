//! CLI Command Handlers
//!
//! Argument definitions and the two run modes: `send` (fetch, format,
//! deliver) and `preview` (fetch and format only).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::adapters::alpha_vantage::{AlphaVantageClient, AlphaVantageConfig};
use crate::adapters::twilio::{TwilioClient, TwilioConfig};
use crate::application::{DigestJob, Dispatcher, QuoteFetcher, RetryPolicy};
use crate::config::{load_config, FileConfig, Settings};

/// Quote Courier - morning stock digest over SMS or WhatsApp
#[derive(Parser, Debug)]
#[command(
    name = "quote-courier",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fetch stock quotes from Alpha Vantage and text a one-line digest via Twilio",
    long_about = "Quote Courier fetches a GLOBAL_QUOTE for each watchlist symbol (paced for the \
                  Alpha Vantage free tier), formats them into a single line and sends it over \
                  Twilio SMS or WhatsApp. Credentials come from the environment or a .env file."
)]
pub struct CliApp {
    /// The command to execute (defaults to `send`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Optional TOML file with pacing, retry and endpoint tuning
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Comma-separated symbols, overrides STOCK_SYMBOLS
    #[arg(short, long, value_name = "LIST", global = true)]
    pub symbols: Option<String>,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fetch quotes and send the digest
    Send,

    /// Fetch quotes and print the digest without sending it
    Preview,
}

impl CliApp {
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Send)
    }

    /// Load the tuning file if one was given, expanding `~`
    pub fn file_config(&self) -> Result<FileConfig> {
        match &self.config {
            Some(path) => {
                let expanded = shellexpand::tilde(&path.to_string_lossy()).to_string();
                load_config(&expanded)
                    .with_context(|| format!("Failed to load configuration from {}", expanded))
            }
            None => Ok(FileConfig::default()),
        }
    }

    /// Log level implied by flags, falling back to the config file
    pub fn log_level<'a>(&self, file_config: &'a FileConfig) -> &'a str {
        if self.debug {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            file_config.logging.level.as_str()
        }
    }
}

/// Execute the selected command
pub async fn execute(app: &CliApp, file_config: &FileConfig) -> Result<()> {
    let settings = Settings::from_env()?.with_symbol_override(app.symbols.as_deref());
    tracing::debug!(?settings, "Settings loaded");

    match app.selected_command() {
        Command::Send => send_command(&settings, file_config).await,
        Command::Preview => {
            let message = preview_command(&settings, file_config).await?;
            println!("{}", message);
            Ok(())
        }
    }
}

/// Whether a parse failure is a usage error rather than `--help` or
/// `--version` output
pub fn is_usage_error(err: &clap::Error) -> bool {
    err.use_stderr()
}

fn build_job(settings: &Settings, file_config: &FileConfig) -> Result<DigestJob<AlphaVantageClient>> {
    let av = &file_config.alpha_vantage;
    let client = AlphaVantageClient::with_config(
        AlphaVantageConfig::new(settings.alpha_vantage_api_key.clone())
            .with_base_url(av.base_url.clone())
            .with_timeout(av.timeout()),
    )
    .context("Failed to create Alpha Vantage client")?;

    let fetcher = QuoteFetcher::new(client)
        .with_request_interval(av.request_interval())
        .with_retry_policy(RetryPolicy::new(av.max_attempts, av.retry_delay()));

    Ok(DigestJob::new(fetcher, settings.symbols.clone()))
}

async fn send_command(settings: &Settings, file_config: &FileConfig) -> Result<()> {
    // Messaging settings must validate before the fetch schedule starts
    let dispatcher = Dispatcher::from_settings(&settings.messaging, |creds| {
        TwilioClient::with_config(
            TwilioConfig::new(creds.account_sid.clone(), creds.auth_token.clone())
                .with_api_base_url(file_config.twilio.api_base_url.clone())
                .with_timeout(file_config.twilio.timeout()),
        )
        .context("Failed to create Twilio client")
    })?;

    let job = build_job(settings, file_config)?;
    job.run(&dispatcher).await?;
    Ok(())
}

async fn preview_command(settings: &Settings, file_config: &FileConfig) -> Result<String> {
    let job = build_job(settings, file_config)?;
    Ok(job.compose().await?)
}
