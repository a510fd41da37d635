//! Digest Job
//!
//! One run of the utility: fetch quotes for the watchlist, format them into
//! the digest, and (for a real run) hand the digest to the dispatcher.

use thiserror::Error;

use super::dispatcher::{DispatchError, Dispatcher};
use super::fetcher::{FetchError, QuoteFetcher};
use crate::domain::format_message;
use crate::ports::messaging::{MessageSender, SentMessage};
use crate::ports::quotes::QuoteSource;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("No quotes returned")]
    NoQuotes,
    #[error("Send failed: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct DigestReport {
    pub message: String,
    pub sent: SentMessage,
}

/// Fetch-format-send pipeline for one watchlist
pub struct DigestJob<S> {
    fetcher: QuoteFetcher<S>,
    symbols: Vec<String>,
}

impl<S: QuoteSource> DigestJob<S> {
    pub fn new(fetcher: QuoteFetcher<S>, symbols: Vec<String>) -> Self {
        Self { fetcher, symbols }
    }

    /// Fetch and format without sending
    pub async fn compose(&self) -> Result<String, DigestError> {
        tracing::info!("Fetching quotes for: {}", self.symbols.join(", "));

        let quotes = self.fetcher.fetch_quotes(&self.symbols).await?;
        if quotes.is_empty() {
            return Err(DigestError::NoQuotes);
        }

        let message = format_message(&quotes);
        tracing::info!("Message: {}", message);
        Ok(message)
    }

    /// Fetch, format and send. Nothing is sent unless every quote arrived.
    pub async fn run<M: MessageSender>(
        &self,
        dispatcher: &Dispatcher<M>,
    ) -> Result<DigestReport, DigestError> {
        let message = self.compose().await?;
        let sent = dispatcher.send_message(&message).await?;
        tracing::info!("Sent successfully");
        Ok(DigestReport { message, sent })
    }
}
