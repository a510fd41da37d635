//! Quote Fetcher
//!
//! Fetches one quote per symbol, strictly in sequence, pausing between
//! symbols to stay under the provider's rate limit and retrying each failed
//! symbol per the [`RetryPolicy`]. A symbol that exhausts its retries fails
//! the whole batch; partial results are never returned.

use std::time::Duration;

use thiserror::Error;

use super::pacing::{RequestPacer, RetryPolicy};
use crate::domain::{clean_symbols, Quote};
use crate::ports::quotes::{QuoteError, QuoteSource};

/// Free tier allows 5 requests per minute
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Giving up on {symbol} after {attempts} attempt(s): {source}")]
    Exhausted {
        symbol: String,
        attempts: u32,
        #[source]
        source: QuoteError,
    },
}

/// Sequential, rate-limited quote fetcher
#[derive(Debug)]
pub struct QuoteFetcher<S> {
    source: S,
    request_interval: Duration,
    retry: RetryPolicy,
}

impl<S: QuoteSource> QuoteFetcher<S> {
    /// Fetcher with the free-tier schedule: 15s between symbols, one retry
    /// after 30s
    pub fn new(source: S) -> Self {
        Self {
            source,
            request_interval: DEFAULT_REQUEST_INTERVAL,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch quotes for `symbols`, in order.
    ///
    /// Blank symbols are dropped before anything else happens, so they
    /// neither reach the provider nor take part in pacing.
    pub async fn fetch_quotes<T: AsRef<str>>(&self, symbols: &[T]) -> Result<Vec<Quote>, FetchError> {
        let symbols = clean_symbols(symbols);
        if symbols.is_empty() {
            tracing::debug!("No symbols to fetch");
            return Ok(Vec::new());
        }

        let mut pacer = RequestPacer::new(self.request_interval);
        let mut quotes = Vec::with_capacity(symbols.len());

        for symbol in &symbols {
            pacer.pace().await;
            let quote = self.fetch_one_with_retry(symbol).await?;
            tracing::info!(
                symbol = %quote.symbol,
                price = %quote.price,
                change = %quote.change_percent,
                "Quote received"
            );
            quotes.push(quote);
        }

        Ok(quotes)
    }

    async fn fetch_one_with_retry(&self, symbol: &str) -> Result<Quote, FetchError> {
        let mut attempt = 1;
        loop {
            match self.source.fetch_quote(symbol).await {
                Ok(quote) => return Ok(quote),
                Err(e) if self.retry.has_retry_after(attempt) => {
                    tracing::warn!(
                        symbol,
                        attempt,
                        "Retry in {}s for {}: {}",
                        self.retry.backoff.as_secs(),
                        symbol,
                        e
                    );
                    if !self.retry.backoff.is_zero() {
                        tokio::time::sleep(self.retry.backoff).await;
                    }
                    attempt += 1;
                }
                Err(e) => {
                    return Err(FetchError::Exhausted {
                        symbol: symbol.to_string(),
                        attempts: attempt,
                        source: e,
                    });
                }
            }
        }
    }
}
