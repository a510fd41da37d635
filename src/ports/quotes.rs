use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Quote;

/// Failure of a single quote attempt
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Alpha Vantage HTTP {status} for {symbol}")]
    Http { symbol: String, status: u16 },

    #[error("Request for {symbol} failed: {message}")]
    Transport { symbol: String, message: String },

    #[error("Failed to parse response for {symbol}: {message}")]
    Parse { symbol: String, message: String },

    #[error("Alpha Vantage: no quote for {symbol} - {reason}")]
    NoQuote { symbol: String, reason: String },
}

impl QuoteError {
    pub fn symbol(&self) -> &str {
        match self {
            QuoteError::Http { symbol, .. }
            | QuoteError::Transport { symbol, .. }
            | QuoteError::Parse { symbol, .. }
            | QuoteError::NoQuote { symbol, .. } => symbol,
        }
    }
}

/// Source of current quotes, one symbol per call.
///
/// Implementations make exactly one request per call. Pacing and retries
/// belong to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteError>;
}
