//! Alpha Vantage API Client
//!
//! HTTP client for the GLOBAL_QUOTE endpoint. One request per call; pacing
//! and retries are the fetcher's job.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::types::GlobalQuoteResponse;
use crate::config::DEFAULT_ALPHA_VANTAGE_URL;
use crate::domain::Quote;
use crate::ports::quotes::{QuoteError, QuoteSource};

/// Alpha Vantage client configuration
#[derive(Clone)]
pub struct AlphaVantageConfig {
    /// Query endpoint
    pub base_url: String,
    pub api_key: String,
    /// Request timeout, `None` keeps reqwest's default
    pub timeout: Option<Duration>,
}

impl AlphaVantageConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_ALPHA_VANTAGE_URL.to_string(),
            api_key: api_key.into(),
            timeout: Some(Duration::from_secs(30)),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for AlphaVantageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// GLOBAL_QUOTE client
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    config: AlphaVantageConfig,
    http: Client,
}

impl AlphaVantageClient {
    /// Create a client against the public endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_config(AlphaVantageConfig::new(api_key))
    }

    pub fn with_config(config: AlphaVantageConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { config, http })
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        tracing::debug!(symbol, "Requesting GLOBAL_QUOTE");

        // without_url() keeps the apikey query parameter out of error text
        let transport = |e: reqwest::Error| QuoteError::Transport {
            symbol: symbol.to_string(),
            message: e.without_url().to_string(),
        };

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol),
                ("apikey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Http {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        quote_from_body(symbol, &body)
    }
}

/// Turn a GLOBAL_QUOTE body into a [`Quote`].
///
/// A missing or empty price is a failed attempt; a missing symbol falls back
/// to the requested one and a missing change to `0%`.
pub(crate) fn quote_from_body(symbol: &str, body: &str) -> Result<Quote, QuoteError> {
    let response: GlobalQuoteResponse =
        serde_json::from_str(body).map_err(|e| QuoteError::Parse {
            symbol: symbol.to_string(),
            message: e.to_string(),
        })?;

    let global_quote = response.global_quote.as_ref();
    let price = global_quote
        .and_then(|q| q.price.as_deref())
        .filter(|p| !p.is_empty());

    let Some(price) = price else {
        return Err(QuoteError::NoQuote {
            symbol: symbol.to_string(),
            reason: response.reason().unwrap_or(body).to_string(),
        });
    };

    let echoed_symbol = global_quote
        .and_then(|q| q.symbol.as_deref())
        .filter(|s| !s.is_empty())
        .unwrap_or(symbol);

    let change_percent = global_quote
        .and_then(|q| q.change_percent.as_deref())
        .filter(|c| !c.is_empty())
        .unwrap_or("0%")
        .trim();

    Ok(Quote::new(echoed_symbol, price, change_percent))
}
