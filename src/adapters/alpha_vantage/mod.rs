//! Alpha Vantage Adapter
//!
//! Implementation of the QuoteSource port for the Alpha Vantage
//! GLOBAL_QUOTE endpoint.

mod client;
mod types;

pub use client::{AlphaVantageClient, AlphaVantageConfig};
pub use types::{GlobalQuote, GlobalQuoteResponse};
