//! Alpha Vantage GLOBAL_QUOTE wire types

use serde::Deserialize;

/// Top-level GLOBAL_QUOTE response.
///
/// On rate limiting or a bad request the provider still answers 200, with the
/// quote absent (or `{}`) and one of the message fields filled in instead.
#[derive(Debug, Default, Deserialize)]
pub struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    pub global_quote: Option<GlobalQuote>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
    #[serde(rename = "Information")]
    pub information: Option<String>,
}

/// Numbered quote fields. Only the ones the digest needs are decoded.
#[derive(Debug, Default, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "05. price")]
    pub price: Option<String>,
    #[serde(rename = "10. change percent")]
    pub change_percent: Option<String>,
}

impl GlobalQuoteResponse {
    /// Provider explanation for a missing quote, in precedence order
    pub fn reason(&self) -> Option<&str> {
        [&self.note, &self.error_message, &self.information]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }
}
