//! Digest message rendering.

use super::quote::Quote;

/// Headline label. Names the scheduled send slot, not the actual send time.
pub const DIGEST_LABEL: &str = "Stocks 8am";

/// Attribution line required by the data provider's terms.
pub const ATTRIBUTION: &str = "Data: Alpha Vantage";

/// Render the one-line digest followed by the attribution line.
///
/// `NVDA $120.50 (+1.2%), GOOGL $175.00 (-0.3%)` becomes
/// `Stocks 8am: NVDA $120.50 (+1.2%), GOOGL $175.00 (-0.3%).\nData: Alpha Vantage`.
pub fn format_message(quotes: &[Quote]) -> String {
    let parts: Vec<String> = quotes.iter().map(Quote::to_string).collect();
    format!("{}: {}.\n{}", DIGEST_LABEL, parts.join(", "), ATTRIBUTION)
}
