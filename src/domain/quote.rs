use std::fmt;

/// Price snapshot for one ticker symbol.
///
/// Price and change stay as the provider's decimal text, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub symbol: String,
    pub price: String,
    /// Signed percent change including the trailing `%`, e.g. `-0.3%`
    pub change_percent: String,
}

impl Quote {
    pub fn new(
        symbol: impl Into<String>,
        price: impl Into<String>,
        change_percent: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.into(),
            change_percent: change_percent.into(),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ${} ({})", self.symbol, self.price, self.change_percent)
    }
}
