//! Ticker symbol list handling.

/// Watchlist used when no override is configured.
pub const DEFAULT_SYMBOLS: [&str; 4] = ["NVDA", "LIFE", "TEAM", "GOOGL"];

/// Parse a comma-separated symbol override.
///
/// `None` or a blank value yields [`DEFAULT_SYMBOLS`]. Otherwise entries are
/// trimmed and empties dropped; order, duplicates and case are kept as given.
pub fn parse_symbol_list(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(value) if !value.trim().is_empty() => value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => default_symbols(),
    }
}

pub fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Trim every symbol and discard the ones left empty.
pub fn clean_symbols<S: AsRef<str>>(symbols: &[S]) -> Vec<String> {
    symbols
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
