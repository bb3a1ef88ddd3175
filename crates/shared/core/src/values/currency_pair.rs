use serde::{Deserialize, Serialize};

/// Currency pair as submitted on a trade (e.g., EURUSD, EUR/USD)
///
/// The symbol is kept as written (upper-cased) so that a pair which does not
/// have the shape of two ISO-4217 codes can still be reported back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CurrencyPair {
    symbol: String,
}

impl CurrencyPair {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into().trim().to_uppercase(),
        }
    }

    /// Build a pair from its two legs
    pub fn from_legs(base: &str, quote: &str) -> Self {
        Self::new(format!("{}{}", base, quote))
    }

    pub fn as_str(&self) -> &str {
        &self.symbol
    }

    /// Split into (base, quote) when both legs are three-letter codes
    pub fn legs(&self) -> Option<(&str, &str)> {
        let symbol = self.symbol.as_str();
        let (base, quote) = match symbol.find(['/', '-']) {
            Some(idx) => (&symbol[..idx], &symbol[idx + 1..]),
            None if symbol.len() == 6 && symbol.is_char_boundary(3) => symbol.split_at(3),
            None => return None,
        };

        if is_currency_code(base) && is_currency_code(quote) {
            Some((base, quote))
        } else {
            None
        }
    }

    /// Separator-free form (EUR/USD -> EURUSD), if the pair has legs
    pub fn canonical(&self) -> Option<String> {
        self.legs().map(|(base, quote)| format!("{}{}", base, quote))
    }

    /// The same pair quoted the other way round (EURUSD -> USDEUR)
    pub fn inverse(&self) -> Option<CurrencyPair> {
        self.legs()
            .map(|(base, quote)| CurrencyPair::from_legs(quote, base))
    }
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

impl From<String> for CurrencyPair {
    fn from(symbol: String) -> Self {
        Self::new(symbol)
    }
}

impl From<&str> for CurrencyPair {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.symbol
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_symbol_legs() {
        let pair = CurrencyPair::new("eurusd");
        assert_eq!(pair.as_str(), "EURUSD");
        assert_eq!(pair.legs(), Some(("EUR", "USD")));
    }

    #[test]
    fn test_separated_symbol_legs() {
        assert_eq!(CurrencyPair::new("EUR/USD").legs(), Some(("EUR", "USD")));
        assert_eq!(CurrencyPair::new("GBP-JPY").legs(), Some(("GBP", "JPY")));
        assert_eq!(
            CurrencyPair::new("EUR/USD").canonical().as_deref(),
            Some("EURUSD")
        );
    }

    #[test]
    fn test_malformed_symbols_have_no_legs() {
        assert!(CurrencyPair::new("EURUS").legs().is_none());
        assert!(CurrencyPair::new("EUR1SD").legs().is_none());
        assert!(CurrencyPair::new("EURO/USD").legs().is_none());
        assert!(CurrencyPair::new("").legs().is_none());
        assert!(CurrencyPair::new("ÄÄÄUSD").legs().is_none());
    }

    #[test]
    fn test_inverse() {
        let inverse = CurrencyPair::new("EURUSD").inverse().unwrap();
        assert_eq!(inverse.as_str(), "USDEUR");
        assert!(CurrencyPair::new("EURUSDX").inverse().is_none());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let pair: CurrencyPair = serde_json::from_str("\"eur/usd\"").unwrap();
        assert_eq!(pair.as_str(), "EUR/USD");
        assert_eq!(serde_json::to_string(&pair).unwrap(), "\"EUR/USD\"");
    }
}
