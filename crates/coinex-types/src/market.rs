//! Market symbols (BTCUSDT format)

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tradable market symbol formed by concatenating base and quote codes
///
/// CoinEx symbols carry no separator, so the base/quote split is kept
/// alongside the symbol rather than re-derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Market {
    base: String,
    quote: String,
    symbol: String,
}

impl Market {
    /// Default quote currency
    pub const DEFAULT_QUOTE: &'static str = "USDT";

    /// Create a market from base and quote currency codes
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Result<Self, ValidationError> {
        let base = base.into();
        let quote = quote.into();

        if base.trim().is_empty() {
            return Err(ValidationError::EmptyField("base"));
        }
        if quote.trim().is_empty() {
            return Err(ValidationError::EmptyField("quote"));
        }

        let symbol = format!("{base}{quote}");
        Ok(Self { base, quote, symbol })
    }

    /// Resolve an optional base/quote pair into a market filter
    ///
    /// Both present yields a market; both absent means "all markets".
    /// Exactly one present is meaningless and rejected.
    pub fn filter(base: Option<&str>, quote: Option<&str>) -> Result<Option<Self>, ValidationError> {
        match (base, quote) {
            (Some(base), Some(quote)) => Self::new(base, quote).map(Some),
            (None, None) => Ok(None),
            (base, quote) => Err(ValidationError::IncompleteMarket {
                base: base.map(str::to_string),
                quote: quote.map(str::to_string),
            }),
        }
    }

    /// Get the symbol as a string slice
    pub fn as_str(&self) -> &str {
        &self.symbol
    }

    /// Base currency (e.g., "BTC")
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Quote currency (e.g., "USDT")
    pub fn quote(&self) -> &str {
        &self.quote
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

impl AsRef<str> for Market {
    fn as_ref(&self) -> &str {
        &self.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_symbol() {
        let market = Market::new("BTC", "USDT").unwrap();
        assert_eq!(market.as_str(), "BTCUSDT");
        assert_eq!(market.base(), "BTC");
        assert_eq!(market.quote(), "USDT");
        assert_eq!(market.to_string(), "BTCUSDT");
    }

    #[test]
    fn test_market_rejects_empty_parts() {
        assert_eq!(Market::new("", "USDT"), Err(ValidationError::EmptyField("base")));
        assert_eq!(Market::new("BTC", " "), Err(ValidationError::EmptyField("quote")));
    }

    #[test]
    fn test_market_filter() {
        assert_eq!(Market::filter(None, None).unwrap(), None);
        assert_eq!(
            Market::filter(Some("ETH"), Some("BTC")).unwrap().unwrap().as_str(),
            "ETHBTC"
        );
        assert!(matches!(
            Market::filter(Some("ETH"), None),
            Err(ValidationError::IncompleteMarket { .. })
        ));
        assert!(matches!(
            Market::filter(None, Some("USDT")),
            Err(ValidationError::IncompleteMarket { .. })
        ));
    }
}
