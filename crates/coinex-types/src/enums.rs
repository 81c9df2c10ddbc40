//! MarketType, OrderSide, OrderStatus, OrderType, and KlinePeriod enums
//!
//! Every enum parses strictly from its lower-case wire name via [`FromStr`];
//! an unknown value is a [`ValidationError`], never a silent default.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market type, selects the URL prefix and response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    /// Spot market
    #[default]
    Spot,
    /// Margin market (routed through the spot endpoints)
    Margin,
    /// Perpetual futures market
    Futures,
}

impl MarketType {
    /// Lower-case name, as accepted from callers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Margin => "margin",
            Self::Futures => "futures",
        }
    }

    /// URL path segment; margin shares the spot routes
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Spot | Self::Margin => "spot",
            Self::Futures => "futures",
        }
    }

    /// Upper-case name used in request payloads (`market_type` field)
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Spot => "SPOT",
            Self::Margin => "MARGIN",
            Self::Futures => "FUTURES",
        }
    }
}

impl FromStr for MarketType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spot" => Ok(Self::Spot),
            "margin" => Ok(Self::Margin),
            "futures" => Ok(Self::Futures),
            _ => Err(ValidationError::InvalidMarketType(s.to_string())),
        }
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl FromStr for OrderSide {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(ValidationError::InvalidOrderSide(s.to_string())),
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order status filter for order queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Open orders
    Pending,
    /// Filled or cancelled orders
    #[default]
    Finished,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Finished => "finished",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "finished" => Ok(Self::Finished),
            _ => Err(ValidationError::InvalidOrderStatus(s.to_string())),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order - executes at specified price or better
    Limit,
    /// Market order - executes immediately at best available price
    Market,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Market => "market",
        }
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "limit" => Ok(Self::Limit),
            "market" => Ok(Self::Market),
            _ => Err(ValidationError::InvalidOrderType(s.to_string())),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// K-line (candlestick) period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KlinePeriod {
    #[serde(rename = "1min")]
    M1,
    #[serde(rename = "3min")]
    M3,
    #[serde(rename = "5min")]
    M5,
    #[serde(rename = "15min")]
    M15,
    #[serde(rename = "30min")]
    M30,
    #[serde(rename = "1hour")]
    #[default]
    H1,
    #[serde(rename = "2hour")]
    H2,
    #[serde(rename = "4hour")]
    H4,
    #[serde(rename = "6hour")]
    H6,
    #[serde(rename = "12hour")]
    H12,
    #[serde(rename = "1day")]
    D1,
    #[serde(rename = "3day")]
    D3,
    #[serde(rename = "1week")]
    W1,
}

impl KlinePeriod {
    /// All supported periods, shortest first
    pub const ALL: [KlinePeriod; 13] = [
        Self::M1,
        Self::M3,
        Self::M5,
        Self::M15,
        Self::M30,
        Self::H1,
        Self::H2,
        Self::H4,
        Self::H6,
        Self::H12,
        Self::D1,
        Self::D3,
        Self::W1,
    ];

    const SUPPORTED: &'static str =
        "1min, 3min, 5min, 15min, 30min, 1hour, 2hour, 4hour, 6hour, 12hour, 1day, 3day, 1week";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1min",
            Self::M3 => "3min",
            Self::M5 => "5min",
            Self::M15 => "15min",
            Self::M30 => "30min",
            Self::H1 => "1hour",
            Self::H2 => "2hour",
            Self::H4 => "4hour",
            Self::H6 => "6hour",
            Self::H12 => "12hour",
            Self::D1 => "1day",
            Self::D3 => "3day",
            Self::W1 => "1week",
        }
    }
}

impl FromStr for KlinePeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidKlinePeriod {
                period: s.to_string(),
                supported: Self::SUPPORTED,
            })
    }
}

impl fmt::Display for KlinePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_type_parse() {
        assert_eq!("spot".parse::<MarketType>().unwrap(), MarketType::Spot);
        assert_eq!("FUTURES".parse::<MarketType>().unwrap(), MarketType::Futures);
        assert_eq!("Margin".parse::<MarketType>().unwrap(), MarketType::Margin);
        assert!(matches!(
            "perpetual".parse::<MarketType>(),
            Err(ValidationError::InvalidMarketType(_))
        ));
    }

    #[test]
    fn test_margin_routes_through_spot() {
        assert_eq!(MarketType::Margin.path_segment(), "spot");
        assert_eq!(MarketType::Margin.wire_name(), "MARGIN");
        assert_eq!(MarketType::Futures.path_segment(), "futures");
    }

    #[test]
    fn test_order_side_parse() {
        assert_eq!("buy".parse::<OrderSide>().unwrap(), OrderSide::Buy);
        assert_eq!("SELL".parse::<OrderSide>().unwrap(), OrderSide::Sell);
        assert!("hold".parse::<OrderSide>().is_err());
    }

    #[test]
    fn test_order_status_parse() {
        assert_eq!("pending".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
        assert_eq!(OrderStatus::default(), OrderStatus::Finished);
        assert!("open".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_kline_period_round_trip_names() {
        for period in KlinePeriod::ALL {
            assert_eq!(period.as_str().parse::<KlinePeriod>().unwrap(), period);
        }
    }

    #[test]
    fn test_kline_period_rejects_unknown() {
        for bad in ["2min", "1h", "1HOUR", "", "1month", "60"] {
            let err = bad.parse::<KlinePeriod>().unwrap_err();
            assert!(matches!(err, ValidationError::InvalidKlinePeriod { .. }), "{bad}");
        }
    }

    #[test]
    fn test_kline_period_serde_name() {
        let json = serde_json::to_string(&KlinePeriod::H4).unwrap();
        assert_eq!(json, "\"4hour\"");
    }
}
