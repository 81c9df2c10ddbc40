//! API endpoint implementations

pub mod account;
pub mod futures;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use futures::FuturesEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

use coinex_types::MarketType;

/// Path for a market-scoped endpoint, e.g. `/v2/spot/ticker`
pub(crate) fn market_path(market_type: MarketType, endpoint: &str) -> String {
    format!("/v2/{}/{}", market_type.path_segment(), endpoint.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_path() {
        assert_eq!(market_path(MarketType::Spot, "ticker"), "/v2/spot/ticker");
        assert_eq!(market_path(MarketType::Futures, "/depth"), "/v2/futures/depth");
        assert_eq!(market_path(MarketType::Margin, "order"), "/v2/spot/order");
    }
}
