//! Public market data endpoints
//!
//! These endpoints don't require authentication and are never signed.

use coinex_types::{KlinePeriod, Market, MarketType, ResponseEnvelope};
use reqwest::Method;
use tracing::{debug, instrument};

use super::market_path;
use crate::client::CoinExRestClient;
use crate::error::RestResult;
use crate::params::RequestParams;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a CoinExRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a CoinExRestClient) -> Self {
        Self { client }
    }

    async fn get(
        &self,
        market_type: MarketType,
        endpoint: &str,
        params: RequestParams,
    ) -> RestResult<ResponseEnvelope> {
        let path = market_path(market_type, endpoint);
        self.client.execute(Method::GET, &path, &params, None).await
    }

    /// Get market status
    ///
    /// # Arguments
    /// * `market` - Market to query, `None` for the full catalogue
    #[instrument(skip(self))]
    pub async fn get_market_info(
        &self,
        market: Option<&Market>,
        market_type: MarketType,
    ) -> RestResult<ResponseEnvelope> {
        debug!("Fetching market info");
        let params = RequestParams::new().with_market(market);
        self.get(market_type, "market", params).await
    }

    /// Get ticker information
    ///
    /// # Arguments
    /// * `market` - Market to query, `None` for every market
    #[instrument(skip(self))]
    pub async fn get_tickers(
        &self,
        market: Option<&Market>,
        market_type: MarketType,
    ) -> RestResult<ResponseEnvelope> {
        debug!("Fetching tickers");
        let params = RequestParams::new().with_market(market);
        self.get(market_type, "ticker", params).await
    }

    /// Get orderbook depth
    ///
    /// # Arguments
    /// * `limit` - Number of price levels per side
    /// * `interval` - Price merge interval, "0" for no merging
    #[instrument(skip(self))]
    pub async fn get_depth(
        &self,
        market: &Market,
        market_type: MarketType,
        limit: i64,
        interval: &str,
    ) -> RestResult<ResponseEnvelope> {
        debug!("Fetching depth");
        let params = RequestParams::new()
            .with_market(Some(market))
            .with("limit", limit)
            .with("interval", interval);
        self.get(market_type, "depth", params).await
    }

    /// Get k-line (candlestick) data
    #[instrument(skip(self))]
    pub async fn get_kline(
        &self,
        market: &Market,
        market_type: MarketType,
        period: KlinePeriod,
        limit: i64,
    ) -> RestResult<ResponseEnvelope> {
        debug!("Fetching k-lines");
        let params = RequestParams::new()
            .with_market(Some(market))
            .with("period", period.as_str())
            .with("limit", limit);
        self.get(market_type, "kline", params).await
    }

    /// Get recent trades
    #[instrument(skip(self))]
    pub async fn get_deals(
        &self,
        market: &Market,
        market_type: MarketType,
        limit: i64,
    ) -> RestResult<ResponseEnvelope> {
        debug!("Fetching deals");
        let params = RequestParams::new()
            .with_market(Some(market))
            .with("limit", limit);
        self.get(market_type, "deals", params).await
    }

    /// Get index price
    ///
    /// # Arguments
    /// * `market` - Market to query, `None` for every market
    #[instrument(skip(self))]
    pub async fn get_index_price(
        &self,
        market: Option<&Market>,
        market_type: MarketType,
    ) -> RestResult<ResponseEnvelope> {
        debug!("Fetching index price");
        let params = RequestParams::new().with_market(market);
        self.get(market_type, "index", params).await
    }
}
