//! Public futures endpoints
//!
//! Always routed under `/v2/futures`, whatever market type the caller uses
//! elsewhere.

use coinex_types::{Market, MarketType, ResponseEnvelope};
use reqwest::Method;
use tracing::{debug, instrument};

use super::market_path;
use crate::client::CoinExRestClient;
use crate::error::RestResult;
use crate::params::RequestParams;
use crate::types::HistoryQuery;

/// Public futures endpoints
pub struct FuturesEndpoints<'a> {
    client: &'a CoinExRestClient,
}

impl<'a> FuturesEndpoints<'a> {
    pub fn new(client: &'a CoinExRestClient) -> Self {
        Self { client }
    }

    async fn get(&self, endpoint: &str, params: RequestParams) -> RestResult<ResponseEnvelope> {
        let path = market_path(MarketType::Futures, endpoint);
        self.client.execute(Method::GET, &path, &params, None).await
    }

    /// Get the current funding rate
    #[instrument(skip(self))]
    pub async fn get_funding_rate(&self, market: &Market) -> RestResult<ResponseEnvelope> {
        debug!("Fetching funding rate");
        self.get("funding-rate", RequestParams::new().with_market(Some(market)))
            .await
    }

    /// Get funding rate history
    #[instrument(skip(self))]
    pub async fn get_funding_rate_history(
        &self,
        market: &Market,
        query: HistoryQuery,
    ) -> RestResult<ResponseEnvelope> {
        debug!("Fetching funding rate history");
        self.get("funding-rate-history", query.to_params().with_market(Some(market)))
            .await
    }

    /// Get premium index history
    #[instrument(skip(self))]
    pub async fn get_premium_index_history(
        &self,
        market: &Market,
        query: HistoryQuery,
    ) -> RestResult<ResponseEnvelope> {
        debug!("Fetching premium index history");
        self.get("premium-index-history", query.to_params().with_market(Some(market)))
            .await
    }

    /// Get basis rate history
    #[instrument(skip(self))]
    pub async fn get_basis_history(
        &self,
        market: &Market,
        query: HistoryQuery,
    ) -> RestResult<ResponseEnvelope> {
        debug!("Fetching basis history");
        self.get("basis-history", query.to_params().with_market(Some(market)))
            .await
    }

    /// Get position levels (margin tiers)
    #[instrument(skip(self))]
    pub async fn get_position_level(&self, market: &Market) -> RestResult<ResponseEnvelope> {
        debug!("Fetching position levels");
        self.get("position-level", RequestParams::new().with_market(Some(market)))
            .await
    }
}
