//! Private trading endpoints
//!
//! These endpoints require authentication and move funds. Both halves of the
//! market symbol are always required.

use coinex_auth::Credentials;
use coinex_types::{Market, MarketType, ResponseEnvelope};
use reqwest::Method;
use tracing::{debug, info, instrument};

use super::market_path;
use crate::client::CoinExRestClient;
use crate::error::RestResult;
use crate::params::RequestParams;
use crate::types::{OrderRequest, OrdersQuery};

/// Private trading endpoints
pub struct TradingEndpoints<'a> {
    client: &'a CoinExRestClient,
    credentials: &'a Credentials,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a CoinExRestClient, credentials: &'a Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    async fn send(
        &self,
        method: Method,
        market_type: MarketType,
        endpoint: &str,
        params: &RequestParams,
    ) -> RestResult<ResponseEnvelope> {
        let path = market_path(market_type, endpoint);
        self.client
            .execute(method, &path, params, Some(self.credentials))
            .await
    }

    /// Place a new order
    ///
    /// # Example
    ///
    /// ```no_run
    /// use coinex_rest::{CoinExRestClient, Credentials, Market, OrderRequest, OrderSide};
    /// use rust_decimal::Decimal;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = CoinExRestClient::with_credentials(Credentials::from_env()?)?;
    ///
    /// let order = OrderRequest::builder()
    ///     .side(OrderSide::Buy)
    ///     .market(Market::new("BTC", "USDT")?)
    ///     .amount(Decimal::new(1, 3))
    ///     .price(Decimal::from(50_000))
    ///     .build();
    ///
    /// let response = client.trading()?.place_order(&order).await?;
    /// println!("code {}: {}", response.code, response.message);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<ResponseEnvelope> {
        info!(
            market = %order.market,
            side = %order.side,
            order_type = %order.order_type(),
            amount = %order.amount,
            "Placing order"
        );
        self.send(
            Method::POST,
            order.market_type,
            order.endpoint(),
            &order.to_params(),
        )
        .await
    }

    /// Cancel a specific order, or all orders in the market when `order_id` is `None`
    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        market: &Market,
        market_type: MarketType,
        order_id: Option<u64>,
    ) -> RestResult<ResponseEnvelope> {
        let Some(order_id) = order_id else {
            return self.cancel_all_orders(market, market_type).await;
        };

        info!(market = %market, order_id, "Cancelling order");
        let params = RequestParams::new()
            .with_market(Some(market))
            .with("market_type", market_type.wire_name())
            .with("order_id", order_id);
        self.send(Method::POST, market_type, "cancel-order", &params)
            .await
    }

    /// Cancel every open order in the market
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(
        &self,
        market: &Market,
        market_type: MarketType,
    ) -> RestResult<ResponseEnvelope> {
        info!(market = %market, "Cancelling all orders");
        let params = RequestParams::new()
            .with_market(Some(market))
            .with("market_type", market_type.wire_name());
        self.send(Method::POST, market_type, "cancel-all-orders", &params)
            .await
    }

    /// Query pending or finished orders
    #[instrument(skip(self))]
    pub async fn get_orders(&self, query: &OrdersQuery) -> RestResult<ResponseEnvelope> {
        debug!("Fetching orders");
        self.send(
            Method::GET,
            query.market_type,
            &query.endpoint(),
            &query.to_params(),
        )
        .await
    }
}
