//! Request types for CoinEx REST endpoints

use coinex_types::{Market, MarketType, OrderSide, OrderStatus, OrderType};
use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use crate::params::RequestParams;

// ============================================================================
// Trading Types
// ============================================================================

/// Order placement request
///
/// A price makes it a limit order, otherwise a market order. A trigger price
/// turns it into a stop order. Amounts and prices are sent as decimal strings
/// and are not range-checked locally: the exchange rejects non-positive values.
///
/// # Example
///
/// ```
/// use coinex_rest::{Market, OrderRequest, OrderSide};
/// use rust_decimal::Decimal;
///
/// let order = OrderRequest::builder()
///     .side(OrderSide::Buy)
///     .market(Market::new("BTC", "USDT").unwrap())
///     .amount(Decimal::new(1, 3))
///     .price(Decimal::from(50_000))
///     .build();
/// assert_eq!(order.endpoint(), "order");
/// ```
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct OrderRequest {
    pub side: OrderSide,
    pub market: Market,
    pub amount: Decimal,
    #[builder(default)]
    pub market_type: MarketType,
    #[builder(default, setter(strip_option))]
    pub price: Option<Decimal>,
    #[builder(default, setter(strip_option, into))]
    pub client_id: Option<String>,
    #[builder(default)]
    pub is_hide: bool,
    #[builder(default, setter(strip_option))]
    pub trigger_price: Option<Decimal>,
    #[builder(default, setter(strip_option, into))]
    pub stp_mode: Option<String>,
}

impl OrderRequest {
    /// Limit when a price is given, market otherwise
    pub fn order_type(&self) -> OrderType {
        if self.price.is_some() {
            OrderType::Limit
        } else {
            OrderType::Market
        }
    }

    /// Endpoint name under the market prefix
    pub fn endpoint(&self) -> &'static str {
        if self.trigger_price.is_some() {
            "stop-order"
        } else {
            "order"
        }
    }

    /// Body parameters for the request
    pub fn to_params(&self) -> RequestParams {
        let params = RequestParams::new()
            .with_market(Some(&self.market))
            .with("market_type", self.market_type.wire_name())
            .with("side", self.side.as_str())
            .with("type", self.order_type().as_str())
            .with("amount", self.amount.to_string())
            .with_opt("price", self.price.map(|p| p.to_string()))
            .with_opt("client_id", self.client_id.clone())
            .with_opt("trigger_price", self.trigger_price.map(|p| p.to_string()))
            .with_opt("stp_mode", self.stp_mode.clone());

        if self.is_hide {
            params.with("is_hide", true)
        } else {
            params
        }
    }
}

/// Order history query
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct OrdersQuery {
    /// `None` queries all markets
    #[builder(default, setter(strip_option))]
    pub market: Option<Market>,
    #[builder(default)]
    pub market_type: MarketType,
    #[builder(default, setter(strip_option))]
    pub side: Option<OrderSide>,
    #[builder(default)]
    pub status: OrderStatus,
    /// Query stop orders instead of regular orders
    #[builder(default)]
    pub is_stop: bool,
    #[builder(default = 1)]
    pub page: i64,
    #[builder(default = 100)]
    pub limit: i64,
}

impl OrdersQuery {
    /// Endpoint name, e.g. "pending-order" or "finished-stop-order"
    pub fn endpoint(&self) -> String {
        let stop = if self.is_stop { "stop-" } else { "" };
        format!("{}-{}order", self.status.as_str(), stop)
    }

    /// Query parameters for the request
    pub fn to_params(&self) -> RequestParams {
        RequestParams::new()
            .with_market(self.market.as_ref())
            .with("market_type", self.market_type.wire_name())
            .with_opt("side", self.side.map(|s| s.as_str()))
            .with("page", self.page)
            .with("limit", self.limit)
    }
}

impl Default for OrdersQuery {
    fn default() -> Self {
        Self::builder().build()
    }
}

// ============================================================================
// Futures History Types
// ============================================================================

/// Time-ranged, paginated history query for futures endpoints
///
/// Values are passed through verbatim; the exchange decides what an
/// out-of-range page, limit, or inverted time range means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct HistoryQuery {
    /// Start timestamp in milliseconds
    #[builder(default, setter(strip_option))]
    pub start_time: Option<i64>,
    /// End timestamp in milliseconds
    #[builder(default, setter(strip_option))]
    pub end_time: Option<i64>,
    #[builder(default = 1)]
    pub page: i64,
    #[builder(default = 10)]
    pub limit: i64,
}

impl HistoryQuery {
    /// Query parameters for the request
    pub fn to_params(&self) -> RequestParams {
        RequestParams::new()
            .with("page", self.page)
            .with("limit", self.limit)
            .with_opt("start_time", self.start_time)
            .with_opt("end_time", self.end_time)
    }
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self::builder().build()
    }
}
