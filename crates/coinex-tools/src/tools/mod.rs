//! Tool catalogue and handlers

mod account;
mod futures;
mod market;

pub use futures::LIQUIDATION_UNAVAILABLE;

use coinex_types::{ResponseEnvelope, ValidationError};
use std::fmt;
use std::str::FromStr;

use crate::args::ToolArgs;
use crate::context::ToolContext;
use crate::error::ToolResult;
use crate::schema::{ParamSpec, ToolSpec, ToolTag};

/// Every tool this crate can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    GetTicker,
    GetOrderbook,
    GetKline,
    ListMarkets,
    GetDeals,
    GetIndexPrice,
    GetFundingRate,
    GetFundingRateHistory,
    GetPremiumIndexHistory,
    GetBasisHistory,
    GetMarginTiers,
    GetLiquidationHistory,
    GetAccountBalance,
    PlaceOrder,
    CancelOrder,
    GetOrderHistory,
}

impl Tool {
    pub const ALL: [Tool; 16] = [
        Self::GetTicker,
        Self::GetOrderbook,
        Self::GetKline,
        Self::ListMarkets,
        Self::GetDeals,
        Self::GetIndexPrice,
        Self::GetFundingRate,
        Self::GetFundingRateHistory,
        Self::GetPremiumIndexHistory,
        Self::GetBasisHistory,
        Self::GetMarginTiers,
        Self::GetLiquidationHistory,
        Self::GetAccountBalance,
        Self::PlaceOrder,
        Self::CancelOrder,
        Self::GetOrderHistory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GetTicker => "get_ticker",
            Self::GetOrderbook => "get_orderbook",
            Self::GetKline => "get_kline",
            Self::ListMarkets => "list_markets",
            Self::GetDeals => "get_deals",
            Self::GetIndexPrice => "get_index_price",
            Self::GetFundingRate => "get_funding_rate",
            Self::GetFundingRateHistory => "get_funding_rate_history",
            Self::GetPremiumIndexHistory => "get_premium_index_history",
            Self::GetBasisHistory => "get_basis_history",
            Self::GetMarginTiers => "get_margin_tiers",
            Self::GetLiquidationHistory => "get_liquidation_history",
            Self::GetAccountBalance => "get_account_balance",
            Self::PlaceOrder => "place_order",
            Self::CancelOrder => "cancel_order",
            Self::GetOrderHistory => "get_order_history",
        }
    }

    pub fn tag(&self) -> ToolTag {
        match self {
            Self::GetAccountBalance | Self::PlaceOrder | Self::CancelOrder | Self::GetOrderHistory => {
                ToolTag::Auth
            }
            _ => ToolTag::Public,
        }
    }

    /// Declared description and parameters
    pub fn spec(&self) -> ToolSpec {
        match self {
            Self::GetTicker => market::get_ticker_spec(),
            Self::GetOrderbook => market::get_orderbook_spec(),
            Self::GetKline => market::get_kline_spec(),
            Self::ListMarkets => market::list_markets_spec(),
            Self::GetDeals => market::get_deals_spec(),
            Self::GetIndexPrice => market::get_index_price_spec(),
            Self::GetFundingRate => futures::get_funding_rate_spec(),
            Self::GetFundingRateHistory
            | Self::GetPremiumIndexHistory
            | Self::GetBasisHistory
            | Self::GetLiquidationHistory => futures::history_spec(*self),
            Self::GetMarginTiers => futures::get_margin_tiers_spec(),
            Self::GetAccountBalance => account::get_account_balance_spec(),
            Self::PlaceOrder => account::place_order_spec(),
            Self::CancelOrder => account::cancel_order_spec(),
            Self::GetOrderHistory => account::get_order_history_spec(),
        }
    }

    /// Run the tool with already validated arguments
    pub(crate) async fn run(&self, args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
        match self {
            Self::GetTicker => market::get_ticker(args, ctx).await,
            Self::GetOrderbook => market::get_orderbook(args, ctx).await,
            Self::GetKline => market::get_kline(args, ctx).await,
            Self::ListMarkets => market::list_markets(args, ctx).await,
            Self::GetDeals => market::get_deals(args, ctx).await,
            Self::GetIndexPrice => market::get_index_price(args, ctx).await,
            Self::GetFundingRate => futures::get_funding_rate(args, ctx).await,
            Self::GetFundingRateHistory
            | Self::GetPremiumIndexHistory
            | Self::GetBasisHistory => futures::get_history(*self, args, ctx).await,
            Self::GetMarginTiers => futures::get_margin_tiers(args, ctx).await,
            Self::GetLiquidationHistory => Ok(futures::liquidation_history_unavailable()),
            Self::GetAccountBalance => account::get_account_balance(args, ctx).await,
            Self::PlaceOrder => account::place_order(args, ctx).await,
            Self::CancelOrder => account::cancel_order(args, ctx).await,
            Self::GetOrderHistory => account::get_order_history(args, ctx).await,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| ValidationError::invalid_argument("tool", format!("unknown tool {s:?}")))
    }
}

// ============================================================================
// Shared parameter declarations
// ============================================================================

const MARKET_TYPES: &[&str] = &["spot", "futures", "margin"];
const ORDER_SIDES: &[&str] = &["buy", "sell"];
const ORDER_STATUSES: &[&str] = &["pending", "finished"];
const KLINE_PERIODS: &[&str] = &[
    "1min", "3min", "5min", "15min", "30min", "1hour", "2hour", "4hour", "6hour", "12hour", "1day",
    "3day", "1week",
];

fn base_param() -> ParamSpec {
    ParamSpec::string("base", "Base currency, e.g. BTC, ETH").required()
}

fn optional_base_param(description: &'static str) -> ParamSpec {
    ParamSpec::string("base", description)
}

fn quote_param() -> ParamSpec {
    ParamSpec::string("quote", "Quote currency, default USDT").with_default("USDT")
}

fn market_type_param() -> ParamSpec {
    ParamSpec::string("market_type", "Market type: spot|futures|margin; default spot")
        .with_default("spot")
        .one_of(MARKET_TYPES)
}

fn page_param() -> ParamSpec {
    ParamSpec::integer("page", "Page number; default 1").with_default(1)
}

fn limit_param(description: &'static str, default: i64) -> ParamSpec {
    ParamSpec::integer("limit", description).with_default(default)
}
