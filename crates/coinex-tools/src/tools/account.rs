//! Account and trading tools
//!
//! Every tool here builds a fresh authenticated client from the credential
//! scope. Arguments are validated before credentials are looked at, so a bad
//! argument is reported as such even without credentials.

use coinex_rest::{OrderRequest, OrdersQuery};
use coinex_types::{MarketType, OrderSide, OrderStatus, ResponseEnvelope, ValidationError};
use tracing::warn;

use super::*;

pub(super) fn get_account_balance_spec() -> ToolSpec {
    ToolSpec::new(Tool::GetAccountBalance, "Get account balances (requires authentication)")
        .param(market_type_param())
}

pub(super) async fn get_account_balance(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let market_type = args.parse_or("market_type", MarketType::Spot)?;
    let client = ctx.secret_client()?;
    Ok(client.get_balances(market_type).await?)
}

pub(super) fn place_order_spec() -> ToolSpec {
    ToolSpec::new(
        Tool::PlaceOrder,
        "Place an order (requires authentication, real funds). \
         Confirm with the end user before calling.",
    )
    .param(base_param())
    .param(
        ParamSpec::string("side", "Order side: buy|sell")
            .required()
            .one_of(ORDER_SIDES),
    )
    .param(
        ParamSpec::decimal("amount", "Order quantity, must meet precision and minimum volume")
            .required(),
    )
    .param(quote_param())
    .param(ParamSpec::decimal("price", "Limit price; a market order when omitted"))
    .param(ParamSpec::boolean("is_hide", "Place a hidden order"))
    .param(ParamSpec::string("client_id", "Custom order id"))
    .param(ParamSpec::decimal("trigger_price", "Trigger price; places a stop order"))
    .param(ParamSpec::string("stp_mode", "Self-trade prevention mode"))
    .param(market_type_param())
}

pub(super) async fn place_order(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let side: OrderSide = args.required_str("side")?.parse()?;
    let mut order = OrderRequest::builder()
        .side(side)
        .market(args.market()?)
        .amount(args.required_decimal("amount")?)
        .market_type(args.parse_or("market_type", MarketType::Spot)?)
        .is_hide(args.bool_or("is_hide", false))
        .build();
    order.price = args.decimal("price")?;
    order.trigger_price = args.decimal("trigger_price")?;
    order.client_id = args.str("client_id").map(str::to_string);
    order.stp_mode = args.str("stp_mode").map(str::to_string);

    let client = ctx.secret_client()?;
    warn!(market = %order.market, side = %order.side, amount = %order.amount, "Placing real order");
    Ok(client.place_order(&order).await?)
}

pub(super) fn cancel_order_spec() -> ToolSpec {
    ToolSpec::new(
        Tool::CancelOrder,
        "Cancel an order, or every order in the market when no order_id is given \
         (requires authentication)",
    )
    .param(base_param())
    .param(quote_param())
    .param(ParamSpec::integer("order_id", "Order id to cancel; cancels all orders when empty"))
    .param(market_type_param())
}

pub(super) async fn cancel_order(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let market = args.market()?;
    let market_type = args.parse_or("market_type", MarketType::Spot)?;
    let order_id = args
        .i64("order_id")
        .map(|id| {
            u64::try_from(id).map_err(|_| {
                ValidationError::invalid_argument("order_id", "must be a non-negative integer")
            })
        })
        .transpose()?;

    let client = ctx.secret_client()?;
    Ok(client.cancel_order(&market, market_type, order_id).await?)
}

pub(super) fn get_order_history_spec() -> ToolSpec {
    ToolSpec::new(Tool::GetOrderHistory, "Get order history (requires authentication)")
        .param(optional_base_param("Base currency; queries all markets when empty"))
        .param(quote_param())
        .param(ParamSpec::string("side", "Order side: buy|sell").one_of(ORDER_SIDES))
        .param(
            ParamSpec::string("status", "Order status: pending|finished; default finished")
                .with_default("finished")
                .one_of(ORDER_STATUSES),
        )
        .param(ParamSpec::boolean("is_stop", "Query stop orders; default false").with_default(false))
        .param(page_param())
        .param(limit_param("Number of orders; default 100", 100))
        .param(market_type_param())
}

pub(super) async fn get_order_history(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let query = OrdersQuery {
        market: args.market_filter()?,
        market_type: args.parse_or("market_type", MarketType::Spot)?,
        side: args.parse_opt("side")?,
        status: args.parse_or("status", OrderStatus::Finished)?,
        is_stop: args.bool_or("is_stop", false),
        page: args.i64_or("page", 1),
        limit: args.i64_or("limit", 100),
    };

    let client = ctx.secret_client()?;
    Ok(client.get_orders(&query).await?)
}
