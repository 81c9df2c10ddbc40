//! Public market data tools

use coinex_types::{KlinePeriod, MarketType, ResponseEnvelope};

use super::*;

const TICKER_TOP_N: usize = 5;

pub(super) fn get_ticker_spec() -> ToolSpec {
    ToolSpec::new(
        Tool::GetTicker,
        "Get a trading pair's recent price, 24h price and volume. \
         Returns the first 5 entries when no base is given.",
    )
    .param(optional_base_param("Base currency, e.g. BTC, ETH; returns top 5 when empty"))
    .param(quote_param())
    .param(market_type_param())
}

pub(super) async fn get_ticker(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let market = args.market_filter()?;
    let market_type = args.parse_or("market_type", MarketType::Spot)?;

    let mut envelope = ctx.client().get_tickers(market.as_ref(), market_type).await?;
    if market.is_none() && envelope.is_success() {
        envelope.truncate_data(TICKER_TOP_N);
    }
    Ok(envelope)
}

pub(super) fn get_orderbook_spec() -> ToolSpec {
    ToolSpec::new(Tool::GetOrderbook, "Get order book (depth) for a spot or futures market")
        .param(base_param())
        .param(quote_param())
        .param(limit_param("Number of price levels: 5/10/20/50; default 20", 20))
        .param(market_type_param())
        .param(
            ParamSpec::string("interval", "Merge granularity, default 0 (no merging)")
                .with_default("0"),
        )
}

pub(super) async fn get_orderbook(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let market = args.market()?;
    let market_type = args.parse_or("market_type", MarketType::Spot)?;
    let limit = args.i64_or("limit", 20);
    let interval = args.str_or("interval", "0");

    Ok(ctx
        .client()
        .get_depth(&market, market_type, limit, interval)
        .await?)
}

pub(super) fn get_kline_spec() -> ToolSpec {
    ToolSpec::new(Tool::GetKline, "Get k-line (candlestick) data for a spot or futures market")
        .param(base_param())
        .param(quote_param())
        .param(
            ParamSpec::string("period", "K-line period; default 1hour")
                .with_default("1hour")
                .one_of(KLINE_PERIODS),
        )
        .param(limit_param("Number of records; default 100", 100))
        .param(market_type_param())
}

pub(super) async fn get_kline(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let market = args.market()?;
    let period = args.parse_or("period", KlinePeriod::H1)?;
    let market_type = args.parse_or("market_type", MarketType::Spot)?;
    let limit = args.i64_or("limit", 100);

    Ok(ctx
        .client()
        .get_kline(&market, market_type, period, limit)
        .await?)
}

pub(super) fn list_markets_spec() -> ToolSpec {
    ToolSpec::new(Tool::ListMarkets, "List market status for spot or futures")
        .param(market_type_param())
        .param(optional_base_param("Base currency to filter; lists every market when empty"))
        .param(quote_param())
}

pub(super) async fn list_markets(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let market = args.market_filter()?;
    let market_type = args.parse_or("market_type", MarketType::Spot)?;

    Ok(ctx
        .client()
        .get_market_info(market.as_ref(), market_type)
        .await?)
}

pub(super) fn get_deals_spec() -> ToolSpec {
    ToolSpec::new(Tool::GetDeals, "Get recent trades (deals)")
        .param(base_param())
        .param(quote_param())
        .param(market_type_param())
        .param(limit_param("Number of trades; default 100, max 1000", 100))
}

pub(super) async fn get_deals(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let market = args.market()?;
    let market_type = args.parse_or("market_type", MarketType::Spot)?;
    let limit = args.i64_or("limit", 100);

    Ok(ctx.client().get_deals(&market, market_type, limit).await?)
}

pub(super) fn get_index_price_spec() -> ToolSpec {
    ToolSpec::new(
        Tool::GetIndexPrice,
        "Get market index price. Returns the top N entries when no base is given.",
    )
    .param(market_type_param())
    .param(optional_base_param("Base currency; returns multi-market index when empty"))
    .param(quote_param())
    .param(
        ParamSpec::integer("top_n", "Entries to return when no base is given; default 5")
            .with_default(5),
    )
}

pub(super) async fn get_index_price(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let market = args.market_filter()?;
    let market_type = args.parse_or("market_type", MarketType::Spot)?;
    let top_n = args.i64_or("top_n", 5);

    let mut envelope = ctx
        .client()
        .get_index_price(market.as_ref(), market_type)
        .await?;

    // non-positive top_n disables truncation
    if market.is_none() && envelope.is_success() && top_n > 0 {
        envelope.truncate_data(usize::try_from(top_n).unwrap_or(usize::MAX));
    }
    Ok(envelope)
}
