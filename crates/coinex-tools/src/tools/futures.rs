//! Public futures tools

use coinex_rest::HistoryQuery;
use coinex_types::ResponseEnvelope;
use serde_json::json;

use super::*;

/// Message of the fixed liquidation-history envelope
pub const LIQUIDATION_UNAVAILABLE: &str = "Liquidation history not available in current API version";

pub(super) fn get_funding_rate_spec() -> ToolSpec {
    ToolSpec::new(Tool::GetFundingRate, "Get the current funding rate (futures only)")
        .param(base_param())
        .param(quote_param())
}

pub(super) async fn get_funding_rate(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let market = args.market()?;
    Ok(ctx.client().get_funding_rate(&market).await?)
}

/// Shared declaration of the time-ranged history tools
pub(super) fn history_spec(tool: Tool) -> ToolSpec {
    let description = match tool {
        Tool::GetFundingRateHistory => "Get funding rate history (futures only)",
        Tool::GetPremiumIndexHistory => "Get premium index history (futures only)",
        Tool::GetBasisHistory => "Get basis history (futures only)",
        _ => "Get liquidation history (futures only; not available in the current API version)",
    };

    ToolSpec::new(tool, description)
        .param(base_param())
        .param(quote_param())
        .param(ParamSpec::integer("start_time", "Start timestamp (milliseconds)"))
        .param(ParamSpec::integer("end_time", "End timestamp (milliseconds)"))
        .param(page_param())
        .param(limit_param("Number of records; default 100", 100))
}

pub(super) async fn get_history(
    tool: Tool,
    args: &ToolArgs,
    ctx: &ToolContext,
) -> ToolResult<ResponseEnvelope> {
    let market = args.market()?;
    let query = HistoryQuery {
        start_time: args.i64("start_time"),
        end_time: args.i64("end_time"),
        page: args.i64_or("page", 1),
        limit: args.i64_or("limit", 100),
    };

    let futures = ctx.client().futures();
    let envelope = match tool {
        Tool::GetPremiumIndexHistory => futures.get_premium_index_history(&market, query).await?,
        Tool::GetBasisHistory => futures.get_basis_history(&market, query).await?,
        _ => futures.get_funding_rate_history(&market, query).await?,
    };
    Ok(envelope)
}

pub(super) fn get_margin_tiers_spec() -> ToolSpec {
    ToolSpec::new(Tool::GetMarginTiers, "Get margin tiers / position levels (futures only)")
        .param(base_param())
        .param(quote_param())
}

pub(super) async fn get_margin_tiers(args: &ToolArgs, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
    let market = args.market()?;
    Ok(ctx.client().futures().get_position_level(&market).await?)
}

/// The exchange has no liquidation history endpoint; answered locally
pub(super) fn liquidation_history_unavailable() -> ResponseEnvelope {
    ResponseEnvelope::with_code(-1, LIQUIDATION_UNAVAILABLE, Some(json!([])))
}
