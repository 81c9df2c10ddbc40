//! End-to-end tool invocation against mock and recording transports

mod common;

use coinex_tools::{
    CredentialScope, ToolError, ToolMode, ToolRegistry, LIQUIDATION_UNAVAILABLE,
};
use common::*;
use serde_json::json;
use wiremock::matchers::{any, body_json, header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn registry() -> ToolRegistry {
    ToolRegistry::new(ToolMode::All)
}

// ============================================================================
// Public tools
// ============================================================================

#[tokio::test]
async fn test_get_ticker_without_base_returns_top_five() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/spot/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(many_tickers())))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = mock_context(&server, CredentialScope::Environment(None));
    let envelope = registry().invoke("get_ticker", json!({}), &ctx).await.unwrap();

    let data = envelope.data_array().unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data[0]["market"], "BTCUSDT");
}

#[tokio::test]
async fn test_get_ticker_with_base_is_not_truncated() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/futures/ticker"))
        .and(query_param("market", "ETHUSDC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(many_tickers())))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = mock_context(&server, CredentialScope::Environment(None));
    let envelope = registry()
        .invoke(
            "get_ticker",
            json!({"base": "ETH", "quote": "USDC", "market_type": "futures"}),
            &ctx,
        )
        .await
        .unwrap();

    assert_eq!(envelope.data_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_get_index_price_top_n() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/spot/index"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(many_tickers())))
        .expect(2)
        .mount(&server)
        .await;

    let ctx = mock_context(&server, CredentialScope::Environment(None));
    let envelope = registry()
        .invoke("get_index_price", json!({"top_n": 3}), &ctx)
        .await
        .unwrap();
    assert_eq!(envelope.data_array().unwrap().len(), 3);

    let envelope = registry()
        .invoke("get_index_price", json!({"top_n": 0}), &ctx)
        .await
        .unwrap();
    assert_eq!(envelope.data_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_get_orderbook_defaults() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/spot/depth"))
        .and(query_param("market", "BTCUSDT"))
        .and(query_param("limit", "20"))
        .and(query_param("interval", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!({
            "market": "BTCUSDT",
            "depth": {"asks": [], "bids": []}
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = mock_context(&server, CredentialScope::Environment(None));
    let envelope = registry()
        .invoke("get_orderbook", json!({"base": "BTC"}), &ctx)
        .await
        .unwrap();
    assert!(envelope.is_success());
}

#[tokio::test]
async fn test_exchange_error_is_returned() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/futures/funding-rate-history"))
        .and(query_param("limit", "100"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 3127,
            "data": {},
            "message": "market not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = mock_context(&server, CredentialScope::Environment(None));
    let envelope = registry()
        .invoke("get_funding_rate_history", json!({"base": "NOPE"}), &ctx)
        .await
        .unwrap();

    assert_eq!(envelope.code, 3127);
    assert_eq!(envelope.message, "market not found");
}

#[tokio::test]
async fn test_liquidation_history_is_answered_locally() {
    let (transport, ctx) = recording_context(CredentialScope::Environment(None));
    let envelope = registry()
        .invoke("get_liquidation_history", json!({"base": "BTC"}), &ctx)
        .await
        .unwrap();

    assert_eq!(envelope.code, -1);
    assert_eq!(envelope.message, LIQUIDATION_UNAVAILABLE);
    assert_eq!(envelope.data, Some(json!([])));
    assert_eq!(transport.call_count(), 0);
}

// ============================================================================
// Boundary validation
// ============================================================================

#[tokio::test]
async fn test_invalid_kline_period_makes_no_call() {
    let (transport, ctx) = recording_context(CredentialScope::Environment(None));

    for period in ["2min", "1h", "1HOUR", "60"] {
        let err = registry()
            .invoke("get_kline", json!({"base": "BTC", "period": period}), &ctx)
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{period}: {err}");
        assert!(err.to_string().contains(period), "{period}: {err}");
    }

    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_arguments_make_no_call() {
    let (transport, ctx) = recording_context(CredentialScope::Environment(None));
    let registry = registry();

    let cases = [
        ("get_ticker", json!({"market_type": "perpetual"})),
        ("get_ticker", json!({"market_type": "SPOT"})),
        ("get_orderbook", json!({})),
        ("get_orderbook", json!({"base": "BTC", "limit": "20"})),
        ("get_deals", json!({"base": "BTC", "since": 5})),
        ("get_order_history", json!({"status": "open"})),
        ("place_order", json!({"base": "BTC", "side": "buy", "amount": "lots"})),
        ("place_order", json!({"base": "BTC", "side": "long", "amount": "1"})),
        ("cancel_order", json!({"base": "BTC", "order_id": -1})),
    ];

    for (tool, args) in cases {
        let err = registry.invoke(tool, args.clone(), &ctx).await.unwrap_err();
        assert!(err.is_validation(), "{tool} {args}: {err}");
    }

    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_over_precise_amount_is_rejected() {
    let (transport, ctx) = recording_context(CredentialScope::Environment(Some(test_credentials())));

    for (field, value) in [
        ("amount", "0.1234567890123456789012345678901"),
        ("price", "50000.00000000000000000000000001"),
    ] {
        let mut args = json!({"base": "BTC", "side": "buy", "amount": "1", "price": "50000"});
        args[field] = json!(value);

        let err = registry().invoke("place_order", args, &ctx).await.unwrap_err();
        assert!(err.is_validation(), "{field}: {err}");
        assert!(err.to_string().contains(field), "{field}: {err}");
    }

    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_order_decimals_are_sent_as_given() {
    let (transport, ctx) = recording_context(CredentialScope::Environment(Some(test_credentials())));

    registry()
        .invoke(
            "place_order",
            json!({
                "base": "BTC",
                "side": "sell",
                "amount": "0.00100",
                "price": "65000.10",
                "trigger_price": "64999.9999999999"
            }),
            &ctx,
        )
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains(r#""amount":"0.00100""#), "{body}");
    assert!(body.contains(r#""price":"65000.10""#), "{body}");
    assert!(body.contains(r#""trigger_price":"64999.9999999999""#), "{body}");
}

// ============================================================================
// Auth tools and credential scopes
// ============================================================================

#[tokio::test]
async fn test_auth_tool_without_credentials() {
    let (transport, ctx) = recording_context(CredentialScope::Environment(None));
    let err = registry()
        .invoke("get_account_balance", json!({}), &ctx)
        .await
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("COINEX_ACCESS_ID"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_request_scope_requires_both_headers() {
    let scope = CredentialScope::from_headers([("X-CoinEx-Access-Id", "abc")]);
    let (transport, ctx) = recording_context(scope);

    let err = registry()
        .invoke("cancel_order", json!({"base": "BTC"}), &ctx)
        .await
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("X-CoinEx-Secret-Key"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_place_order_with_request_scope() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/spot/order"))
        .and(header_exists("X-COINEX-SIGN"))
        .and(body_json(json!({
            "amount": "0",
            "market": "BTCUSDT",
            "market_type": "SPOT",
            "price": "50000",
            "side": "buy",
            "type": "limit"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 4004,
            "data": {},
            "message": "invalid argument"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let scope = CredentialScope::from_headers([
        ("x-coinex-access-id", "test-access-id"),
        ("x-coinex-secret-key", "test-secret-key"),
    ]);
    let ctx = mock_context(&server, scope);
    let envelope = registry()
        .invoke(
            "place_order",
            json!({"base": "BTC", "side": "buy", "amount": "0", "price": "50000"}),
            &ctx,
        )
        .await
        .unwrap();

    assert_eq!(envelope.code, 4004);
    assert_eq!(envelope.message, "invalid argument");
    assert!(!ctx.client().has_credentials());
}

#[tokio::test]
async fn test_cancel_unknown_order_with_environment_scope() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/spot/cancel-order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 3600,
            "data": {},
            "message": "Order not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = mock_context(&server, CredentialScope::Environment(Some(test_credentials())));
    let envelope = registry()
        .invoke("cancel_order", json!({"base": "BTC", "order_id": 999999999}), &ctx)
        .await
        .unwrap();

    assert_eq!(envelope.code, 3600);
    assert_eq!(envelope.message, "Order not found");
}

// ============================================================================
// Exposure mode
// ============================================================================

#[tokio::test]
async fn test_public_mode_hides_auth_tools() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = mock_context(&server, CredentialScope::Environment(Some(test_credentials())));
    let registry = ToolRegistry::new(ToolMode::PublicOnly);

    let err = registry
        .invoke("get_account_balance", json!({}), &ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(name) if name == "get_account_balance"));

    let err = registry.invoke("get_everything", json!({}), &ctx).await.unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(_)));
}
