//! JSON-RPC over HTTP POST
//!
//! Each request gets its own credential scope built from the
//! `X-CoinEx-Access-Id`/`X-CoinEx-Secret-Key` headers. The environment is
//! never consulted, so one host can serve several accounts.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::io;
use std::sync::Arc;
use tracing::{info, warn};

use super::{error_response, McpServer, PARSE_ERROR};
use crate::context::CredentialScope;

/// Listener settings for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Route that accepts JSON-RPC messages
    pub path: String,
    /// When set, requests must carry `Authorization: Bearer <token>`
    pub api_token: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            path: "/mcp".to_string(),
            api_token: None,
        }
    }
}

#[derive(Clone)]
struct HttpState {
    server: Arc<McpServer>,
    api_token: Option<Arc<str>>,
}

/// Router serving the MCP endpoint at `config.path`
pub fn router(server: Arc<McpServer>, config: &HttpConfig) -> Router {
    let state = HttpState {
        server,
        api_token: config.api_token.as_deref().map(Arc::from),
    };

    Router::new()
        .route(&config.path, post(handle_message))
        .with_state(state)
}

/// Bind and serve until the listener fails
pub async fn serve_http(server: Arc<McpServer>, config: HttpConfig) -> io::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        addr = %addr,
        path = %config.path,
        mode = ?server.registry().mode(),
        bearer_auth = config.api_token.is_some(),
        "MCP server listening on HTTP"
    );

    axum::serve(listener, router(server, &config)).await
}

async fn handle_message(State(state): State<HttpState>, headers: HeaderMap, body: Bytes) -> Response {
    if let Some(token) = &state.api_token {
        if !has_bearer(&headers, token) {
            warn!("Rejected request without a valid bearer token");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "invalid_token"})),
            )
                .into_response();
        }
    }

    let message: Value = match serde_json::from_slice(&body) {
        Ok(message) => message,
        Err(e) => {
            let reply = error_response(Value::Null, PARSE_ERROR, format!("Parse error: {e}"));
            return (StatusCode::BAD_REQUEST, Json(reply)).into_response();
        }
    };

    let scope = CredentialScope::from_headers(
        headers
            .iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|value| (name.as_str(), value))),
    );
    let ctx = state.server.context().with_scope(scope);

    match state.server.handle_with(message, &ctx).await {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

fn has_bearer(headers: &HeaderMap, token: &str) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|given| given == token)
}
