//! MCP host for the tool registry
//!
//! Speaks JSON-RPC 2.0 with the MCP methods `initialize`, `ping`,
//! `tools/list` and `tools/call`. Two transports are provided: newline
//! delimited messages over stdio, and HTTP POST where account credentials
//! arrive as request headers.
//!
//! A tool that runs returns its envelope as the call result, including
//! exchange-side failures. Argument and credential problems become results
//! with `isError: true`; only unknown tools and malformed requests are
//! JSON-RPC errors.

mod http;
mod stdio;

pub use http::{router, serve_http, HttpConfig};

use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::registry::ToolRegistry;

/// Name reported in `initialize`
pub const SERVER_NAME: &str = "coinex-mcp-server";

/// Protocol revision used when the client does not ask for one
pub const PROTOCOL_VERSION: &str = "2025-06-18";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

/// JSON-RPC dispatcher over a [`ToolRegistry`]
#[derive(Debug, Clone)]
pub struct McpServer {
    registry: ToolRegistry,
    context: ToolContext,
}

impl McpServer {
    pub fn new(registry: ToolRegistry, context: ToolContext) -> Self {
        Self { registry, context }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Context used when a transport supplies no per-request scope
    pub fn context(&self) -> &ToolContext {
        &self.context
    }

    /// Handle one message with the server's own context
    pub async fn handle(&self, message: Value) -> Option<Value> {
        self.handle_with(message, &self.context).await
    }

    /// Handle one message; `None` for notifications, which get no reply
    pub async fn handle_with(&self, message: Value, ctx: &ToolContext) -> Option<Value> {
        let Value::Object(mut message) = message else {
            return Some(error_response(Value::Null, INVALID_REQUEST, "Invalid Request"));
        };

        let id = message.remove("id");
        let method = match message.remove("method") {
            Some(Value::String(method)) if message.get("jsonrpc") == Some(&json!("2.0")) => method,
            _ => {
                return Some(error_response(
                    id.unwrap_or(Value::Null),
                    INVALID_REQUEST,
                    "Invalid Request",
                ))
            }
        };
        let params = message.remove("params").unwrap_or(Value::Null);

        let Some(id) = id else {
            debug!(%method, "Notification");
            return None;
        };

        debug!(%method, "Request");
        let outcome = match method.as_str() {
            "initialize" => Ok(self.initialize(&params)),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.list_tools()),
            "tools/call" => self.call_tool(params, ctx).await,
            other => Err((METHOD_NOT_FOUND, format!("Method not found: {other}"))),
        };

        Some(match outcome {
            Ok(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
            Err((code, message)) => error_response(id, code, message),
        })
    }

    fn initialize(&self, params: &Value) -> Value {
        let version = params
            .get("protocolVersion")
            .and_then(Value::as_str)
            .unwrap_or(PROTOCOL_VERSION);

        json!({
            "protocolVersion": version,
            "capabilities": {"tools": {"listChanged": false}},
            "serverInfo": {"name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION")},
        })
    }

    fn list_tools(&self) -> Value {
        let tools: Vec<Value> = self.registry.list().iter().map(|spec| spec.to_json()).collect();
        json!({ "tools": tools })
    }

    async fn call_tool(&self, params: Value, ctx: &ToolContext) -> Result<Value, (i64, String)> {
        let mut params = match params {
            Value::Object(params) => params,
            _ => Map::new(),
        };
        let Some(Value::String(name)) = params.remove("name") else {
            return Err((INVALID_PARAMS, "tools/call requires a tool name".to_string()));
        };
        let arguments = params.remove("arguments").unwrap_or(Value::Null);

        match self.registry.invoke(&name, arguments, ctx).await {
            Ok(envelope) => {
                let value = envelope.into_value();
                Ok(json!({
                    "content": [{"type": "text", "text": value.to_string()}],
                    "structuredContent": value,
                    "isError": false,
                }))
            }
            Err(ToolError::UnknownTool(name)) => Err((INVALID_PARAMS, format!("Unknown tool: {name}"))),
            Err(err) => {
                warn!(tool = %name, error = %err, "Tool call rejected");
                Ok(json!({
                    "content": [{"type": "text", "text": err.to_string()}],
                    "isError": true,
                }))
            }
        }
    }
}

fn error_response(id: Value, code: i64, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {"code": code, "message": message.into()},
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CredentialScope;
    use crate::registry::ToolMode;
    use coinex_rest::CoinExRestClient;

    fn server(mode: ToolMode) -> McpServer {
        let ctx = ToolContext::new(
            CoinExRestClient::new().unwrap(),
            CredentialScope::Environment(None),
        );
        McpServer::new(ToolRegistry::new(mode), ctx)
    }

    #[tokio::test]
    async fn test_initialize_echoes_protocol_version() {
        let response = server(ToolMode::All)
            .handle(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {"protocolVersion": "2025-03-26", "capabilities": {}}
            }))
            .await
            .unwrap();

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], "2025-03-26");
        assert_eq!(response["result"]["serverInfo"]["name"], SERVER_NAME);
    }

    #[tokio::test]
    async fn test_notifications_get_no_reply() {
        let response = server(ToolMode::All)
            .handle(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
            .await;
        assert_eq!(response, None);
    }

    #[tokio::test]
    async fn test_list_follows_exposure_mode() {
        let response = server(ToolMode::PublicOnly)
            .handle(json!({"jsonrpc": "2.0", "id": "a", "method": "tools/list"}))
            .await
            .unwrap();

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 12);
        assert!(tools.iter().all(|tool| tool["inputSchema"]["type"] == "object"));
        assert!(tools.iter().all(|tool| tool["name"] != "place_order"));
    }

    #[tokio::test]
    async fn test_protocol_errors() {
        let server = server(ToolMode::PublicOnly);

        let response = server
            .handle(json!({"jsonrpc": "2.0", "id": 2, "method": "resources/list"}))
            .await
            .unwrap();
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);

        let response = server
            .handle(json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {"name": "place_order"}}))
            .await
            .unwrap();
        assert_eq!(response["error"]["code"], INVALID_PARAMS);

        let response = server.handle(json!({"id": 4, "method": "ping"})).await.unwrap();
        assert_eq!(response["error"]["code"], INVALID_REQUEST);
        assert_eq!(response["id"], 4);

        let response = server.handle(json!([1, 2])).await.unwrap();
        assert_eq!(response["error"]["code"], INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_rejected_arguments_are_tool_errors() {
        let response = server(ToolMode::All)
            .handle(json!({
                "jsonrpc": "2.0",
                "id": 5,
                "method": "tools/call",
                "params": {"name": "get_kline", "arguments": {"base": "BTC", "period": "1h"}}
            }))
            .await
            .unwrap();

        assert_eq!(response["result"]["isError"], true);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("period"), "{text}");
    }
}
