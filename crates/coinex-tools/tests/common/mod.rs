//! Common test utilities for tool invocation tests

#![allow(dead_code)]

use async_trait::async_trait;
use coinex_rest::{
    ClientConfig, CoinExRestClient, Credentials, HttpRequest, RawResponse, Transport,
    TransportError,
};
use coinex_tools::{CredentialScope, ToolContext};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new("test-access-id", "test-secret-key").unwrap()
}

pub fn ok_body(data: Value) -> Value {
    json!({"code": 0, "data": data, "message": "OK"})
}

/// Context over the mock server with the given credential scope
pub fn mock_context(server: &MockServer, scope: CredentialScope) -> ToolContext {
    let client =
        CoinExRestClient::with_config(ClientConfig::new().with_base_url(server.uri())).unwrap();
    ToolContext::new(client, scope)
}

/// Ten ticker entries, BTC first
pub fn many_tickers() -> Value {
    let entries: Vec<Value> = ["BTC", "ETH", "SOL", "XRP", "DOGE", "ADA", "TRX", "LINK", "DOT", "LTC"]
        .iter()
        .map(|base| json!({"market": format!("{base}USDT"), "last": "1.0"}))
        .collect();
    Value::Array(entries)
}

/// Transport that records requests and never touches the network
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn dispatch(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(RawResponse::new(200, ok_body(json!([])).to_string()))
    }
}

/// Context over a recording transport
pub fn recording_context(scope: CredentialScope) -> (Arc<RecordingTransport>, ToolContext) {
    let transport = Arc::new(RecordingTransport::default());
    let shared: Arc<dyn Transport> = transport.clone();
    let client = CoinExRestClient::with_transport(ClientConfig::new(), shared).unwrap();
    (transport, ToolContext::new(client, scope))
}
