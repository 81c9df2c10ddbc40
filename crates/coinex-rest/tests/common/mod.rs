//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes returned by the live CoinEx v2 API.

#![allow(dead_code)]

use async_trait::async_trait;
use coinex_rest::{
    ClientConfig, CoinExRestClient, Credentials, HttpRequest, RawResponse, Transport,
    TransportError,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

pub const TEST_ACCESS_ID: &str = "test-access-id";
pub const TEST_SECRET_KEY: &str = "test-secret-key";

/// Base URL given to clients running over a [`RecordingTransport`]
pub const RECORDING_BASE_URL: &str = "https://api.coinex.test";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_ACCESS_ID, TEST_SECRET_KEY).unwrap()
}

/// Unauthenticated client pointed at the mock server
pub fn public_client(server: &MockServer) -> CoinExRestClient {
    CoinExRestClient::with_config(ClientConfig::new().with_base_url(server.uri())).unwrap()
}

/// Authenticated client pointed at the mock server
pub fn auth_client(server: &MockServer) -> CoinExRestClient {
    public_client(server).authenticated(test_credentials())
}

/// Envelope body for a successful response
pub fn ok_body(data: Value) -> Value {
    json!({"code": 0, "data": data, "message": "OK"})
}

/// Envelope body for an exchange-side error
pub fn error_body(code: i64, message: &str) -> Value {
    json!({"code": code, "data": {}, "message": message})
}

pub fn btcusdt_ticker() -> Value {
    json!([{
        "market": "BTCUSDT",
        "last": "97321.05",
        "open": "96100.00",
        "close": "97321.05",
        "high": "98000.00",
        "low": "95800.12",
        "volume": "1523.4471",
        "value": "147583012.55",
        "volume_buy": "812.11",
        "volume_sell": "711.33",
        "period": 86400
    }])
}

pub fn btcusdt_depth() -> Value {
    json!({
        "market": "BTCUSDT",
        "is_full": true,
        "depth": {
            "asks": [["97321.06", "0.512"], ["97321.50", "0.050"], ["97322.00", "1.200"]],
            "bids": [["97321.05", "0.300"], ["97320.00", "0.875"]],
            "last": "97321.05",
            "updated_at": 1700000000000u64,
            "checksum": 2871183046u64
        }
    })
}

/// In-memory transport that records every request and answers with a fixed body
#[derive(Debug)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    response: RawResponse,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Self::responding(RawResponse::new(200, ok_body(json!([])).to_string()))
    }

    pub fn responding(response: RawResponse) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response,
        })
    }

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
        Ok(self.response.clone())
    }
}

/// Client over a recording transport, optionally authenticated
pub fn recording_client(
    transport: &Arc<RecordingTransport>,
    credentials: Option<Credentials>,
) -> CoinExRestClient {
    let mut config = ClientConfig::new().with_base_url(RECORDING_BASE_URL);
    config.credentials = credentials;
    let transport: Arc<dyn Transport> = transport.clone();
    CoinExRestClient::with_transport(config, transport).unwrap()
}

/// Split a recorded URL into path and query
pub fn path_and_query(request: &HttpRequest) -> (String, String) {
    let rest = request.url.strip_prefix(RECORDING_BASE_URL).unwrap();
    match rest.split_once('?') {
        Some((path, query)) => (path.to_string(), query.to_string()),
        None => (rest.to_string(), String::new()),
    }
}
