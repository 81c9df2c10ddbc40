//! Main REST client implementation

use coinex_auth::{Credentials, RequestSigner};
use coinex_types::{KlinePeriod, Market, MarketType, ResponseEnvelope};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::endpoints::{AccountEndpoints, FuturesEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::normalize::normalize;
use crate::params::RequestParams;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::types::{HistoryQuery, OrderRequest, OrdersQuery};

/// CoinEx API host
pub const DEFAULT_BASE_URL: &str = "https://api.coinex.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("coinex-rest/", env!("CARGO_PKG_VERSION"));

/// CoinEx REST API client
///
/// Provides access to both public and private endpoints. Cloning is cheap;
/// clones share the connection pool and the immutable credentials.
///
/// # Example
///
/// ```no_run
/// use coinex_rest::{CoinExRestClient, Credentials, MarketType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = CoinExRestClient::new()?;
///     let markets = client.get_market_info(None, MarketType::Spot).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = client.authenticated(creds);
///     let balance = auth_client.get_balances(MarketType::Spot).await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinExRestClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    credentials: Option<Arc<Credentials>>,
}

impl CoinExRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a client, picking up credentials from the environment when both are set
    ///
    /// Missing credentials are not an error here: the client is still usable
    /// for public endpoints and private calls fail with
    /// [`RestError::AuthRequired`].
    pub fn from_env() -> RestResult<Self> {
        let mut config = ClientConfig::default();
        match Credentials::from_env() {
            Ok(credentials) => config.credentials = Some(credentials),
            Err(e) => warn!("{e}; account and trading endpoints will be unavailable"),
        }
        Self::with_config(config)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport = ReqwestTransport::new(
            Duration::from_secs(config.timeout_secs),
            config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
        )?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> RestResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(RestError::InvalidConfig(format!(
                "base URL must start with http:// or https://: {}",
                config.base_url
            )));
        }

        info!(
            base_url = %base_url,
            authenticated = config.credentials.is_some(),
            "Created CoinEx REST client"
        );

        Ok(Self {
            transport,
            base_url,
            credentials: config.credentials.map(Arc::new),
        })
    }

    /// New client with the given credentials, sharing this client's transport
    pub fn authenticated(&self, credentials: Credentials) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
            credentials: Some(Arc::new(credentials)),
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Credentials used for private endpoints, if any
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_deref()
    }

    /// API host requests are sent to, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign (when credentials are given), dispatch, and normalize one request
    ///
    /// GET parameters become a sorted query string; other methods send a
    /// compact JSON body. The signed strings are the ones sent.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &RequestParams,
        credentials: Option<&Credentials>,
    ) -> RestResult<ResponseEnvelope> {
        let (query, body) = if method == Method::GET || method == Method::DELETE {
            (params.to_query()?, String::new())
        } else {
            (String::new(), params.to_body()?)
        };

        let mut headers = vec![("Content-Type", "application/json".to_string())];
        if let Some(credentials) = credentials {
            let signed = RequestSigner::new(credentials).sign(method.as_str(), path, &query, &body)?;
            headers.extend(signed.headers());
        }

        let url = if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        };

        debug!(%method, path, signed = credentials.is_some(), "Dispatching request");

        let request = HttpRequest {
            method,
            url,
            headers,
            body: (!body.is_empty()).then_some(body),
        };

        Ok(normalize(self.transport.dispatch(request).await))
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get market status; `None` lists every market
    pub async fn get_market_info(
        &self,
        market: Option<&Market>,
        market_type: MarketType,
    ) -> RestResult<ResponseEnvelope> {
        self.market().get_market_info(market, market_type).await
    }

    /// Get ticker information; `None` returns every market's ticker
    pub async fn get_tickers(
        &self,
        market: Option<&Market>,
        market_type: MarketType,
    ) -> RestResult<ResponseEnvelope> {
        self.market().get_tickers(market, market_type).await
    }

    /// Get orderbook depth
    ///
    /// # Arguments
    /// * `limit` - Number of price levels (5, 10, 20, 50)
    /// * `interval` - Merge granularity, "0" for none
    pub async fn get_depth(
        &self,
        market: &Market,
        market_type: MarketType,
        limit: i64,
        interval: &str,
    ) -> RestResult<ResponseEnvelope> {
        self.market().get_depth(market, market_type, limit, interval).await
    }

    /// Get k-line data
    pub async fn get_kline(
        &self,
        market: &Market,
        market_type: MarketType,
        period: KlinePeriod,
        limit: i64,
    ) -> RestResult<ResponseEnvelope> {
        self.market().get_kline(market, market_type, period, limit).await
    }

    /// Get recent trades
    pub async fn get_deals(
        &self,
        market: &Market,
        market_type: MarketType,
        limit: i64,
    ) -> RestResult<ResponseEnvelope> {
        self.market().get_deals(market, market_type, limit).await
    }

    /// Get index price; `None` returns every market's index
    pub async fn get_index_price(
        &self,
        market: Option<&Market>,
        market_type: MarketType,
    ) -> RestResult<ResponseEnvelope> {
        self.market().get_index_price(market, market_type).await
    }

    // ========================================================================
    // Public Futures Endpoints
    // ========================================================================

    /// Get futures endpoints
    pub fn futures(&self) -> FuturesEndpoints<'_> {
        FuturesEndpoints::new(self)
    }

    /// Get the current funding rate
    pub async fn get_funding_rate(&self, market: &Market) -> RestResult<ResponseEnvelope> {
        self.futures().get_funding_rate(market).await
    }

    /// Get funding rate history
    pub async fn get_funding_rate_history(
        &self,
        market: &Market,
        query: HistoryQuery,
    ) -> RestResult<ResponseEnvelope> {
        self.futures().get_funding_rate_history(market, query).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        let creds = self.credentials.as_deref().ok_or(RestError::AuthRequired)?;
        Ok(AccountEndpoints::new(self, creds))
    }

    /// Get account balance
    pub async fn get_balances(&self, market_type: MarketType) -> RestResult<ResponseEnvelope> {
        self.account()?.get_balances(market_type).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        let creds = self.credentials.as_deref().ok_or(RestError::AuthRequired)?;
        Ok(TradingEndpoints::new(self, creds))
    }

    /// Place a new order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<ResponseEnvelope> {
        self.trading()?.place_order(order).await
    }

    /// Cancel one order, or every order in the market when `order_id` is `None`
    pub async fn cancel_order(
        &self,
        market: &Market,
        market_type: MarketType,
        order_id: Option<u64>,
    ) -> RestResult<ResponseEnvelope> {
        self.trading()?.cancel_order(market, market_type, order_id).await
    }

    /// Query orders
    pub async fn get_orders(&self, query: &OrdersQuery) -> RestResult<ResponseEnvelope> {
        self.trading()?.get_orders(query).await
    }
}

impl std::fmt::Debug for CoinExRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinExRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API host, without a trailing path
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = CoinExRestClient::new().unwrap();
        assert!(!client.has_credentials());
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_base_url("http://localhost:8080/")
            .with_user_agent("test-agent");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));

        let client = CoinExRestClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::new().with_base_url("api.coinex.com");
        let err = CoinExRestClient::with_config(config).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_auth_required_error() {
        let client = CoinExRestClient::new().unwrap();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_authenticated_shares_base_url() {
        let client = CoinExRestClient::with_config(
            ClientConfig::new().with_base_url("http://127.0.0.1:1"),
        )
        .unwrap();
        let creds = Credentials::new("id", "secret").unwrap();
        let auth = client.authenticated(creds);

        assert!(auth.has_credentials());
        assert!(!client.has_credentials());
        assert_eq!(auth.base_url(), client.base_url());
        assert!(auth.account().is_ok());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let creds = Credentials::new("id", "very-secret").unwrap();
        let client = CoinExRestClient::with_credentials(creds).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("has_credentials: true"));
        assert!(!debug.contains("very-secret"));
    }
}
