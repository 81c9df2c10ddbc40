//! REST API client for the CoinEx cryptocurrency exchange
//!
//! This crate provides a thin client over the CoinEx v2 REST API covering
//! market data, account balances, and order placement/cancellation.
//!
//! # Features
//!
//! - **Market Data**: Market info, tickers, depth, k-lines, deals, index price
//! - **Futures**: Funding rate (current and history), premium/basis history, position levels
//! - **Account**: Balances
//! - **Trading**: Place, cancel, and query orders
//!
//! # Calling convention
//!
//! Every endpoint returns the exchange's own [`ResponseEnvelope`] unchanged,
//! including non-zero exchange codes. Network failures become envelopes with
//! a negative [`SyntheticCode`]. Only caller misuse is raised as a
//! [`RestError`]: missing credentials for a private endpoint, or a parameter
//! outside its allowed set. Neither issues a network call.
//!
//! # Authentication
//!
//! Private endpoints require API credentials. The client signs them with
//! HMAC-SHA256 as specified by the CoinEx v2 API documentation.
//!
//! # Example
//!
//! ```no_run
//! use coinex_rest::{CoinExRestClient, Credentials, Market, MarketType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = CoinExRestClient::new()?;
//!     let market = Market::new("BTC", "USDT")?;
//!     let ticker = client.get_tickers(Some(&market), MarketType::Spot).await?;
//!     println!("BTCUSDT: {:?}", ticker.data);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = CoinExRestClient::with_credentials(creds)?;
//!     let balance = auth_client.get_balances(MarketType::Spot).await?;
//!     println!("Balances: {:?}", balance.data);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Non-goals
//!
//! No retries, rate-limit backoff, caching, or pagination walking. Paging
//! parameters are sent verbatim and the exchange's answer is returned as-is.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod normalize;
pub mod params;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, CoinExRestClient};
pub use error::{RestError, RestResult};
pub use normalize::normalize;
pub use params::RequestParams;
pub use transport::{HttpRequest, RawResponse, ReqwestTransport, Transport, TransportError};
pub use types::{HistoryQuery, OrderRequest, OrdersQuery};

pub use coinex_auth::Credentials;
pub use coinex_types::{
    KlinePeriod, Market, MarketType, OrderSide, OrderStatus, OrderType, ResponseEnvelope,
    SyntheticCode, ValidationError,
};
