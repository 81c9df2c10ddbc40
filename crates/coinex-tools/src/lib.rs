//! Named, schema-described tools over the CoinEx REST client
//!
//! Each tool validates its JSON arguments once at the boundary, calls one
//! endpoint, and returns the exchange's `{code, message, data}` envelope.
//! The [`server`] module hosts the registry as an MCP server over stdio or
//! HTTP.
//!
//! # Example
//!
//! ```no_run
//! use coinex_rest::CoinExRestClient;
//! use coinex_tools::{CredentialScope, ToolContext, ToolMode, ToolRegistry};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = ToolRegistry::new(ToolMode::All);
//!     let ctx = ToolContext::new(
//!         CoinExRestClient::new()?,
//!         CredentialScope::environment(None, None),
//!     );
//!
//!     let ticker = registry
//!         .invoke("get_ticker", json!({"base": "BTC"}), &ctx)
//!         .await?;
//!     println!("{}", ticker.into_value());
//!     Ok(())
//! }
//! ```

pub mod args;
pub mod context;
pub mod error;
pub mod registry;
pub mod schema;
pub mod server;
pub mod tools;

pub use args::ToolArgs;
pub use context::{CredentialScope, ToolContext, ACCESS_ID_HEADER, SECRET_KEY_HEADER};
pub use error::{ToolError, ToolResult};
pub use registry::{ToolMode, ToolRegistry};
pub use schema::{ParamKind, ParamSpec, ToolSpec, ToolTag};
pub use server::{HttpConfig, McpServer};
pub use tools::{Tool, LIQUIDATION_UNAVAILABLE};
