//! Command-line host for the CoinEx tools
//!
//! `list`, `schema` and `call` print JSON on stdout; `serve` runs the MCP
//! server over stdio or HTTP. Logs always go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use coinex_rest::{ClientConfig, CoinExRestClient};
use coinex_tools::{CredentialScope, HttpConfig, McpServer, ToolContext, ToolMode, ToolRegistry};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "coinex-tools")]
#[command(about = "Call CoinEx market, account, and trading tools", long_about = None)]
struct Args {
    /// API access id (falls back to COINEX_ACCESS_ID)
    #[arg(long)]
    access_id: Option<String>,

    /// API secret key (falls back to COINEX_SECRET_KEY)
    #[arg(long)]
    secret_key: Option<String>,

    /// API host
    #[arg(long, env = "COINEX_BASE_URL", default_value = "https://api.coinex.com")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Which tools to expose
    #[arg(long, value_enum, default_value_t = Expose::All)]
    expose: Expose,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List exposed tools with their parameter schemas
    List,

    /// Show the schema of one tool
    Schema {
        /// Tool name, e.g. get_ticker
        tool: String,
    },

    /// Invoke a tool and print the response envelope
    Call {
        /// Tool name, e.g. get_ticker
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },

    /// Run as an MCP server
    Serve {
        #[arg(long, value_enum, default_value_t = Transport::Stdio)]
        transport: Transport,

        /// Bind address (http only)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port (http only)
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Endpoint path (http only)
        #[arg(long, default_value = "/mcp")]
        path: String,

        /// Expose account and trading tools over http (also HTTP_AUTH_ENABLED)
        #[arg(long)]
        enable_http_auth: bool,

        /// Require this bearer token on http requests
        #[arg(long, env = "API_TOKEN", hide_env_values = true)]
        api_token: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Transport {
    /// Newline-delimited JSON-RPC on stdin/stdout; credentials from flags or environment
    Stdio,
    /// JSON-RPC over HTTP POST; credentials from request headers only
    Http,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Expose {
    /// Public market data tools only
    Public,
    /// Public and account/trading tools
    All,
}

impl From<Expose> for ToolMode {
    fn from(expose: Expose) -> Self {
        match expose {
            Expose::Public => ToolMode::PublicOnly,
            Expose::All => ToolMode::All,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Existing variables win over .env entries
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded environment from .env"),
        Err(_) => info!(".env not found, using process environment"),
    }

    let args = Args::parse();
    let registry = ToolRegistry::new(args.expose.into());

    match &args.command {
        Command::List => {
            let specs: Vec<Value> = registry.list().iter().map(|spec| spec.to_json()).collect();
            print_json(&Value::Array(specs))
        }
        Command::Schema { tool } => {
            let spec = registry
                .spec(tool)
                .with_context(|| format!("Unknown tool: {tool}"))?;
            print_json(&spec.to_json())
        }
        Command::Call { tool, args: raw } => {
            let tool_args: Value =
                serde_json::from_str(raw).context("--args must be a JSON object")?;
            let ctx = ToolContext::new(build_client(&args)?, environment_scope(&args));
            let envelope = registry.invoke(tool, tool_args, &ctx).await?;
            print_json(&envelope.into_value())
        }
        Command::Serve {
            transport: Transport::Stdio,
            ..
        } => {
            let ctx = ToolContext::new(build_client(&args)?, environment_scope(&args));
            McpServer::new(registry, ctx)
                .serve_stdio()
                .await
                .context("stdio transport failed")
        }
        Command::Serve {
            transport: Transport::Http,
            host,
            port,
            path,
            enable_http_auth,
            api_token,
        } => {
            info!("HTTP mode: environment credential fallback disabled");
            if args.access_id.is_some() || args.secret_key.is_some() {
                warn!("--access-id/--secret-key are ignored over http, send request headers instead");
            }

            let mode = if *enable_http_auth || env_flag("HTTP_AUTH_ENABLED") {
                args.expose.into()
            } else {
                info!("HTTP authentication disabled, exposing public tools only");
                ToolMode::PublicOnly
            };
            let scope = CredentialScope::Request {
                access_id: None,
                secret_key: None,
            };
            let server = McpServer::new(
                ToolRegistry::new(mode),
                ToolContext::new(build_client(&args)?, scope),
            );
            let config = HttpConfig {
                host: host.clone(),
                port: *port,
                path: path.clone(),
                api_token: api_token.clone(),
            };

            coinex_tools::server::serve_http(Arc::new(server), config)
                .await
                .context("http transport failed")
        }
    }
}

fn build_client(args: &Args) -> Result<CoinExRestClient> {
    let config = ClientConfig::new()
        .with_base_url(args.base_url.as_str())
        .with_timeout(args.timeout);
    CoinExRestClient::with_config(config).context("Failed to create CoinEx client")
}

/// Startup credentials from flags, falling back to the environment
fn environment_scope(args: &Args) -> CredentialScope {
    let scope = CredentialScope::environment(args.access_id.clone(), args.secret_key.clone());
    if matches!(scope, CredentialScope::Environment(None)) {
        warn!("CoinEx API credentials not found, account and trading tools will be unavailable");
    }
    scope
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
