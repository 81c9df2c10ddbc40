//! Per-invocation context: the public client and the credential scope
//!
//! Each tool call receives the context explicitly. Auth tools build a fresh
//! authenticated client from the scope for that one call; nothing shared is
//! ever mutated.

use coinex_auth::{Credentials, ACCESS_ID_ENV, SECRET_KEY_ENV};
use coinex_rest::CoinExRestClient;
use std::fmt;
use tracing::debug;

use crate::error::{ToolError, ToolResult};

/// Request header carrying the access id in per-request scope
pub const ACCESS_ID_HEADER: &str = "X-CoinEx-Access-Id";
/// Request header carrying the secret key in per-request scope
pub const SECRET_KEY_HEADER: &str = "X-CoinEx-Secret-Key";

/// Where credentials for auth tools come from
#[derive(Clone)]
pub enum CredentialScope {
    /// Resolved once at startup from explicit values or the environment
    Environment(Option<Credentials>),
    /// Supplied with each HTTP request as headers; never falls back to the environment
    Request {
        access_id: Option<String>,
        secret_key: Option<String>,
    },
}

impl CredentialScope {
    /// Resolve startup credentials, falling back to `COINEX_ACCESS_ID`/`COINEX_SECRET_KEY`
    pub fn environment(access_id: Option<String>, secret_key: Option<String>) -> Self {
        match Credentials::resolve(access_id, secret_key, true) {
            Ok(credentials) => Self::Environment(Some(credentials)),
            Err(e) => {
                debug!(error = %e, "No startup credentials");
                Self::Environment(None)
            }
        }
    }

    /// Per-request scope from HTTP-style headers, matched case-insensitively
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut access_id = None;
        let mut secret_key = None;
        for (name, value) in headers {
            if name.eq_ignore_ascii_case(ACCESS_ID_HEADER) {
                access_id = Some(value.to_string());
            } else if name.eq_ignore_ascii_case(SECRET_KEY_HEADER) {
                secret_key = Some(value.to_string());
            }
        }
        Self::Request {
            access_id,
            secret_key,
        }
    }

    /// Credentials for an auth tool, or a configuration error naming what is missing
    pub fn credentials(&self) -> ToolResult<Credentials> {
        match self {
            Self::Environment(Some(credentials)) => Ok(credentials.clone()),
            Self::Environment(None) => Err(ToolError::Configuration(format!(
                "CoinEx API credentials not found. Please set {ACCESS_ID_ENV} and {SECRET_KEY_ENV}"
            ))),
            Self::Request {
                access_id,
                secret_key,
            } => Credentials::resolve(access_id.clone(), secret_key.clone(), false).map_err(|e| {
                ToolError::Configuration(format!(
                    "Request headers must include {ACCESS_ID_HEADER} and {SECRET_KEY_HEADER} \
                     to access account/trading tools ({e})"
                ))
            }),
        }
    }
}

impl fmt::Debug for CredentialScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment(credentials) => f
                .debug_tuple("Environment")
                .field(credentials)
                .finish(),
            Self::Request {
                access_id,
                secret_key,
            } => f
                .debug_struct("Request")
                .field("has_access_id", &access_id.is_some())
                .field("has_secret_key", &secret_key.is_some())
                .finish(),
        }
    }
}

/// Everything a tool invocation may use
#[derive(Debug, Clone)]
pub struct ToolContext {
    client: CoinExRestClient,
    scope: CredentialScope,
}

impl ToolContext {
    pub fn new(client: CoinExRestClient, scope: CredentialScope) -> Self {
        Self { client, scope }
    }

    /// Client for public tools; never carries credentials
    pub fn client(&self) -> &CoinExRestClient {
        &self.client
    }

    pub fn scope(&self) -> &CredentialScope {
        &self.scope
    }

    /// Same public client with a different credential scope, e.g. per HTTP request
    pub fn with_scope(&self, scope: CredentialScope) -> Self {
        Self {
            client: self.client.clone(),
            scope,
        }
    }

    /// Fresh authenticated client for one auth tool call
    pub fn secret_client(&self) -> ToolResult<CoinExRestClient> {
        Ok(self.client.authenticated(self.scope.credentials()?))
    }
}
