//! Authentication credentials for CoinEx API
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretString};

use crate::error::{AuthError, AuthResult};

/// Environment variable holding the API access id
pub const ACCESS_ID_ENV: &str = "COINEX_ACCESS_ID";
/// Environment variable holding the API secret key
pub const SECRET_KEY_ENV: &str = "COINEX_SECRET_KEY";

/// API credentials for authenticated requests
///
/// Immutable after construction and safe to share across concurrent calls.
/// Both halves are guaranteed non-empty.
pub struct Credentials {
    /// Access id (public)
    access_id: String,
    /// Secret key (zeroized on drop)
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an access id and secret key
    ///
    /// # Returns
    /// Error naming the missing half if either value is empty
    pub fn new(access_id: impl Into<String>, secret_key: impl Into<String>) -> AuthResult<Self> {
        let access_id = access_id.into();
        let secret_key = secret_key.into();

        if access_id.trim().is_empty() {
            return Err(AuthError::MissingCredential("access_id"));
        }
        if secret_key.trim().is_empty() {
            return Err(AuthError::MissingCredential("secret_key"));
        }

        Ok(Self {
            access_id,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Create credentials from optional parts
    pub fn from_parts(access_id: Option<String>, secret_key: Option<String>) -> AuthResult<Self> {
        let access_id = access_id.ok_or(AuthError::MissingCredential("access_id"))?;
        let secret_key = secret_key.ok_or(AuthError::MissingCredential("secret_key"))?;
        Self::new(access_id, secret_key)
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINEX_ACCESS_ID` and `COINEX_SECRET_KEY` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let access_id = std::env::var(ACCESS_ID_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(ACCESS_ID_ENV.to_string()))?;
        let secret_key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(SECRET_KEY_ENV.to_string()))?;

        Self::new(access_id, secret_key)
    }

    /// Resolve credentials from explicit values, optionally falling back to the environment
    ///
    /// Each half falls back independently. With `env_fallback` disabled only
    /// the explicit values are considered.
    pub fn resolve(
        access_id: Option<String>,
        secret_key: Option<String>,
        env_fallback: bool,
    ) -> AuthResult<Self> {
        Self::resolve_with(access_id, secret_key, env_fallback, |name| {
            std::env::var(name).ok()
        })
    }

    fn resolve_with<F>(
        access_id: Option<String>,
        secret_key: Option<String>,
        env_fallback: bool,
        lookup: F,
    ) -> AuthResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let mut access_id = non_empty(access_id);
        let mut secret_key = non_empty(secret_key);

        if env_fallback {
            access_id = access_id.or_else(|| non_empty(lookup(ACCESS_ID_ENV)));
            secret_key = secret_key.or_else(|| non_empty(lookup(SECRET_KEY_ENV)));
        }

        Self::from_parts(access_id, secret_key)
    }

    /// Get the access id
    pub fn access_id(&self) -> &str {
        &self.access_id
    }

    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.secret_key.expose_secret().as_bytes()
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretString with same content)
    fn clone(&self) -> Self {
        Self {
            access_id: self.access_id.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible: String = self.access_id.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("access_id", &format!("{visible}..."))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
