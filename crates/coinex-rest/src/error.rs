//! Error types for REST API operations
//!
//! Only caller misuse is represented here. Exchange error codes and
//! transport failures are returned as envelopes, never raised.

use coinex_auth::AuthError;
use coinex_types::ValidationError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Missing API credentials for private endpoint
    #[error("Configuration error: access_id and secret_key are required for account and trading endpoints")]
    AuthRequired,

    /// Credentials could not be built or used
    #[error("Configuration error: {0}")]
    Configuration(#[from] AuthError),

    /// Invalid request parameters
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Invalid client settings
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// The underlying HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request parameters could not be encoded
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl RestError {
    /// Check if this error is a configuration problem (credentials or settings)
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::AuthRequired | Self::Configuration(_) | Self::InvalidConfig(_) | Self::Client(_)
        )
    }

    /// Check if this error is a rejected parameter value
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
