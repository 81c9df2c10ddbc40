//! Error types for tool invocation
//!
//! A tool invocation either returns an envelope (including exchange-side
//! failures) or raises one of these for caller misuse. Nothing here is
//! produced after a request has been sent.

use coinex_auth::AuthError;
use coinex_rest::RestError;
use coinex_types::ValidationError;

/// Errors raised by the tool layer
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// No such tool, or the tool is hidden by the exposure mode
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Credentials required by an auth tool are missing or unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An argument was rejected before any request was made
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The REST client refused the call
    #[error(transparent)]
    Rest(RestError),
}

impl ToolError {
    /// Check if this error is a configuration problem
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if this error is a rejected argument
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<AuthError> for ToolError {
    fn from(err: AuthError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<RestError> for ToolError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Validation(e) => Self::Validation(e),
            e if e.is_configuration() => Self::Configuration(e.to_string()),
            e => Self::Rest(e),
        }
    }
}

/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;
