//! Error types for authentication operations

/// Errors that can occur while building or using credentials
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// One or both halves of the credential pair are absent or empty
    #[error("{0} is required for account and trading endpoints")]
    MissingCredential(&'static str),

    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// System clock is before the Unix epoch
    #[error("System clock error: time went backwards")]
    SystemClock,
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
