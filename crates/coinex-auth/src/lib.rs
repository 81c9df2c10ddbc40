//! Credential store and request signing for the CoinEx v2 API
//!
//! Private CoinEx endpoints authenticate each request with three headers:
//! the access id, an HMAC-SHA256 signature, and a millisecond timestamp.
//!
//! # Example
//!
//! ```no_run
//! use coinex_auth::{Credentials, RequestSigner};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load credentials from environment
//! let creds = Credentials::from_env()?;
//!
//! // Sign a request immediately before dispatch
//! let signed = RequestSigner::new(&creds).sign("GET", "/v2/assets/spot/balance", "", "")?;
//! for (name, value) in signed.headers() {
//!     println!("{name}: {value}");
//! }
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{Credentials, ACCESS_ID_ENV, SECRET_KEY_ENV};
pub use error::{AuthError, AuthResult};
pub use signer::{
    prepare_string, timestamp_ms, RequestSigner, SignedRequest, HEADER_KEY, HEADER_SIGN,
    HEADER_TIMESTAMP,
};
