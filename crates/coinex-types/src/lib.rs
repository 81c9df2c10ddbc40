//! Shared types for the CoinEx v2 REST API
//!
//! This crate provides the core type definitions used across the CoinEx SDK.
//! It has minimal dependencies and performs no I/O.
//!
//! # Key Types
//!
//! - [`MarketType`], [`OrderSide`], [`OrderStatus`], [`OrderType`], [`KlinePeriod`] - Request enums
//! - [`Market`] - Trading pair symbols (e.g., "BTCUSDT")
//! - [`ResponseEnvelope`] - The uniform `{code, message, data}` response wrapper
//! - [`SyntheticCode`] - Negative codes produced locally for transport failures
//! - [`CoinExErrorCode`] - Known exchange error codes
//! - [`ValidationError`] - Caller-side misuse detected before any network I/O

pub mod enums;
pub mod envelope;
pub mod error;
pub mod error_codes;
pub mod market;

// Re-export commonly used types
pub use enums::*;
pub use envelope::*;
pub use error::*;
pub use error_codes::*;
pub use market::*;
