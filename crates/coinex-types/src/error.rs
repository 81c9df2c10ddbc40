//! Validation errors for caller-supplied parameters

use thiserror::Error;

/// A parameter supplied by the caller is outside its allowed set
///
/// These are programmer errors. They are raised before any request is built,
/// so no network call ever happens for a value that fails here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Unknown market type string
    #[error("invalid market type: {0} (supported: spot, margin, futures)")]
    InvalidMarketType(String),

    /// Unknown order side string
    #[error("invalid order side: {0} (supported: buy, sell)")]
    InvalidOrderSide(String),

    /// Unknown order status string
    #[error("invalid order status: {0} (supported: pending, finished)")]
    InvalidOrderStatus(String),

    /// Unknown order type string
    #[error("invalid order type: {0} (supported: limit, market)")]
    InvalidOrderType(String),

    /// Unsupported k-line period
    #[error("unsupported kline period: {period} (supported: {supported})")]
    InvalidKlinePeriod {
        period: String,
        supported: &'static str,
    },

    /// Only one half of a base/quote pair was given
    #[error("base currency is {base:?} and quote currency is {quote:?}, a market needs both")]
    IncompleteMarket {
        base: Option<String>,
        quote: Option<String>,
    },

    /// A required field was empty
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// An argument had the wrong shape
    #[error("invalid value for {field}: {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl ValidationError {
    /// Build an [`ValidationError::InvalidArgument`]
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
