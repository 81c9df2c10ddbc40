//! Known CoinEx v2 API error codes
//!
//! The client never acts on these: exchange codes are passed through to the
//! caller verbatim. This catalogue only helps callers branch on them.

use crate::envelope::ResponseEnvelope;

/// Codes the exchange uses for authentication and signing failures
pub const AUTH_ERROR_CODES: &[i64] = &[4005, 4006, 4008, 4010, 4017, 10008, 10009, 10012, 10013];

/// CoinEx error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Key, signature, or timestamp problems
    Authentication,
    /// Bad request parameters
    Parameter,
    /// Order or trade state errors
    Order,
    /// Exchange-side availability
    Service,
    /// Request frequency limits
    RateLimit,
    /// Anything not in the catalogue
    Unknown,
}

/// Known CoinEx error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinExErrorCode {
    /// 3008: Service busy
    ServiceBusy,
    /// 3109: Insufficient balance
    InsufficientBalance,
    /// 3127: Order quantity below the market minimum
    AmountTooSmall,
    /// 3600: Order not found
    OrderNotFound,
    /// 4001: Service unavailable
    ServiceUnavailable,
    /// 4002: Service request timed out
    ServiceTimeout,
    /// 4003: Internal error
    InternalError,
    /// 4004: Invalid argument
    InvalidArgument,
    /// 4005: Abnormal access_id
    InvalidAccessId,
    /// 4006: Signature verification failed
    SignatureVerificationFailed,
    /// 4007: IP address prohibited
    IpProhibited,
    /// 4008: Abnormal X-COINEX-SIGN value
    InvalidSignature,
    /// 4009: Abnormal request method
    InvalidRequestMethod,
    /// 4010: Expired request
    RequestExpired,
    /// 4011: User prohibited from accessing
    UserProhibited,
    /// 4017: Signature expired
    SignatureExpired,
    /// 4115: Market trading prohibited
    MarketTradingProhibited,
    /// 4213: Request too frequent
    RateLimited,
}

impl CoinExErrorCode {
    /// Look up a numeric code
    pub fn from_code(code: i64) -> Option<Self> {
        let known = match code {
            3008 => Self::ServiceBusy,
            3109 => Self::InsufficientBalance,
            3127 => Self::AmountTooSmall,
            3600 => Self::OrderNotFound,
            4001 => Self::ServiceUnavailable,
            4002 => Self::ServiceTimeout,
            4003 => Self::InternalError,
            4004 => Self::InvalidArgument,
            4005 => Self::InvalidAccessId,
            4006 => Self::SignatureVerificationFailed,
            4007 => Self::IpProhibited,
            4008 => Self::InvalidSignature,
            4009 => Self::InvalidRequestMethod,
            4010 => Self::RequestExpired,
            4011 => Self::UserProhibited,
            4017 => Self::SignatureExpired,
            4115 => Self::MarketTradingProhibited,
            4213 => Self::RateLimited,
            _ => return None,
        };
        Some(known)
    }

    /// Numeric value of this code
    pub fn code(&self) -> i64 {
        match self {
            Self::ServiceBusy => 3008,
            Self::InsufficientBalance => 3109,
            Self::AmountTooSmall => 3127,
            Self::OrderNotFound => 3600,
            Self::ServiceUnavailable => 4001,
            Self::ServiceTimeout => 4002,
            Self::InternalError => 4003,
            Self::InvalidArgument => 4004,
            Self::InvalidAccessId => 4005,
            Self::SignatureVerificationFailed => 4006,
            Self::IpProhibited => 4007,
            Self::InvalidSignature => 4008,
            Self::InvalidRequestMethod => 4009,
            Self::RequestExpired => 4010,
            Self::UserProhibited => 4011,
            Self::SignatureExpired => 4017,
            Self::MarketTradingProhibited => 4115,
            Self::RateLimited => 4213,
        }
    }

    /// Category of this code
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAccessId
            | Self::SignatureVerificationFailed
            | Self::InvalidSignature
            | Self::RequestExpired
            | Self::SignatureExpired
            | Self::IpProhibited
            | Self::UserProhibited => ErrorCategory::Authentication,
            Self::InvalidArgument | Self::InvalidRequestMethod => ErrorCategory::Parameter,
            Self::InsufficientBalance
            | Self::AmountTooSmall
            | Self::OrderNotFound
            | Self::MarketTradingProhibited => ErrorCategory::Order,
            Self::ServiceBusy
            | Self::ServiceUnavailable
            | Self::ServiceTimeout
            | Self::InternalError => ErrorCategory::Service,
            Self::RateLimited => ErrorCategory::RateLimit,
        }
    }
}

/// Check if a code belongs to the authentication-failure family
pub fn is_auth_error_code(code: i64) -> bool {
    AUTH_ERROR_CODES.contains(&code)
}

/// Categorise any numeric code, known or not
pub fn categorize(code: i64) -> ErrorCategory {
    if is_auth_error_code(code) {
        return ErrorCategory::Authentication;
    }
    CoinExErrorCode::from_code(code)
        .map(|c| c.category())
        .unwrap_or(ErrorCategory::Unknown)
}

impl ResponseEnvelope {
    /// Known exchange error carried by this envelope
    pub fn error_code(&self) -> Option<CoinExErrorCode> {
        CoinExErrorCode::from_code(self.code)
    }

    /// Check if the exchange rejected the request's credentials
    pub fn is_auth_error(&self) -> bool {
        is_auth_error_code(self.code)
    }
}
