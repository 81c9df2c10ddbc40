//! Uniform `{code, message, data}` response envelope

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message the exchange sends alongside `code == 0`
pub const SUCCESS_MESSAGE: &str = "OK";

/// Response envelope returned by every endpoint
///
/// When the exchange answers with its own envelope it is passed through
/// unchanged, including extra top-level fields such as `pagination` and an
/// explicit `"data": null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ResponseEnvelope {
    /// `0` on success; exchange error code or a [`SyntheticCode`] otherwise
    pub code: i64,
    /// `"OK"` on success, human-readable reason otherwise
    pub message: String,
    /// Payload; `None` when the key is absent, `Some(Value::Null)` for `"data": null`
    pub data: Option<Value>,
    /// Any other top-level fields from the exchange
    pub extra: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Create a successful envelope
    pub fn ok(data: Value) -> Self {
        Self {
            code: 0,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(data),
            extra: Map::new(),
        }
    }

    /// Create an envelope for a failure detected locally
    pub fn synthetic(code: SyntheticCode, message: impl Into<String>) -> Self {
        Self {
            code: code.as_i64(),
            message: message.into(),
            data: Some(Value::Null),
            extra: Map::new(),
        }
    }

    /// Create an envelope with an arbitrary code and payload
    pub fn with_code(code: i64, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
            extra: Map::new(),
        }
    }

    /// Check if the envelope signals success
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Locally produced failure kind, if this envelope carries one
    pub fn synthetic_code(&self) -> Option<SyntheticCode> {
        SyntheticCode::from_i64(self.code)
    }

    /// Borrow the payload as an array, if it is one
    pub fn data_array(&self) -> Option<&Vec<Value>> {
        self.data.as_ref().and_then(Value::as_array)
    }

    /// Keep at most `n` entries of an array payload; other payloads are untouched
    pub fn truncate_data(&mut self, n: usize) {
        if let Some(Value::Array(items)) = self.data.as_mut() {
            items.truncate(n);
        }
    }

    /// Convert into a plain JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.into())
    }
}

impl TryFrom<Map<String, Value>> for ResponseEnvelope {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let code = match fields.remove("code") {
            Some(Value::Number(n)) => n
                .as_i64()
                .ok_or_else(|| format!("envelope code is not an integer: {n}"))?,
            Some(other) => return Err(format!("envelope code is not a number: {other}")),
            None => return Err("missing field `code`".to_string()),
        };
        let message = match fields.remove("message") {
            Some(Value::String(message)) => message,
            Some(other) => return Err(format!("envelope message is not a string: {other}")),
            None => return Err("missing field `message`".to_string()),
        };
        let data = fields.remove("data");

        Ok(Self {
            code,
            message,
            data,
            extra: fields,
        })
    }
}

impl From<ResponseEnvelope> for Map<String, Value> {
    fn from(envelope: ResponseEnvelope) -> Self {
        let mut fields = envelope.extra;
        fields.insert("code".into(), envelope.code.into());
        fields.insert("message".into(), envelope.message.into());
        if let Some(data) = envelope.data {
            fields.insert("data".into(), data);
        }
        fields
    }
}

/// Negative codes produced by the client when no exchange envelope is available
///
/// Exchange codes are never negative, so these cannot collide with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum SyntheticCode {
    /// Non-2xx HTTP status and the body was not an envelope
    HttpStatus = -1,
    /// Connection, DNS, or other network-level failure
    Transport = -2,
    /// The request exceeded the configured timeout
    Timeout = -3,
    /// 2xx HTTP status but the body was not a valid envelope
    MalformedBody = -4,
}

impl SyntheticCode {
    /// Numeric envelope code
    pub fn as_i64(self) -> i64 {
        self as i64
    }

    /// Synthetic kind of an envelope code; `None` for exchange codes
    pub fn from_i64(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::HttpStatus),
            -2 => Some(Self::Transport),
            -3 => Some(Self::Timeout),
            -4 => Some(Self::MalformedBody),
            _ => None,
        }
    }
}
