//! Request parameters with deterministic serialization
//!
//! Keys are kept sorted so that the query string or JSON body produced here
//! is stable, which is what the signature is computed over.

use coinex_types::Market;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{RestError, RestResult};

/// Sorted request parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams(BTreeMap<String, Value>);

impl RequestParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert only when a value is present
    pub fn with_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Add the `market` filter; `None` means all markets and adds nothing
    pub fn with_market(self, market: Option<&Market>) -> Self {
        self.with_opt("market", market.map(Market::as_str))
    }

    /// Value of a parameter, if set
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check if no parameters are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// URL-encoded query string, keys sorted; empty when there are no parameters
    pub fn to_query(&self) -> RestResult<String> {
        let pairs: Vec<(&str, String)> = self
            .0
            .iter()
            .map(|(k, v)| (k.as_str(), query_value(v)))
            .collect();

        serde_urlencoded::to_string(&pairs).map_err(|e| RestError::Encode(e.to_string()))
    }

    /// Compact JSON body, keys sorted; empty when there are no parameters
    pub fn to_body(&self) -> RestResult<String> {
        if self.0.is_empty() {
            return Ok(String::new());
        }
        serde_json::to_string(&self.0).map_err(|e| RestError::Encode(e.to_string()))
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
