//! Strict argument parsing at the tool boundary
//!
//! Arguments arrive as a JSON object. They are checked once against the
//! tool's declared parameters: unknown names, wrong JSON types, values
//! outside a declared `enum`, missing required values, and decimals that
//! cannot be carried exactly are all [`ValidationError`]s. `null` is treated
//! as "not given".

use coinex_types::{Market, ValidationError};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::schema::{ParamKind, ToolSpec};

/// Validated arguments for one tool invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArgs {
    values: Map<String, Value>,
}

impl ToolArgs {
    /// Check raw arguments against a tool's declared parameters
    pub fn parse(raw: Value, spec: &ToolSpec) -> Result<Self, ValidationError> {
        let mut values = match raw {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(ValidationError::invalid_argument(
                    "arguments",
                    format!("expected a JSON object, got {other}"),
                ))
            }
        };
        values.retain(|_, v| !v.is_null());

        for (name, value) in &values {
            let param = spec
                .find_param(name)
                .ok_or_else(|| ValidationError::invalid_argument(name, "unknown parameter"))?;

            if !param.kind.accepts(value) {
                return Err(ValidationError::invalid_argument(
                    name,
                    format!("expected {}, got {value}", param.kind.json_type()),
                ));
            }
            if let (Some(allowed), Some(raw)) = (param.allowed, value.as_str()) {
                if !allowed.iter().any(|a| *a == raw) {
                    return Err(ValidationError::invalid_argument(
                        name,
                        format!("{raw:?} is not one of {}", allowed.join("|")),
                    ));
                }
            }
            if param.kind == ParamKind::Decimal {
                parse_decimal(name, value.as_str().unwrap_or_default())?;
            }
        }

        if let Some(missing) = spec
            .params
            .iter()
            .find(|p| p.required && !values.contains_key(p.name))
        {
            return Err(ValidationError::invalid_argument(missing.name, "is required"));
        }

        Ok(Self { values })
    }

    /// Raw value of an argument, if given
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// String argument; blank strings count as not given
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn str_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.str(name).unwrap_or(default)
    }

    pub fn required_str(&self, name: &str) -> Result<&str, ValidationError> {
        self.str(name)
            .ok_or_else(|| ValidationError::invalid_argument(name, "is required"))
    }

    pub fn i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    pub fn i64_or(&self, name: &str, default: i64) -> i64 {
        self.i64(name).unwrap_or(default)
    }

    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Parse an enum-like string argument, falling back to `default` when absent
    pub fn parse_or<T>(&self, name: &str, default: T) -> Result<T, ValidationError>
    where
        T: FromStr<Err = ValidationError>,
    {
        Ok(self.parse_opt(name)?.unwrap_or(default))
    }

    /// Parse an optional enum-like string argument
    pub fn parse_opt<T>(&self, name: &str) -> Result<Option<T>, ValidationError>
    where
        T: FromStr<Err = ValidationError>,
    {
        self.str(name).map(str::parse).transpose()
    }

    pub fn decimal(&self, name: &str) -> Result<Option<Decimal>, ValidationError> {
        self.str(name).map(|s| parse_decimal(name, s)).transpose()
    }

    pub fn required_decimal(&self, name: &str) -> Result<Decimal, ValidationError> {
        parse_decimal(name, self.required_str(name)?)
    }

    /// Market from `base` and `quote`, with `quote` defaulting to USDT
    pub fn market(&self) -> Result<Market, ValidationError> {
        Market::new(
            self.required_str("base")?,
            self.str_or("quote", Market::DEFAULT_QUOTE),
        )
    }

    /// Optional market filter: `None` (all markets) when no base is given
    ///
    /// The quote is only consulted together with a base, so its default never
    /// turns an "all markets" query into a half-specified pair.
    pub fn market_filter(&self) -> Result<Option<Market>, ValidationError> {
        self.str("base").map(|_| self.market()).transpose()
    }
}

/// Parse a decimal that prints back exactly as given
///
/// `Decimal::from_str` rounds past 28 significant digits, and the value is
/// later sent as `to_string()`, so anything that does not round-trip would
/// reach the exchange altered.
fn parse_decimal(name: &str, raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    let value = Decimal::from_str(trimmed)
        .map_err(|_| ValidationError::invalid_argument(name, format!("not a decimal number: {raw:?}")))?;

    if value.to_string() != trimmed {
        return Err(ValidationError::invalid_argument(
            name,
            format!("{raw:?} cannot be sent exactly; use a plain decimal of at most 28 significant digits"),
        ));
    }
    Ok(value)
}
