//! Declared parameter schemas for tools
//!
//! Schemas are rendered as MCP tool declarations with a JSON schema for the
//! input; [`crate::ToolArgs`] enforces the same declarations at call time.

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt;

use crate::tools::Tool;

/// Access tag of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolTag {
    /// Public market data, no credentials needed
    Public,
    /// Account and trading, credentials required
    Auth,
}

impl ToolTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Auth => "auth",
        }
    }
}

impl fmt::Display for ToolTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON type expected for a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    /// A decimal number carried as a JSON string, e.g. `"0.001"`
    Decimal,
}

impl ParamKind {
    /// JSON schema `type` keyword
    pub fn json_type(&self) -> &'static str {
        match self {
            Self::String | Self::Decimal => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    /// Check the JSON shape of a value, without interpreting its content
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::String | Self::Decimal => value.is_string(),
            Self::Integer => value.as_i64().is_some(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// One declared tool parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub required: bool,
    pub default: Option<Value>,
    /// Allowed values for enum-like string parameters
    pub allowed: Option<&'static [&'static str]>,
}

impl ParamSpec {
    fn new(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            default: None,
            allowed: None,
        }
    }

    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::String, description)
    }

    pub fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Integer, description)
    }

    pub fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Boolean, description)
    }

    pub fn decimal(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Decimal, description)
    }

    /// Mark the parameter as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Advertise a default value
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Restrict to a fixed set of values
    pub fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }

    fn to_json(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".into(), self.kind.json_type().into());
        schema.insert("description".into(), self.description.into());
        if self.kind == ParamKind::Decimal {
            schema.insert("format".into(), "decimal".into());
        }
        if let Some(default) = &self.default {
            schema.insert("default".into(), default.clone());
        }
        if let Some(allowed) = self.allowed {
            schema.insert("enum".into(), json!(allowed));
        }
        Value::Object(schema)
    }
}

/// Declaration of one callable tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    pub tool: Tool,
    pub description: &'static str,
    pub params: Vec<ParamSpec>,
}

impl ToolSpec {
    pub fn new(tool: Tool, description: &'static str) -> Self {
        Self {
            tool,
            description,
            params: Vec::new(),
        }
    }

    /// Builder-style parameter declaration
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn name(&self) -> &'static str {
        self.tool.name()
    }

    pub fn tag(&self) -> ToolTag {
        self.tool.tag()
    }

    /// Look up a declared parameter
    pub fn find_param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Render as an MCP tool declaration with an `inputSchema`
    pub fn to_json(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.to_json()))
            .collect();
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json!({
            "name": self.name(),
            "description": self.description,
            "inputSchema": {
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false,
            },
            "_meta": {"tags": [self.tag()]},
        })
    }
}
