//! Shape tags for configuration payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Shape of a configuration payload, derived from the raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// No payload (absent key or explicit null)
    Invalid,
    Bool,
    Integer,
    Float,
    String,
    /// Ordered sequence of values
    Slice,
    /// Nested key/value table
    Dictionary,
}

impl ValueType {
    /// Derive the tag for an optional payload
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => ValueType::Invalid,
            Some(Value::Bool(_)) => ValueType::Bool,
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => ValueType::Integer,
            Some(Value::Number(_)) => ValueType::Float,
            Some(Value::String(_)) => ValueType::String,
            Some(Value::Array(_)) => ValueType::Slice,
            Some(Value::Object(_)) => ValueType::Dictionary,
        }
    }

    /// Whether the payload is a single leaf value
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ValueType::Bool | ValueType::Integer | ValueType::Float | ValueType::String
        )
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Invalid => "invalid",
            ValueType::Bool => "bool",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Slice => "slice",
            ValueType::Dictionary => "dictionary",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
