//! Coerced attribute values
//!
//! Raw input arrives as [`serde_json::Value`]. Once a rule has driven a
//! conversion the result is one of the typed variants of [`AttributeValue`];
//! anything that was passed through (defaults, custom results, untouched
//! input) stays wrapped in [`AttributeValue::Value`].
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::Serialize;
use serde_json::Value;

/// A fully coerced attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Produced by a `boolean` rule
    Boolean(bool),
    /// Produced by an `integer` rule
    Integer(i64),
    /// Produced by a `numeric` rule
    Float(f64),
    /// Produced by a `date` or `date_format:` rule
    DateTime(DateTime<FixedOffset>),
    /// Passed through unchanged, or supplied by a default or custom mutator
    Value(Value),
}

impl AttributeValue {
    /// The null value
    pub fn null() -> Self {
        AttributeValue::Value(Value::Null)
    }

    /// Check if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Value(Value::Null))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean(b) => Some(*b),
            AttributeValue::Value(v) => v.as_bool(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(n) => Some(*n),
            AttributeValue::Value(v) => v.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(n) => Some(*n),
            AttributeValue::Integer(n) => Some(*n as f64),
            AttributeValue::Value(v) => v.as_f64(),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            AttributeValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Value(v) => v.as_str(),
            _ => None,
        }
    }

    /// Convert into a JSON value, rendering dates as RFC 3339.
    ///
    /// Dates render the same as through `Serialize`, with `Z` for UTC.
    pub fn into_json(self) -> Value {
        match self {
            AttributeValue::Boolean(b) => Value::Bool(b),
            AttributeValue::Integer(n) => Value::from(n),
            AttributeValue::Float(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            AttributeValue::DateTime(dt) => {
                Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            AttributeValue::Value(v) => v,
        }
    }
}

impl Default for AttributeValue {
    fn default() -> Self {
        Self::null()
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Integer(n)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Float(n)
    }
}

impl From<DateTime<FixedOffset>> for AttributeValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        AttributeValue::DateTime(dt)
    }
}

impl From<Value> for AttributeValue {
    fn from(v: Value) -> Self {
        AttributeValue::Value(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Value(Value::String(s.to_string()))
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Value(Value::String(s))
    }
}

impl From<AttributeValue> for Value {
    fn from(v: AttributeValue) -> Self {
        v.into_json()
    }
}

/// Loose truthiness of a raw value.
///
/// Null, `false`, numeric zero, the empty string and empty containers are
/// falsy. Every other value is truthy, including the string `"0"`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
