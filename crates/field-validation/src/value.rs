// File: src/value.rs
// Purpose: Dynamically-shaped values held by validation fields

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Largest integer an f64 represents exactly, along with every integer below it.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A value of unknown shape, as received from a form or a JSON body.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The field was never provided.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
}

impl Value {
    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Name of the variant, for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Any number, including NaN and the infinities.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// A number with no fractional part whose magnitude is at most
    /// [`MAX_SAFE_INTEGER`].
    pub fn is_safe_integer(&self) -> bool {
        match self {
            Value::Number(n) => n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER,
            _ => false,
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// A plain key/value object. Arrays, dates and null are not objects.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(obj: HashMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// JSON has no date or undefined; strings stay strings even when they look
/// like dates.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_integer() {
        assert!(Value::from(42).is_safe_integer());
        assert!(Value::from(-7.0).is_safe_integer());
        assert!(Value::from(MAX_SAFE_INTEGER).is_safe_integer());
        assert!(!Value::from(MAX_SAFE_INTEGER + 2.0).is_safe_integer());
        assert!(!Value::from(1.5).is_safe_integer());
        assert!(!Value::from(f64::NAN).is_safe_integer());
        assert!(!Value::from(f64::INFINITY).is_safe_integer());
        assert!(!Value::from("42").is_safe_integer());
    }

    #[test]
    fn test_number_includes_nan() {
        assert!(Value::from(f64::NAN).is_number());
        assert!(!Value::from("1").is_number());
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<String>).is_null());
        assert!(Value::from(Some("x")).is_string());
    }

    #[test]
    fn test_default_is_undefined() {
        assert!(Value::default().is_undefined());
        assert!(!Value::default().is_null());
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({
            "name": "Ana",
            "age": 31,
            "tags": ["a", "b"],
            "manager": null,
        });

        let value = Value::from(json);
        assert!(value.is_object());

        let Value::Object(fields) = value else {
            panic!("expected object");
        };
        assert!(fields["name"].is_string());
        assert!(fields["age"].is_safe_integer());
        assert!(fields["tags"].is_array());
        assert!(fields["manager"].is_null());
        assert!(!fields.contains_key("missing"));
    }
}
