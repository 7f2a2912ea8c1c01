//! Text form and truthiness of loosely typed JSON values.
//!
//! Notification fields arrive untyped. Absent values and `null` print as
//! `None`, booleans as `True`/`False`, strings without quotes, numbers in
//! their JSON form and containers as compact JSON.

use std::fmt;

use serde_json::Value;

/// Marker printed for a missing or `null` value.
pub const ABSENT: &str = "None";

/// Returns false for `null`, `false`, zero, and empty strings, arrays or objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Display adapter for an optional field value.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a>(pub Option<&'a Value>);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None | Some(Value::Null) => f.write_str(ABSENT),
            Some(Value::Bool(true)) => f.write_str("True"),
            Some(Value::Bool(false)) => f.write_str("False"),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{other}"),
        }
    }
}

/// Owned text form of a present value.
pub fn render(value: &Value) -> String {
    Rendered(Some(value)).to_string()
}
