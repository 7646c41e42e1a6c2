//! Tolerant decoding of backend response bodies.
//!
//! The backend may answer with nothing, with JSON, or with a plain-text error
//! page. Decoding never fails: unparseable text is carried as the error
//! message so callers can always ask for one.

use serde_json::{Map, Value};

/// A response body after decoding.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    /// Zero-length body.
    Empty,
    /// Body parsed as JSON.
    Parsed(Value),
    /// Body present but not JSON; holds the raw text.
    Fallback(String),
}

pub fn decode(raw: &str) -> Decoded {
    if raw.is_empty() {
        return Decoded::Empty;
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Decoded::Parsed(value),
        Err(_) => Decoded::Fallback(raw.to_string()),
    }
}

impl Decoded {
    /// Structured view of the body: `{}` when empty, `{"error": raw}` on fallback.
    pub fn to_value(&self) -> Value {
        match self {
            Decoded::Empty => Value::Object(Map::new()),
            Decoded::Parsed(value) => value.clone(),
            Decoded::Fallback(raw) => {
                let mut map = Map::new();
                map.insert("error".to_string(), Value::String(raw.clone()));
                Value::Object(map)
            }
        }
    }

    /// Non-empty string field of an object body.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        match self {
            Decoded::Parsed(Value::Object(map)) => map
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty()),
            Decoded::Fallback(raw) if key == "error" => Some(raw.as_str()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.str_field("error")
    }

    pub fn message(&self) -> Option<&str> {
        self.str_field("message")
    }
}
