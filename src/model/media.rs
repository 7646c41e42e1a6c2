//! Catalog items and the result cards built from them
//!
//! Search results are kept as the exact JSON text the backend sent for each
//! item. Display fields are read from it leniently; submission sends the text
//! back unchanged.

use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::error::PayloadError;

const UNTITLED: &str = "Untitled";
const NO_OVERVIEW: &str = "No description available.";

/// One catalog entry, reconstructed from a result card's payload.
#[derive(Clone, Debug)]
pub struct MediaItem {
    raw: Box<RawValue>,
    fields: Map<String, Value>,
}

impl MediaItem {
    pub fn from_raw(raw: Box<RawValue>) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(raw.get())
            .map_err(|e| PayloadError::Malformed(e.to_string()))?;
        match value {
            Value::Object(fields) => Ok(Self { raw, fields }),
            other => Err(PayloadError::NotAnObject(json_kind(&other))),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        let raw = RawValue::from_string(text.to_string())
            .map_err(|e| PayloadError::Malformed(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// JSON text exactly as it was received.
    pub fn payload(&self) -> &str {
        self.raw.get()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn title(&self) -> Option<&str> {
        text_field(&self.fields, "title")
    }

    pub fn media_type(&self) -> Option<&str> {
        text_field(&self.fields, "mediaType").or_else(|| text_field(&self.fields, "type"))
    }
}

/// A rendered search result bound to its original payload.
#[derive(Clone, Debug)]
pub struct ResultCard {
    payload: Box<RawValue>,
    pub title: String,
    pub year: Option<String>,
    pub overview: String,
    pub poster: Option<String>,
}

impl ResultCard {
    pub fn from_payload(payload: Box<RawValue>) -> Self {
        let fields = match serde_json::from_str::<Value>(payload.get()) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        Self {
            title: text_field(&fields, "title").unwrap_or(UNTITLED).to_string(),
            year: year_field(&fields),
            overview: text_field(&fields, "overview")
                .unwrap_or(NO_OVERVIEW)
                .to_string(),
            poster: text_field(&fields, "poster").map(str::to_string),
            payload,
        }
    }

    pub fn payload(&self) -> &str {
        self.payload.get()
    }

    /// Rebuild the item this card was rendered from.
    pub fn item(&self) -> Result<MediaItem, PayloadError> {
        MediaItem::from_raw(self.payload.clone())
    }

    /// `Title (Year)` or just the title.
    pub fn heading(&self) -> String {
        match &self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }
}

fn text_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn year_field(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("year")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
