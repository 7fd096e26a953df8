//! Typed field access over one raw manifest entry.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::overlay::color::coerce_color;

/// A single untyped style definition from a manifest.
///
/// Accessors treat an explicit `null` the same as an absent key.
#[derive(Debug, Clone, Copy)]
pub struct StyleEntry<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> StyleEntry<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    fn get(&self, field: &'static str) -> Option<&'a Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    fn require(&self, field: &'static str) -> Result<&'a Value, CoreError> {
        self.get(field).ok_or(CoreError::MissingField { field })
    }

    /// The entry's `id` if it is present as a string, for error reporting.
    pub fn id_hint(&self) -> Option<String> {
        self.get("id").and_then(Value::as_str).map(str::to_owned)
    }

    pub fn required_str(&self, field: &'static str) -> Result<String, CoreError> {
        match self.require(field)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(CoreError::InvalidFieldType {
                field,
                expected: "string",
            }),
        }
    }

    pub fn optional_str(&self, field: &'static str) -> Result<Option<String>, CoreError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(CoreError::InvalidFieldType {
                field,
                expected: "string",
            }),
        }
    }

    /// A numeric field, accepting JSON numbers and numeric strings.
    pub fn required_f64(&self, field: &'static str) -> Result<f64, CoreError> {
        let value = self.require(field)?;
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(f) if f.is_finite() => Ok(f),
            _ => Err(CoreError::InvalidNumericField {
                field,
                value: display_value(value),
            }),
        }
    }

    pub fn required_color(&self, field: &'static str) -> Result<String, CoreError> {
        coerce_color(field, self.require(field)?)
    }

    pub fn optional_color(&self, field: &'static str) -> Result<Option<String>, CoreError> {
        self.get(field)
            .map(|value| coerce_color(field, value))
            .transpose()
    }
}

/// Render a JSON value for an error message, without quotes around strings.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
