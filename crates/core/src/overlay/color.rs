//! Color coercion for style manifests.
//!
//! Manifests may encode a color either as a hex string (`"#5E4530"`,
//! `"5e4530"`) or as an `[r, g, b]` array. Both normalize to the same
//! canonical `#rrggbb` lowercase form.

use serde_json::Value;

use crate::error::CoreError;

/// Number of hex digits in a canonical color, excluding the `#` prefix.
const HEX_DIGITS: usize = 6;

/// A raw color value as it appears in a manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    /// A hex string, with or without a leading `#`.
    Hex(String),
    /// Red, green, and blue channels, each expected in `0..=255`.
    Rgb([i64; 3]),
}

impl ColorInput {
    /// Classify a JSON value as a color input.
    ///
    /// Strings become [`ColorInput::Hex`], arrays of exactly three integers
    /// become [`ColorInput::Rgb`]. Everything else is rejected.
    pub fn from_value(field: &'static str, value: &Value) -> Result<Self, CoreError> {
        match value {
            Value::String(s) => Ok(ColorInput::Hex(s.clone())),
            Value::Array(items) if items.len() == 3 => {
                let mut channels = [0i64; 3];
                for (slot, item) in channels.iter_mut().zip(items) {
                    *slot = item.as_i64().ok_or_else(|| invalid(field, value))?;
                }
                Ok(ColorInput::Rgb(channels))
            }
            _ => Err(invalid(field, value)),
        }
    }

    /// Normalize to `#rrggbb`.
    pub fn normalize(&self, field: &'static str) -> Result<String, CoreError> {
        match self {
            ColorInput::Hex(raw) => {
                let digits = raw.trim_start_matches('#');
                if digits.len() != HEX_DIGITS || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(CoreError::InvalidColor {
                        field,
                        value: raw.clone(),
                    });
                }
                Ok(format!("#{}", digits.to_ascii_lowercase()))
            }
            ColorInput::Rgb(channels) => {
                if channels.iter().any(|c| !(0..=255).contains(c)) {
                    return Err(CoreError::InvalidColor {
                        field,
                        value: format!("{channels:?}"),
                    });
                }
                let [r, g, b] = *channels;
                Ok(format!("#{r:02x}{g:02x}{b:02x}"))
            }
        }
    }
}

/// Parse and normalize a color in one step.
pub fn coerce_color(field: &'static str, value: &Value) -> Result<String, CoreError> {
    ColorInput::from_value(field, value)?.normalize(field)
}

fn invalid(field: &'static str, value: &Value) -> CoreError {
    CoreError::InvalidColor {
        field,
        value: value.to_string(),
    }
}
