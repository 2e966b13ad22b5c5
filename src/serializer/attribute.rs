//! Attribute text codecs for the drawing format, and the policy that decides
//! what happens when an attribute cannot be read.

use egui::Color32;

use crate::error::{DocumentError, DocumentResult};

/// How to treat attribute values that do not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Malformed or missing numbers read as `0.0`, malformed colors as opaque
    /// black. One corrupt attribute never aborts the rest of the load.
    #[default]
    Permissive,
    /// Malformed or missing values fail the load with
    /// [`DocumentError::InvalidAttribute`].
    Strict,
}

impl ParsePolicy {
    pub fn decimal(self, attribute: &str, value: Option<&str>) -> DocumentResult<f32> {
        match (value.and_then(parse_decimal), self) {
            (Some(parsed), _) => Ok(parsed),
            (None, ParsePolicy::Permissive) => Ok(0.0),
            (None, ParsePolicy::Strict) => Err(invalid(attribute, value)),
        }
    }

    pub fn color(self, attribute: &str, value: Option<&str>) -> DocumentResult<Color32> {
        match (value.and_then(parse_color), self) {
            (Some(parsed), _) => Ok(parsed),
            (None, ParsePolicy::Permissive) => Ok(Color32::BLACK),
            (None, ParsePolicy::Strict) => Err(invalid(attribute, value)),
        }
    }
}

fn invalid(attribute: &str, value: Option<&str>) -> DocumentError {
    DocumentError::InvalidAttribute {
        attribute: attribute.to_owned(),
        value: value.unwrap_or_default().to_owned(),
    }
}

/// Shortest text that reads back as the same `f32`.
pub fn format_decimal(value: f32) -> String {
    value.to_string()
}

/// Parse a finite decimal number, ignoring surrounding whitespace
pub fn parse_decimal(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|value| value.is_finite())
}

/// HTML-style `#RRGGBB`. Alpha is not stored.
pub fn format_color(color: Color32) -> String {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`, case-insensitively.
/// Alpha is dropped; the result is always opaque.
pub fn parse_color(text: &str) -> Option<Color32> {
    let text = text.trim();
    // `from_hex` would let a sign through `u8::from_str_radix`.
    if !text.chars().skip(1).all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let [r, g, b, _] = Color32::from_hex(text).ok()?.to_srgba_unmultiplied();
    Some(Color32::from_rgb(r, g, b))
}
