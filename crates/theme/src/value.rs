//! Setting values as stored and substituted.
//!
//! The registry table mixes textual values (colours, URLs, CSS snippets),
//! integers (pixel sizes, offsets), and checkbox states. `SettingValue`
//! covers all three; its `Display` form is the exact text that gets
//! substituted into stylesheets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A setting value, either a recorded default or a stored override.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Checkbox state; renders as `1` / `0`.
    Bool(bool),
    /// Pixel sizes, offsets, widths.
    Int(i64),
    /// Colours, URLs, free-form text.
    Str(String),
}

impl SettingValue {
    /// The string form, without conversion. `None` for non-string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The text substituted into stylesheets and shown in forms.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Str(s) => f.write_str(s),
            SettingValue::Int(n) => write!(f, "{n}"),
            SettingValue::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Str(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Str(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}
