//! Widget metadata attached to setting definitions.
//!
//! Each widget kind carries its own payload: colour pickers name the CSS
//! rule they drive, dropdowns carry an ordered option map, text inputs
//! carry a validation rule. Which payload a definition holds is fixed by
//! its constructor, so a payload can never disagree with its kind.

use crate::errors::SettingsError;
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// The admin-form control a setting renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WidgetKind {
    /// Static HTML block (e.g. a reset notice), no stored value.
    Html,
    /// Dropdown over a fixed option map.
    Select,
    /// Colour picker bound to a CSS selector/property pair.
    ColourPicker,
    /// On/off toggle.
    Checkbox,
    /// Single-line text input.
    Text,
    /// Multi-line plain text input.
    TextArea,
    /// Rich text editor.
    HtmlEditor,
}

/// The CSS rule a colour picker drives: selector plus property name.
///
/// The admin UI uses this for live preview; the stylesheet itself is
/// produced by token substitution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CssTarget {
    pub selector: String,
    pub property: String,
}

impl CssTarget {
    pub fn new(selector: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            property: property.into(),
        }
    }
}

/// Label shown for one dropdown choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionLabel {
    /// Shown verbatim (e.g. `13px`).
    Text(String),
    /// Resolved through the host's string catalog.
    Tag(String),
}

/// Insertion-ordered value → label map backing a dropdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectOptions {
    entries: IndexMap<String, OptionLabel>,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a choice with a literal label.
    pub fn text(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.entries
            .insert(value.into(), OptionLabel::Text(label.into()));
        self
    }

    /// Add a choice whose label is a localization tag.
    pub fn tag(mut self, value: impl Into<String>, tag: impl Into<String>) -> Self {
        self.entries
            .insert(value.into(), OptionLabel::Tag(tag.into()));
        self
    }

    /// Whether `value` is one of the choices.
    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate choices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionLabel)> {
        self.entries.iter().map(|(value, label)| (value.as_str(), label))
    }
}

/// Build the `Npx`-labelled dropdown shared by the font-size settings.
pub fn pixel_sizes(range: impl IntoIterator<Item = i64>) -> SelectOptions {
    range.into_iter().fold(SelectOptions::new(), |options, px| {
        options.text(px.to_string(), format!("{px}px"))
    })
}

/// Validation applied to text settings before the host persists them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRule {
    /// Accept anything.
    Raw,
    /// Accept http(s) URLs; empty means the option is unset.
    Url,
    /// Accept values matching the regex pattern.
    Pattern(String),
}

static URL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("url shape pattern is valid"));

impl TextRule {
    /// Digits only, no sign.
    pub fn unsigned() -> Self {
        TextRule::Pattern("^[0-9][0-9]*$".to_string())
    }

    /// Digits with an optional leading minus.
    pub fn signed() -> Self {
        TextRule::Pattern("^-?[0-9][0-9]*$".to_string())
    }

    /// Check a candidate value against this rule.
    pub fn check(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        match self {
            TextRule::Raw => Ok(()),
            TextRule::Url => {
                if value.is_empty() || URL_SHAPE.is_match(value) {
                    Ok(())
                } else {
                    Err(SettingsError::Rejected {
                        key: key.to_string(),
                        reason: "not a http(s) URL".to_string(),
                    })
                }
            }
            TextRule::Pattern(pattern) => {
                let re = Regex::new(pattern).map_err(|source| SettingsError::InvalidPattern {
                    key: key.to_string(),
                    source,
                })?;
                if re.is_match(value) {
                    Ok(())
                } else {
                    Err(SettingsError::Rejected {
                        key: key.to_string(),
                        reason: format!("does not match {pattern}"),
                    })
                }
            }
        }
    }
}

static COLOUR_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("colour shape pattern is valid")
});

/// Whether `value` is a `#rgb` or `#rrggbb` colour.
pub(crate) fn is_colour(value: &str) -> bool {
    COLOUR_SHAPE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_kind_displays_like_the_config_keys() {
        assert_eq!(WidgetKind::ColourPicker.to_string(), "colourpicker");
        assert_eq!(WidgetKind::HtmlEditor.to_string(), "htmleditor");
        assert_eq!(WidgetKind::Text.to_string(), "text");
    }

    #[test]
    fn pixel_sizes_keeps_range_order() {
        let options = pixel_sizes(9..=20);
        assert_eq!(options.len(), 12);
        let first = options.iter().next().unwrap();
        assert_eq!(first.0, "9");
        assert_eq!(first.1, &OptionLabel::Text("9px".to_string()));
        assert!(options.contains("13"));
        assert!(!options.contains("21"));
    }

    #[test]
    fn unsigned_rule_rejects_signs_and_text() {
        let rule = TextRule::unsigned();
        assert!(rule.check("headerheight", "110").is_ok());
        assert!(rule.check("headerheight", "-3").is_err());
        assert!(rule.check("headerheight", "12em").is_err());
    }

    #[test]
    fn signed_rule_accepts_negative_offsets() {
        let rule = TextRule::signed();
        assert!(rule.check("logooffsettop", "-15").is_ok());
        assert!(rule.check("logooffsettop", "15").is_ok());
        assert!(rule.check("logooffsettop", "–15").is_err()); // non-ascii dash
    }

    #[test]
    fn url_rule_accepts_empty_and_http() {
        let rule = TextRule::Url;
        assert!(rule.check("logo", "").is_ok());
        assert!(rule.check("logo", "https://example.org/logo.png").is_ok());
        assert!(rule.check("logo", "ftp://example.org/logo.png").is_err());
        assert!(rule.check("logo", "not a url").is_err());
    }

    #[test]
    fn colour_shape_accepts_short_and_long_hex() {
        assert!(is_colour("#fff"));
        assert!(is_colour("#1f465e"));
        assert!(!is_colour("1f465e"));
        assert!(!is_colour("#1f465"));
    }
}
