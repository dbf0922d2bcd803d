//! Form-field resolution — turning definitions into host-renderable fields.
//!
//! The host framework owns form rendering and string catalogs; this module
//! only prepares the data it needs. A [`FormField`] is a plain serializable
//! struct: the namespaced field name, the resolved title and description,
//! and a kind-specific control payload.

use crate::definition::{Payload, SettingDefinition};
use crate::value::SettingValue;
use crate::widget::{CssTarget, OptionLabel, TextRule, WidgetKind};
use serde::Serialize;

/// Host seam for string-catalog lookups.
///
/// Every visible admin-panel string resolves through the framework's
/// language catalog; hosts implement this trait to plug that catalog in.
pub trait Localizer {
    /// Resolve a language tag to display text.
    fn text(&self, tag: &str) -> String;
}

/// Fallback localizer that echoes the tag itself. Useful for hosts without
/// a string catalog and for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct TagLocalizer;

impl Localizer for TagLocalizer {
    fn text(&self, tag: &str) -> String {
        tag.to_string()
    }
}

/// A resolved admin-form field, ready for the host renderer.
#[derive(Clone, Debug, Serialize)]
pub struct FormField {
    /// Namespaced field name, e.g. `theme_morphing/fontcolor`.
    pub name: String,
    /// Resolved title.
    pub title: String,
    /// Resolved description; empty for static HTML blocks.
    pub description: String,
    /// Kind-specific control payload.
    #[serde(flatten)]
    pub control: Control,
}

/// The control payload of a resolved form field.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "widget", rename_all = "lowercase")]
pub enum Control {
    Html,
    Select {
        default: String,
        options: Vec<SelectChoice>,
    },
    ColourPicker {
        default: String,
        target: CssTarget,
    },
    Checkbox {
        default: bool,
    },
    Text {
        default: String,
        rule: TextRule,
    },
    TextArea {
        default: String,
        rows: u16,
        cols: u16,
    },
    HtmlEditor {
        default: String,
    },
}

/// One resolved dropdown choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectChoice {
    pub value: String,
    pub label: String,
}

/// Resolve a definition into a form field under the given component
/// namespace.
pub(crate) fn resolve(
    def: &SettingDefinition,
    component: &str,
    localizer: &dyn Localizer,
) -> FormField {
    let name = if component.is_empty() {
        def.key().to_string()
    } else {
        format!("{component}/{}", def.key())
    };

    let title = localizer.text(def.title_tag());
    let description = match def.kind() {
        WidgetKind::Html => String::new(),
        _ => localizer.text(&format!("{}desc", def.title_tag())),
    };

    // Text-family controls fall back to an empty default in the form; value
    // lookups through `get` still treat the default as absent.
    let default_text = || {
        def.default()
            .map(SettingValue::render)
            .unwrap_or_default()
    };

    let control = match (def.kind(), def.payload()) {
        (WidgetKind::Html, _) => Control::Html,
        (WidgetKind::Select, Payload::Select(options)) => Control::Select {
            default: default_text(),
            options: options
                .iter()
                .map(|(value, label)| SelectChoice {
                    value: value.to_string(),
                    label: match label {
                        OptionLabel::Text(text) => text.clone(),
                        OptionLabel::Tag(tag) => localizer.text(tag),
                    },
                })
                .collect(),
        },
        (WidgetKind::ColourPicker, Payload::Colour(target)) => Control::ColourPicker {
            default: default_text(),
            target: target.clone(),
        },
        (WidgetKind::Checkbox, _) => Control::Checkbox {
            default: matches!(def.default(), Some(value) if value.render() == "1"),
        },
        (WidgetKind::Text, Payload::Text { rule }) => Control::Text {
            default: default_text(),
            rule: rule.clone(),
        },
        (WidgetKind::TextArea, Payload::TextArea { rows, cols }) => Control::TextArea {
            default: default_text(),
            rows: *rows,
            cols: *cols,
        },
        (WidgetKind::HtmlEditor, _) => Control::HtmlEditor {
            default: default_text(),
        },
        // Constructors pair every kind with its payload; no definition
        // reaches this arm.
        (_, _) => Control::Text {
            default: default_text(),
            rule: TextRule::Raw,
        },
    };

    FormField {
        name,
        title,
        description,
        control,
    }
}
