//! Setting definitions — the rows of the registry table.
//!
//! A definition is authored in code through one of the per-kind
//! constructors, then refined with `with_*` setters. The kind-specific
//! payload (CSS target, option map, validation rule) is supplied by the
//! constructor itself, so every definition's payload matches its kind by
//! construction.

use crate::value::SettingValue;
use crate::widget::{CssTarget, SelectOptions, TextRule, WidgetKind};

/// One admin-panel option: key, section, widget kind, default, and the
/// kind-specific payload the form renderer needs.
#[derive(Clone, Debug)]
pub struct SettingDefinition {
    key: String,
    section: String,
    kind: WidgetKind,
    default: Option<SettingValue>,
    title_tag: Option<String>,
    payload: Payload,
}

#[derive(Clone, Debug)]
pub(crate) enum Payload {
    None,
    Colour(CssTarget),
    Select(SelectOptions),
    Text { rule: TextRule },
    TextArea { rows: u16, cols: u16 },
}

impl SettingDefinition {
    fn new(key: impl Into<String>, section: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            key: key.into(),
            section: section.into(),
            kind,
            default: None,
            title_tag: None,
            payload: Payload::None,
        }
    }

    /// A static HTML block. Has no stored value.
    pub fn html(key: impl Into<String>, section: impl Into<String>) -> Self {
        Self::new(key, section, WidgetKind::Html)
    }

    /// A dropdown over `options` with the given default choice.
    pub fn select(
        key: impl Into<String>,
        section: impl Into<String>,
        default: impl Into<SettingValue>,
        options: SelectOptions,
    ) -> Self {
        let mut def = Self::new(key, section, WidgetKind::Select);
        def.default = Some(default.into());
        def.payload = Payload::Select(options);
        def
    }

    /// A colour picker driving the given CSS rule.
    pub fn colour(
        key: impl Into<String>,
        section: impl Into<String>,
        default: impl Into<String>,
        target: CssTarget,
    ) -> Self {
        let mut def = Self::new(key, section, WidgetKind::ColourPicker);
        def.default = Some(SettingValue::Str(default.into()));
        def.payload = Payload::Colour(target);
        def
    }

    /// An on/off toggle.
    pub fn checkbox(key: impl Into<String>, section: impl Into<String>, default: bool) -> Self {
        let mut def = Self::new(key, section, WidgetKind::Checkbox);
        def.default = Some(SettingValue::Bool(default));
        def
    }

    /// A single-line text input, accepting anything until a rule is set.
    pub fn text(key: impl Into<String>, section: impl Into<String>) -> Self {
        let mut def = Self::new(key, section, WidgetKind::Text);
        def.payload = Payload::Text {
            rule: TextRule::Raw,
        };
        def
    }

    /// A multi-line plain text input.
    pub fn text_area(key: impl Into<String>, section: impl Into<String>) -> Self {
        let mut def = Self::new(key, section, WidgetKind::TextArea);
        def.payload = Payload::TextArea { rows: 8, cols: 60 };
        def
    }

    /// A rich text editor.
    pub fn html_editor(key: impl Into<String>, section: impl Into<String>) -> Self {
        Self::new(key, section, WidgetKind::HtmlEditor)
    }

    /// Set the recorded default.
    pub fn with_default(mut self, default: impl Into<SettingValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Override the localization tag used for the field title. Without an
    /// override the key itself is the tag.
    pub fn with_title_tag(mut self, tag: impl Into<String>) -> Self {
        self.title_tag = Some(tag.into());
        self
    }

    /// Set the validation rule. Has an effect on text definitions only.
    pub fn with_rule(mut self, new: TextRule) -> Self {
        if let Payload::Text { rule } = &mut self.payload {
            *rule = new;
        }
        self
    }

    /// Set the textarea dimensions. Has an effect on textarea definitions only.
    pub fn with_size(mut self, new_rows: u16, new_cols: u16) -> Self {
        if let Payload::TextArea { rows, cols } = &mut self.payload {
            *rows = new_rows;
            *cols = new_cols;
        }
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn default(&self) -> Option<&SettingValue> {
        self.default.as_ref()
    }

    /// The localization tag for the field title.
    pub fn title_tag(&self) -> &str {
        self.title_tag.as_deref().unwrap_or(&self.key)
    }

    /// The option map, for dropdowns.
    pub fn options(&self) -> Option<&SelectOptions> {
        match &self.payload {
            Payload::Select(options) => Some(options),
            _ => None,
        }
    }

    /// The CSS target, for colour pickers.
    pub fn css_target(&self) -> Option<&CssTarget> {
        match &self.payload {
            Payload::Colour(target) => Some(target),
            _ => None,
        }
    }

    /// The validation rule, for text inputs.
    pub fn text_rule(&self) -> Option<&TextRule> {
        match &self.payload {
            Payload::Text { rule } => Some(rule),
            _ => None,
        }
    }

    pub(crate) fn payload(&self) -> &Payload {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::pixel_sizes;

    #[test]
    fn constructors_fix_kind_and_payload() {
        let def = SettingDefinition::colour(
            "fontcolor",
            "general",
            "#000000",
            CssTarget::new("html,body", "color"),
        );
        assert_eq!(def.kind(), WidgetKind::ColourPicker);
        assert_eq!(def.css_target().unwrap().property, "color");
        assert!(def.options().is_none());

        let def = SettingDefinition::select("breadcrumbfontsize", "logo", 12, pixel_sizes(9..=20));
        assert_eq!(def.kind(), WidgetKind::Select);
        assert!(def.options().unwrap().contains("12"));
    }

    #[test]
    fn title_tag_falls_back_to_key() {
        let def = SettingDefinition::text("logo", "logo").with_title_tag("logourl");
        assert_eq!(def.title_tag(), "logourl");
        let def = SettingDefinition::text("headerheight", "header");
        assert_eq!(def.title_tag(), "headerheight");
    }

    #[test]
    fn rule_applies_to_text_only() {
        let def = SettingDefinition::text("headerheight", "header").with_rule(TextRule::unsigned());
        assert_eq!(def.text_rule(), Some(&TextRule::unsigned()));

        // Setting a rule on a checkbox is a no-op.
        let def = SettingDefinition::checkbox("alwayslangmenu", "general", true)
            .with_rule(TextRule::unsigned());
        assert!(def.text_rule().is_none());
    }
}
