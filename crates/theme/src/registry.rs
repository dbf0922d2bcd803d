//! The settings registry: an immutable definition table plus an optional
//! theme context holding the stored overrides.
//!
//! Defaults are authored in code through [`ThemeSettingsBuilder`]; stored
//! overrides come from the host framework (which owns persistence) as a
//! [`ThemeOverrides`] map, typically deserialized from JSON. After
//! `build()` the table never changes.

use crate::definition::SettingDefinition;
use crate::errors::SettingsError;
use crate::form::{self, FormField, Localizer};
use crate::value::SettingValue;
use crate::widget::{self, WidgetKind};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stored per-theme values, as persisted by the host framework.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeOverrides {
    values: HashMap<String, SettingValue>,
}

impl ThemeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from the host's JSON representation.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add an override.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builder for [`ThemeSettings`].
pub struct ThemeSettingsBuilder {
    component: String,
    definitions: Vec<SettingDefinition>,
    theme: Option<ThemeOverrides>,
}

impl ThemeSettingsBuilder {
    pub fn new() -> Self {
        Self {
            component: String::new(),
            definitions: Vec::new(),
            theme: None,
        }
    }

    /// Set the component namespace used for form-field names
    /// (e.g. `theme_morphing`).
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    /// Attach the stored theme values.
    pub fn with_theme(mut self, theme: ThemeOverrides) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Add a definition to the table.
    pub fn register(mut self, definition: SettingDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Freeze the table. Fails if a key was registered twice.
    pub fn build(self) -> Result<ThemeSettings, SettingsError> {
        let mut table = IndexMap::with_capacity(self.definitions.len());
        for definition in self.definitions {
            let key = definition.key().to_string();
            if table.insert(key.clone(), definition).is_some() {
                return Err(SettingsError::DuplicateSetting(key));
            }
        }

        let settings = ThemeSettings {
            component: self.component,
            table,
            theme: self.theme,
        };
        log::debug!(
            "settings registry built: {} definitions in {} sections",
            settings.len(),
            settings.sections().len()
        );
        Ok(settings)
    }
}

impl Default for ThemeSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The immutable settings registry.
pub struct ThemeSettings {
    component: String,
    table: IndexMap<String, SettingDefinition>,
    theme: Option<ThemeOverrides>,
}

impl ThemeSettings {
    /// Create a new builder.
    pub fn builder() -> ThemeSettingsBuilder {
        ThemeSettingsBuilder::new()
    }

    /// The component namespace for form-field names.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Whether a theme context is attached.
    pub fn has_theme(&self) -> bool {
        self.theme.is_some()
    }

    /// Distinct section names, each exactly once, in first-seen definition
    /// order.
    pub fn sections(&self) -> Vec<&str> {
        self.table
            .values()
            .map(SettingDefinition::section)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Resolve every definition in a section into form fields, in
    /// definition order.
    pub fn section_fields(&self, section: &str, localizer: &dyn Localizer) -> Vec<FormField> {
        self.table
            .values()
            .filter(|def| def.section() == section)
            .map(|def| form::resolve(def, &self.component, localizer))
            .collect()
    }

    /// Resolve one definition into a form field.
    pub fn form_field(&self, key: &str, localizer: &dyn Localizer) -> Result<FormField, SettingsError> {
        let def = self.definition_or_err(key)?;
        Ok(form::resolve(def, &self.component, localizer))
    }

    /// The effective value of a setting: the stored override if present,
    /// else the recorded default.
    ///
    /// Fails with [`SettingsError::MissingTheme`] when no theme context is
    /// attached, and with [`SettingsError::MissingDefault`] when the key has
    /// neither an override nor a default.
    pub fn get(&self, key: &str) -> Result<&SettingValue, SettingsError> {
        let theme = self.theme.as_ref().ok_or(SettingsError::MissingTheme)?;
        let def = self.definition_or_err(key)?;
        if let Some(value) = theme.get(key) {
            return Ok(value);
        }
        def.default()
            .ok_or_else(|| SettingsError::MissingDefault(key.to_string()))
    }

    /// Check a candidate text value against the definition's constraints
    /// before the host persists it.
    pub fn validate(&self, key: &str, candidate: &str) -> Result<(), SettingsError> {
        let def = self.definition_or_err(key)?;
        match def.kind() {
            WidgetKind::Text => match def.text_rule() {
                Some(rule) => rule.check(key, candidate),
                None => Ok(()),
            },
            WidgetKind::Select => match def.options() {
                Some(options) if !options.contains(candidate) => Err(SettingsError::Rejected {
                    key: key.to_string(),
                    reason: "not one of the configured choices".to_string(),
                }),
                _ => Ok(()),
            },
            WidgetKind::ColourPicker => {
                if widget::is_colour(candidate) {
                    Ok(())
                } else {
                    Err(SettingsError::Rejected {
                        key: key.to_string(),
                        reason: "not a hex colour".to_string(),
                    })
                }
            }
            WidgetKind::Checkbox => match candidate {
                "0" | "1" => Ok(()),
                _ => Err(SettingsError::Rejected {
                    key: key.to_string(),
                    reason: "checkbox values are 0 or 1".to_string(),
                }),
            },
            WidgetKind::Html | WidgetKind::TextArea | WidgetKind::HtmlEditor => Ok(()),
        }
    }

    /// Replace every `[[setting:key]]` token in `css` with the effective
    /// value of `key`.
    pub fn apply(&self, key: &str, css: &mut String) -> Result<(), SettingsError> {
        self.apply_with(key, css, |value| value.to_string(), "")
    }

    /// Like [`apply`](Self::apply), with a caller-supplied transform over
    /// the rendered value and a literal suffix (e.g. `"px"`).
    pub fn apply_with<F>(
        &self,
        key: &str,
        css: &mut String,
        transform: F,
        suffix: &str,
    ) -> Result<(), SettingsError>
    where
        F: FnOnce(&str) -> String,
    {
        let rendered = self.get(key)?.render();
        let mut value = transform(&rendered);
        value.push_str(suffix);
        stylesheet::substitute(css, key, &value);
        Ok(())
    }

    /// Look up a definition by key.
    pub fn definition(&self, key: &str) -> Option<&SettingDefinition> {
        self.table.get(key)
    }

    /// Iterate all keys in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn definition_or_err(&self, key: &str) -> Result<&SettingDefinition, SettingsError> {
        self.table
            .get(key)
            .ok_or_else(|| SettingsError::UnknownSetting(key.to_string()))
    }
}
