//! Admin settings metadata for the Morphing web theme.
//!
//! The crate focuses on *data* handling — a declarative table mapping
//! setting keys to widget kinds, defaults, validation rules, and admin-panel
//! sections. The host framework renders the forms, persists the values, and
//! resolves language strings; this crate answers three questions: which
//! fields belong on which settings page, what is the effective value of a
//! setting, and what goes in place of a `[[setting:NAME]]` token in the
//! generated stylesheet.
//!
//! # Example
//!
//! ```
//! use theme::defaults::morphing_settings;
//! use theme::ThemeOverrides;
//!
//! let stored = ThemeOverrides::new().with("linkcolor", "#336699");
//! let settings = morphing_settings(Some(stored));
//!
//! let mut css = String::from("a { color: [[setting:linkcolor]]; }");
//! settings.apply("linkcolor", &mut css).unwrap();
//! assert_eq!(css, "a { color: #336699; }");
//! ```

pub mod defaults;
pub mod definition;
pub mod errors;
pub mod form;
pub mod registry;
pub mod value;
pub mod widget;

// Re-export main types
pub use definition::SettingDefinition;
pub use errors::SettingsError;
pub use form::{Control, FormField, Localizer, SelectChoice, TagLocalizer};
pub use registry::{ThemeOverrides, ThemeSettings, ThemeSettingsBuilder};
pub use value::SettingValue;
pub use widget::{pixel_sizes, CssTarget, OptionLabel, SelectOptions, TextRule, WidgetKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() {
        // Author a definition.
        let def = SettingDefinition::colour(
            "headerbgc",
            "header",
            "#1f465e",
            CssTarget::new("#headerwrap", "background-color"),
        );
        assert_eq!(def.kind(), WidgetKind::ColourPicker);

        // Register it and resolve the form field.
        let settings = ThemeSettings::builder()
            .with_component("theme_morphing")
            .register(def)
            .build()
            .unwrap();
        let field = settings.form_field("headerbgc", &TagLocalizer).unwrap();
        assert_eq!(field.name, "theme_morphing/headerbgc");
        assert_eq!(field.title, "headerbgc");
    }
}
