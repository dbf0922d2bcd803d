//! The built-in Morphing settings catalog.
//!
//! Every admin-panel option of the Morphing theme is authored here, grouped
//! by section. Hosts that only need a subset, or that add their own options,
//! can start from an empty [`ThemeSettings::builder`] instead.

use crate::definition::SettingDefinition;
use crate::registry::{ThemeOverrides, ThemeSettings, ThemeSettingsBuilder};
use crate::widget::{pixel_sizes, CssTarget, SelectOptions, TextRule};

/// Component namespace for Morphing form-field names.
pub const COMPONENT: &str = "theme_morphing";

/// Build the complete Morphing registry, optionally with the stored theme
/// values attached.
pub fn morphing_settings(theme: Option<ThemeOverrides>) -> ThemeSettings {
    let mut builder = ThemeSettings::builder().with_component(COMPONENT);
    if let Some(theme) = theme {
        builder = builder.with_theme(theme);
    }
    register_morphing_defaults(builder)
        .build()
        .expect("the morphing catalog registers each key exactly once")
}

/// Register every Morphing setting definition on the builder.
pub fn register_morphing_defaults(builder: ThemeSettingsBuilder) -> ThemeSettingsBuilder {
    builder
        // Reset
        .register(SettingDefinition::html("reset_everything", "reset").with_title_tag("resettitle"))
        // General: typography and colours
        .register(SettingDefinition::select(
            "fontsizereference",
            "general",
            "13",
            pixel_sizes(11..=16),
        ))
        .register(SettingDefinition::colour(
            "fontcolor",
            "general",
            "#000000",
            CssTarget::new("html,body,.form-description", "color"),
        ))
        .register(SettingDefinition::colour(
            "linkcolor",
            "general",
            "#113759",
            CssTarget::new("html a,body a", "color"),
        ))
        .register(SettingDefinition::colour(
            "visitedlinkcolor",
            "general",
            "#113759",
            CssTarget::new("html a,body a", "color"),
        ))
        .register(SettingDefinition::colour(
            "maincolor",
            "general",
            "#1f465e",
            CssTarget::new(
                "#custommenu2, div#jcontrols_button,#footerwrapper,.block div.header,#dock",
                "background-color",
            ),
        ))
        .register(SettingDefinition::colour(
            "loggedincolor",
            "general",
            "#00aeef",
            CssTarget::new("a.logged-in-link", "color"),
        ))
        .register(SettingDefinition::checkbox("alwayslangmenu", "general", true))
        // General: layout
        .register(SettingDefinition::select(
            "layouttype",
            "general",
            "fluid",
            SelectOptions::new()
                .tag("fluid", "layouttypefluid")
                .tag("fixed", "layouttypefixed"),
        ))
        .register(
            SettingDefinition::text("layoutfluidwidth", "general")
                .with_default("100")
                .with_rule(TextRule::Pattern("^[0-9]{1,3}$".to_string())),
        )
        .register(
            SettingDefinition::text("layoutfixedwidth", "general")
                .with_default("900")
                .with_rule(TextRule::unsigned()),
        )
        .register(SettingDefinition::colour(
            "mainbackgroundcolor",
            "general",
            "#E0E0E0",
            CssTarget::new("html, body", "background"),
        ))
        .register(
            SettingDefinition::text("mainbackgroundimage", "general")
                .with_title_tag("backgroundimage")
                .with_rule(TextRule::Url),
        )
        // Header
        .register(SettingDefinition::colour(
            "headerbgc",
            "header",
            "#1f465e",
            CssTarget::new("#headerwrap", "background-color"),
        ))
        .register(
            SettingDefinition::text("headerheight", "header")
                .with_default(110)
                .with_rule(TextRule::unsigned()),
        )
        .register(SettingDefinition::colour(
            "headerlinkcolor",
            "header",
            "#FFFFFF",
            CssTarget::new("#headerwrap a, #jcontrols_button a", "color"),
        ))
        // Logo and breadcrumb
        .register(
            SettingDefinition::text("logo", "logo")
                .with_title_tag("logourl")
                .with_rule(TextRule::Url),
        )
        .register(
            SettingDefinition::text("secondlogo", "logo")
                .with_title_tag("headersecondimage")
                .with_rule(TextRule::Url),
        )
        .register(
            SettingDefinition::text("logooffsetleft", "logo")
                .with_default(105)
                .with_rule(TextRule::unsigned()),
        )
        .register(
            SettingDefinition::text("logooffsettop", "logo")
                .with_default(15)
                .with_rule(TextRule::signed()),
        )
        .register(
            SettingDefinition::text("secondlogooffsetleft", "logo")
                .with_default(425)
                .with_rule(TextRule::unsigned()),
        )
        .register(
            SettingDefinition::text("secondlogooffsettop", "logo")
                .with_default(15)
                .with_rule(TextRule::signed()),
        )
        .register(SettingDefinition::select(
            "breadcrumbfontsize",
            "logo",
            12,
            pixel_sizes(9..=20),
        ))
        .register(
            SettingDefinition::text("breadcrumbheight", "logo")
                .with_default(35)
                .with_rule(TextRule::unsigned()),
        )
        .register(
            SettingDefinition::text("breadcrumbleft", "logo")
                .with_default(15)
                .with_rule(TextRule::signed()),
        )
        .register(
            SettingDefinition::text("breadcrumbtop", "logo")
                .with_default(0)
                .with_rule(TextRule::signed()),
        )
        // Blocks
        .register(SettingDefinition::select(
            "blocktitlefontsize",
            "block",
            12,
            pixel_sizes(9..=20),
        ))
        .register(SettingDefinition::select(
            "regionwidth",
            "block",
            200,
            SelectOptions::new()
                .text("150", "150px")
                .text("170", "170px")
                .text("200", "200px")
                .text("240", "240px")
                .text("290", "290px")
                .text("350", "350px")
                .text("420", "420px"),
        ))
        .register(SettingDefinition::select(
            "blocktitlealign",
            "block",
            "left",
            SelectOptions::new()
                .tag("left", "alignleft")
                .tag("center", "aligncenter")
                .tag("right", "alignright"),
        ))
        .register(
            SettingDefinition::text("blocktitleleft", "block")
                .with_default(5)
                .with_rule(TextRule::signed()),
        )
        .register(SettingDefinition::colour(
            "backgroundcolor",
            "block",
            "#F7F6F1",
            CssTarget::new(".block .content", "background-color"),
        ))
        .register(SettingDefinition::colour(
            "blockheadercolor",
            "block",
            "#1F465E",
            CssTarget::new(".block div.header", "background-color"),
        ))
        .register(SettingDefinition::colour(
            "blockbordercolor",
            "block",
            "#CCCCCC",
            CssTarget::new(".block", "border"),
        ))
        // Miscellaneous
        .register(SettingDefinition::html_editor("footnote", "miscellaneous"))
        .register(SettingDefinition::text_area("customcss", "miscellaneous").with_default(""))
        // Custom menu
        .register(SettingDefinition::select(
            "custommenudisplay",
            "custommenu",
            "none",
            SelectOptions::new()
                .tag("none", "none")
                .tag("front", "frontpage")
                .tag("all", "allpages"),
        ))
        .register(
            SettingDefinition::text("custommenuheight", "custommenu")
                .with_default(35)
                .with_rule(TextRule::unsigned()),
        )
        .register(SettingDefinition::text_area("custommenuitems", "custommenu").with_size(10, 50))
        .register(SettingDefinition::select(
            "custommenualign",
            "custommenu",
            "left",
            SelectOptions::new()
                .tag("left", "alignleft")
                .tag("center", "aligncenter"),
        ))
}
