//! Integration tests for stylesheet token substitution:
//! - every occurrence of a known token is replaced
//! - unrelated text survives byte for byte
//! - a fully substituted buffer reports no remaining tokens

use stylesheet::{substitute, token, tokens};

const TEMPLATE: &str = r#"
html, body {
    color: [[setting:fontcolor]];
    background: [[setting:mainbackgroundcolor]];
}
a, a:visited {
    color: [[setting:linkcolor]];
}
#headerwrap {
    height: [[setting:headerheight]]px;
    background-color: [[setting:headerbgc]];
    color: [[setting:fontcolor]];
}
"#;

#[test]
fn full_pass_leaves_no_tokens_behind() {
    let mut css = TEMPLATE.to_string();
    substitute(&mut css, "fontcolor", "#000000");
    substitute(&mut css, "mainbackgroundcolor", "#E0E0E0");
    substitute(&mut css, "linkcolor", "#113759");
    substitute(&mut css, "headerheight", "110");
    substitute(&mut css, "headerbgc", "#1f465e");

    assert_eq!(tokens(&css).count(), 0, "leftover tokens: {css}");
    assert!(css.contains("height: 110px;"));
    assert!(css.contains("color: #000000;"));
}

#[test]
fn repeated_token_is_replaced_at_every_site() {
    let mut css = TEMPLATE.to_string();
    let replaced = substitute(&mut css, "fontcolor", "#333333");
    assert_eq!(replaced, 2);
    assert!(!css.contains(&token("fontcolor")));
}

#[test]
fn untouched_rules_survive_substitution() {
    let mut css = TEMPLATE.to_string();
    substitute(&mut css, "fontcolor", "#000000");
    // Rules without tokens keep their exact text.
    assert!(css.contains("a, a:visited {"));
    // Unsubstituted tokens also keep their exact text.
    assert!(css.contains("[[setting:linkcolor]]"));
}

#[test]
fn scan_reports_duplicates_in_order() {
    let names: Vec<_> = tokens(TEMPLATE).collect();
    assert_eq!(
        names,
        vec![
            "fontcolor",
            "mainbackgroundcolor",
            "linkcolor",
            "headerheight",
            "headerbgc",
            "fontcolor",
        ]
    );
}
