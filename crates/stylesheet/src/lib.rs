//! Placeholder substitution for generated stylesheet text.
//!
//! Theme settings reach the generated stylesheets through placeholder
//! tokens of the form `[[setting:NAME]]`. This crate owns that convention:
//! rendering a token, replacing every occurrence of a token in a text
//! buffer in place, and listing the tokens a buffer still contains.
//! Replacement is literal substring substitution — no escaping and no CSS
//! parsing happen here.
//!
//! # Example
//!
//! ```
//! let mut css = String::from("body { color: [[setting:fontcolor]]; }");
//! stylesheet::substitute(&mut css, "fontcolor", "#000000");
//! assert_eq!(css, "body { color: #000000; }");
//! ```

use std::fmt;

const OPEN: &str = "[[setting:";
const CLOSE: &str = "]]";

/// A placeholder token for a named setting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a>(pub &'a str);

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{OPEN}{}{CLOSE}", self.0)
    }
}

/// Render the placeholder token for a setting name.
pub fn token(name: &str) -> String {
    Token(name).to_string()
}

/// Replace every occurrence of the named token in `css` with `value`.
///
/// The buffer is edited in place. Text that is not an occurrence of the
/// token is left untouched. Returns the number of replacements made.
pub fn substitute(css: &mut String, name: &str, value: &str) -> usize {
    let needle = token(name);
    let mut at = 0;
    let mut count = 0;
    while let Some(pos) = css[at..].find(&needle) {
        let start = at + pos;
        css.replace_range(start..start + needle.len(), value);
        at = start + value.len();
        count += 1;
    }
    if count == 0 {
        log::trace!("token '{name}' not present in stylesheet");
    }
    count
}

/// Iterate the names of all tokens present in `css`, in order of
/// appearance. A name can appear more than once if its token does.
pub fn tokens(css: &str) -> Tokens<'_> {
    Tokens { rest: css }
}

/// Iterator over token names in a stylesheet buffer. See [`tokens`].
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(OPEN)?;
        let after_open = &self.rest[start + OPEN.len()..];
        // An opener without a closer is not a token; scanning stops there.
        let end = after_open.find(CLOSE)?;
        let name = &after_open[..end];
        self.rest = &after_open[end + CLOSE.len()..];
        Some(name)
    }
}
