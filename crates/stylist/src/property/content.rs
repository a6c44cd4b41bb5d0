use std::fmt;

use crate::style::{PropertyDefinition, RuleContext};

/// The `content` property.
pub const CONTENT: PropertyDefinition = PropertyDefinition::new("content");

/// Starts a `content` declaration on the rule under construction.
///
/// ```rust
/// use stylist::{property::content, Formatter, Style};
///
/// let quote = Style::named("quote", |s| {
///     s.sub_rule("$::before", &Style::new(|s| content(s).open_quote()));
///     s.sub_rule("$::after", &Style::new(|s| content(s).text("\u{201D}")));
/// });
/// assert_eq!(
///     Formatter::compact().format(&[quote]),
///     ".quote::before{content:open-quote;}.quote::after{content:\"\u{201D}\";}"
/// );
/// ```
pub fn content<'c, 'a>(context: &'c mut RuleContext<'a>) -> Content<'c, 'a> {
    Content { context }
}

/// Builder for the `content` property.
pub struct Content<'c, 'a> {
    context: &'c mut RuleContext<'a>,
}

impl Content<'_, '_> {
    /// A quoted string, escaped as a CSS string token.
    pub fn text(self, text: &str) {
        CONTENT.set(self.context, CssString(text).to_string());
    }

    /// No pseudo-element is generated.
    pub fn none(self) {
        CONTENT.set(self.context, "none");
    }

    /// The value of the element's attribute `name`.
    pub fn attr(self, name: &str) {
        CONTENT.set(self.context, format!("attr({name})"));
    }

    /// Opening quotation mark from the `quotes` property.
    pub fn open_quote(self) {
        CONTENT.set(self.context, "open-quote");
    }

    /// Closing quotation mark from the `quotes` property.
    pub fn close_quote(self) {
        CONTENT.set(self.context, "close-quote");
    }
}

struct CssString<'t>(&'t str);

impl fmt::Display for CssString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cssparser::serialize_string(self.0, f)
    }
}
