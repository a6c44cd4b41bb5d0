//! JavaFX stylesheet dialect.
//!
//! JavaFX reads a CSS subset where every property carries the `-fx-` prefix,
//! some properties have other names, and several longhands only exist as
//! shorthands. [`JavaFxLizer`] rewrites a rule's properties accordingly:
//!
//! 1. `padding-*`, `border-*-width`, `border-*-style` and `border-*-color`
//!    are folded into their shorthand when all four sides agree.
//! 2. `cursor: pointer` becomes `cursor: hand`.
//! 3. `text-align` and `vertical-align` merge into `alignment`.
//! 4. Names are mapped (`width` to `pref-width`, `color` to `text-fill`, ...)
//!    and prefixed.

use crate::format::{ColorSyntax, Formatter};
use crate::properties::Properties;
use crate::target::RenderTarget;
use crate::value::{Color, Value};

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

const RENAMES: &[(&str, &str)] = &[
    ("width", "pref-width"),
    ("height", "pref-height"),
    ("color", "text-fill"),
    ("stroke-dasharray", "stroke-dash-array"),
];

const CURSORS: &[(&str, &str)] = &[("pointer", "hand")];

/// A pretty formatter writing JavaFX stylesheets: RGB colors and the
/// [`JavaFxLizer`] post-processor.
///
/// ```rust
/// use stylist::{dialect::javafx, Style};
///
/// let label = Style::named("label", |s| {
///     s.declare("color", "red").declare("text-align", "center");
/// });
/// assert_eq!(
///     javafx::pretty().format(&[label]),
///     ".label {\n\t-fx-text-fill: red;\n\t-fx-alignment: center;\n}\n\n"
/// );
/// ```
pub fn pretty() -> Formatter {
    let lizer = JavaFxLizer::new();
    Formatter::pretty()
        .color_syntax(ColorSyntax::Rgb)
        .post_processor(move |properties| lizer.apply(properties))
}

/// Rewrites properties into the JavaFX dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaFxLizer {
    prefix: String,
}

impl JavaFxLizer {
    /// A lizer using the `-fx-` prefix.
    pub fn new() -> Self {
        Self::with_prefix(RenderTarget::JavaFx.prefix())
    }

    /// A lizer writing `prefix` in front of every property name.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The property name prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Applies every rewrite to `properties`.
    pub fn apply(&self, properties: &mut Properties) {
        compact_sides(properties, "padding", "0", "padding-*");
        compact_sides(properties, "border-width", "0", "border-*-width");
        compact_sides(properties, "border-style", "solid", "border-*-style");
        compact_sides(properties, "border-color", Color::TRANSPARENT, "border-*-color");
        properties.revalue("cursor", CURSORS);

        alignment(properties);

        properties.rename(|name| self.rename(name));
    }

    fn rename(&self, name: &Value) -> Value {
        let Some(name) = name.canonical() else {
            return name.clone();
        };
        let mapped = RENAMES
            .iter()
            .find(|(from, _)| *from == name)
            .map_or(name.as_str(), |&(_, to)| to);
        Value::text(format!("{}{}", self.prefix, mapped))
    }
}

impl Default for JavaFxLizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Folds the four `*` sides of `template` into `shorthand`.
fn compact_sides(
    properties: &mut Properties,
    shorthand: &str,
    default: impl Into<Value>,
    template: &str,
) {
    let names = SIDES.map(|side| template.replace('*', side));
    let sources: Vec<&str> = names.iter().map(String::as_str).collect();
    properties.compact_to(shorthand, default, &sources);
}

/// Merges `text-align` and `vertical-align` into `alignment`.
fn alignment(properties: &mut Properties) {
    let horizontal = properties.remove("text-align");
    let vertical = properties.remove("vertical-align");
    if horizontal.is_none() && vertical.is_none() {
        return;
    }

    let horizontal = horizontal
        .and_then(|v| v.canonical())
        .unwrap_or_else(|| "left".to_string());
    let mut vertical = vertical
        .and_then(|v| v.canonical())
        .unwrap_or_else(|| "center".to_string());
    if vertical == "middle" {
        vertical = "center".to_string();
    }

    let value = if horizontal == "center" && vertical == "center" {
        "center".to_string()
    } else {
        format!("{vertical}-{horizontal}")
    };
    properties.set("alignment", value);
}
