use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ColorHook;
use crate::value::Color;

/// How colors are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSyntax {
    /// `black`, `white`, `transparent` where possible, `hsl(..)` otherwise.
    #[default]
    Keyword,
    /// Always `hsl(..)` / `hsla(..)`.
    Hsl,
    /// Always `rgb(..)` / `rgba(..)`.
    Rgb,
    /// A hook installed with [`Formatter::color`](super::Formatter::color).
    /// Not loadable from a profile; a formatter built from decorations that
    /// name it writes keywords.
    #[serde(skip)]
    Custom,
}

impl ColorSyntax {
    pub(crate) fn hook(self) -> Arc<ColorHook> {
        match self {
            ColorSyntax::Keyword | ColorSyntax::Custom => Arc::new(|c: &Color| c.to_string()),
            ColorSyntax::Hsl => Arc::new(|c: &Color| c.to_hsl()),
            ColorSyntax::Rgb => Arc::new(|c: &Color| c.to_rgb()),
        }
    }
}

/// The serializable part of a formatter: decoration strings and flags.
///
/// Every field is optional in a profile file; missing ones take the compact
/// (empty) default.
///
/// ```yaml
/// after_selector: " "
/// after_open_brace: "\n"
/// before_property_name: "  "
/// before_property_value: " "
/// after_property_line: "\n"
/// after_close_brace: "\n"
/// color: rgb
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decorations {
    pub before_selector: String,
    pub after_selector: String,
    pub after_open_brace: String,
    pub before_close_brace: String,
    pub after_close_brace: String,
    pub before_property_name: String,
    pub after_property_name: String,
    pub before_property_value: String,
    pub after_property_value: String,
    pub after_property_line: String,
    /// Write rule comments as `/* .. */` before the selector.
    pub comment: bool,
    /// Write rules that have no properties as `selector{}`.
    pub show_empty_style: bool,
    /// How colors are written.
    pub color: ColorSyntax,
}

impl Decorations {
    /// Decorations of [`Formatter::pretty`](super::Formatter::pretty).
    pub fn pretty() -> Self {
        Self {
            after_selector: " ".into(),
            after_open_brace: "\n".into(),
            before_property_name: "\t".into(),
            before_property_value: " ".into(),
            after_property_line: "\n".into(),
            after_close_brace: "\n\n".into(),
            comment: true,
            ..Self::default()
        }
    }

    /// Decorations of [`Formatter::compact`](super::Formatter::compact): all empty.
    pub fn compact() -> Self {
        Self::default()
    }
}
