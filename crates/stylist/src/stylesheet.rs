//! Explicit style registration.
//!
//! Batch export needs the full list of styles an application defines. That
//! list is assembled by hand: a [`Stylesheet`] collects styles (and keyed
//! [`StyleFamily`] members) in registration order, and anything that can
//! hand out styles implements [`StyleProvider`].
//!
//! ```rust
//! use stylist::{Formatter, Style, Stylesheet};
//!
//! let sheet = Stylesheet::new()
//!     .add(Style::named("b", |s| { s.declare("color", "blue"); }))
//!     .add(Style::named("a", |s| { s.declare("color", "red"); }));
//!
//! assert_eq!(
//!     Formatter::compact().format_provider(&sheet),
//!     ".a{color:red;}.b{color:blue;}"
//! );
//! ```

use std::hash::Hash;

use crate::style::{Style, StyleFamily};

/// Supplies an ordered sequence of styles for export.
pub trait StyleProvider {
    fn styles(&self) -> Vec<Style>;
}

impl StyleProvider for [Style] {
    fn styles(&self) -> Vec<Style> {
        self.to_vec()
    }
}

impl StyleProvider for Vec<Style> {
    fn styles(&self) -> Vec<Style> {
        self.clone()
    }
}

/// An ordered registration list of styles.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    styles: Vec<Style>,
}

impl Stylesheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one style.
    pub fn add(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    /// Registers the family member of every key, in the given order.
    pub fn add_family<K>(mut self, family: &StyleFamily<K>, keys: impl IntoIterator<Item = K>) -> Self
    where
        K: Clone + Eq + Hash + Send + Sync + 'static,
    {
        self.styles.extend(family.all(keys));
        self
    }

    /// Registers everything another provider supplies.
    pub fn extend<P: StyleProvider + ?Sized>(mut self, provider: &P) -> Self {
        self.styles.extend(provider.styles());
        self
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Registered styles, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }
}

impl StyleProvider for Stylesheet {
    fn styles(&self) -> Vec<Style> {
        self.styles.clone()
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.styles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Formatter;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Tone {
        Light,
        Dark,
    }

    #[test]
    fn test_registration_order_is_kept() {
        let a = Style::named("a", |_| {});
        let b = Style::named("b", |_| {});
        let sheet = Stylesheet::new().add(b.clone()).add(a.clone());
        let names: Vec<String> = sheet.iter().map(Style::name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn test_add_family() {
        let family = StyleFamily::new(|tone: &Tone, s| {
            s.declare(
                "color",
                match tone {
                    Tone::Light => "white",
                    Tone::Dark => "black",
                },
            );
        });
        let sheet = Stylesheet::new().add_family(&family, [Tone::Light, Tone::Dark]);
        assert_eq!(sheet.len(), 2);

        let light = family.of(Tone::Light);
        assert_eq!(sheet.styles()[0].location(), light.location());
    }

    #[test]
    fn test_extend_from_provider() {
        let others = vec![Style::named("x", |_| {}), Style::named("y", |_| {})];
        let sheet = Stylesheet::new().add(Style::named("w", |_| {})).extend(&others);
        assert_eq!(sheet.len(), 3);
        assert!(!sheet.is_empty());
        assert!(Stylesheet::new().is_empty());
    }

    #[test]
    fn test_format_sheet_directly() {
        let sheet = Stylesheet::new().add(Style::named("only", |s| {
            s.declare("width", "1px");
        }));
        assert_eq!(Formatter::compact().format(&sheet), ".only{width:1px;}");
    }
}
