//! Property values that render differently per target.
//!
//! A [`Value`] is either a [`Literal`] (one atom of text or a [`Color`]) or a
//! [`Composite`] (ordered children joined by a separator). Values are used
//! both as property *names* and property *values*; a rule stores pairs of
//! them in its [`Properties`](crate::Properties).
//!
//! # Rendering
//!
//! [`Value::render`] produces the text for one [`RenderTarget`], or `None`
//! when the value is absent for that target. An absent value makes the
//! formatter omit the whole property line for that target instead of writing
//! an empty token. Empty text counts as absent.
//!
//! # Vendor requirements
//!
//! Every value carries a [`TargetSet`] of non-canonical targets it requires.
//! When a property is formatted, the union of its name's and value's
//! requirements decides how many lines are emitted: one for the canonical
//! target, then one per required target. A *prefixed* literal additionally
//! renders `prefix + text` for the targets it requires, which is how
//! `-webkit-transform` or `-webkit-calc(..)` come out.
//!
//! # Equality
//!
//! Two values are equal when their canonical renderings are equal. This is
//! what [`Properties::compact_to`](crate::Properties::compact_to) and
//! [`Properties::contains`](crate::Properties::contains) rely on.

mod color;

pub use color::Color;

use std::fmt;

use crate::target::{RenderTarget, TargetSet};

/// The payload of a [`Literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Text(String),
    Color(Color),
    /// Renders nothing for every target.
    Absent,
}

/// A single value that renders the same text for every target unless told
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    atom: Atom,
    targets: TargetSet,
    prefixed: bool,
    overrides: Vec<(RenderTarget, Option<String>)>,
}

impl Literal {
    /// A literal requiring no vendor targets.
    pub fn new(atom: Atom) -> Self {
        Self {
            atom,
            targets: TargetSet::EMPTY,
            prefixed: false,
            overrides: Vec::new(),
        }
    }

    /// A text literal.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Atom::Text(text.into()))
    }

    /// A color literal, written through the formatter's color hook.
    pub fn color(color: Color) -> Self {
        Self::new(Atom::Color(color))
    }

    /// A literal absent for every target.
    pub fn absent() -> Self {
        Self::new(Atom::Absent)
    }

    /// Declares targets this literal requires, rendered unprefixed.
    pub fn require(mut self, targets: impl Into<TargetSet>) -> Self {
        self.targets = self.targets.union(targets.into());
        self
    }

    /// Declares targets this literal requires, rendered with the target's
    /// prefix in front of the text.
    pub fn prefixed(mut self, targets: impl Into<TargetSet>) -> Self {
        self.targets = self.targets.union(targets.into());
        self.prefixed = true;
        self
    }

    /// Registers explicit text for one target. The target becomes required
    /// when it is not the canonical one.
    pub fn with(mut self, target: RenderTarget, text: impl Into<String>) -> Self {
        self.set_override(target, Some(text.into()));
        self
    }

    /// Makes this literal absent for one target.
    pub fn omit(mut self, target: RenderTarget) -> Self {
        self.set_override(target, None);
        self
    }

    fn set_override(&mut self, target: RenderTarget, text: Option<String>) {
        if !target.is_canonical() {
            self.targets.insert(target);
        }
        match self.overrides.iter_mut().find(|(t, _)| *t == target) {
            Some(entry) => entry.1 = text,
            None => self.overrides.push((target, text)),
        }
    }

    /// The payload.
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// Non-canonical targets this literal requires.
    pub fn targets(&self) -> TargetSet {
        self.targets
    }

    fn override_for(&self, target: RenderTarget) -> Option<&Option<String>> {
        self.overrides
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, text)| text)
    }

    fn render_with(&self, target: RenderTarget, color: &dyn Fn(&Color) -> String) -> Option<String> {
        if let Some(text) = self.override_for(target) {
            return text.clone().filter(|t| !t.is_empty());
        }

        // Targets without their own text fall back to the canonical rendering.
        let base = match self.override_for(RenderTarget::Standard) {
            Some(text) => text.clone()?,
            None => match &self.atom {
                Atom::Text(text) => text.clone(),
                Atom::Color(c) => color(c),
                Atom::Absent => return None,
            },
        };
        if base.is_empty() {
            return None;
        }

        if self.prefixed && !target.is_canonical() && self.targets.contains(target) {
            Some(format!("{}{}", target.prefix(), base))
        } else {
            Some(base)
        }
    }
}

/// Ordered child values joined by a separator.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    children: Vec<Value>,
    separator: String,
    targets: TargetSet,
}

impl Composite {
    /// Joins `children` with `separator`.
    pub fn new(children: Vec<Value>, separator: impl Into<String>) -> Self {
        Self {
            children,
            separator: separator.into(),
            targets: TargetSet::EMPTY,
        }
    }

    /// The joined values, in order.
    pub fn children(&self) -> &[Value] {
        &self.children
    }

    /// The text placed between children.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    fn render_with(&self, target: RenderTarget, color: &dyn Fn(&Color) -> String) -> Option<String> {
        if self.children.is_empty() {
            return None;
        }
        let mut out = String::new();
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            out.push_str(&child.render_with(target, color)?);
        }
        Some(out)
    }
}

/// A property name or value.
///
/// # Example
///
/// ```rust
/// use stylist::{RenderTarget, TargetSet, Value};
///
/// let list = Value::join(vec![Value::from("10px"), Value::from("20em")], ",");
/// assert_eq!(list.render(RenderTarget::Standard).as_deref(), Some("10px,20em"));
///
/// let name = Value::prefixed("transform", RenderTarget::Webkit);
/// assert_eq!(name.render(RenderTarget::Webkit).as_deref(), Some("-webkit-transform"));
/// assert_eq!(name.render(RenderTarget::Standard).as_deref(), Some("transform"));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    Literal(Literal),
    Composite(Composite),
}

impl Value {
    /// A plain text value.
    pub fn text(text: impl Into<String>) -> Self {
        Value::Literal(Literal::text(text))
    }

    /// A number without a trailing `.0`.
    pub fn number(number: f64) -> Self {
        Value::Literal(Literal::text(number.to_string()))
    }

    /// A number followed by a unit, e.g. `10px`.
    pub fn length(number: f64, unit: &str) -> Self {
        Value::Literal(Literal::text(format!("{number}{unit}")))
    }

    /// A color value.
    pub fn color(color: Color) -> Self {
        Value::Literal(Literal::color(color))
    }

    /// A value that renders nothing; the owning property line is omitted.
    pub fn absent() -> Self {
        Value::Literal(Literal::absent())
    }

    /// A literal rendered with the target prefix for each required target.
    pub fn prefixed(text: impl Into<String>, targets: impl Into<TargetSet>) -> Self {
        Value::Literal(Literal::text(text).prefixed(targets))
    }

    /// Joins `children` with `separator`.
    pub fn join(children: Vec<Value>, separator: impl Into<String>) -> Self {
        Value::Composite(Composite::new(children, separator))
    }

    /// Adds required targets without prefixing.
    pub fn require(self, targets: impl Into<TargetSet>) -> Self {
        match self {
            Value::Literal(literal) => Value::Literal(literal.require(targets)),
            Value::Composite(mut composite) => {
                composite.targets = composite.targets.union(targets.into());
                Value::Composite(composite)
            }
        }
    }

    /// Every non-canonical target this value (or any child) requires.
    pub fn targets(&self) -> TargetSet {
        match self {
            Value::Literal(literal) => literal.targets,
            Value::Composite(composite) => composite
                .children
                .iter()
                .fold(composite.targets, |set, child| set.union(child.targets())),
        }
    }

    /// Renders for `target` using the default color text.
    pub fn render(&self, target: RenderTarget) -> Option<String> {
        self.render_with(target, &|c: &Color| c.to_string())
    }

    /// Renders for `target`, formatting colors through `color`.
    pub fn render_with(&self, target: RenderTarget, color: &dyn Fn(&Color) -> String) -> Option<String> {
        match self {
            Value::Literal(literal) => literal.render_with(target, color),
            Value::Composite(composite) => composite.render_with(target, color),
        }
    }

    /// The canonical rendering.
    pub fn canonical(&self) -> Option<String> {
        self.render(RenderTarget::Standard)
    }

    /// Returns true if the canonical rendering is absent.
    pub fn is_absent(&self) -> bool {
        self.canonical().is_none()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical() {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::text(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::text(text.as_str())
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::text(number.to_string())
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::number(number)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::color(color)
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        Value::Literal(literal)
    }
}

impl From<Composite> for Value {
    fn from(composite: Composite) -> Self {
        Value::Composite(composite)
    }
}
