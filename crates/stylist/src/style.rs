//! Style descriptions and the rule builder.
//!
//! A [`Style`] is a declaration callback plus an identity. Building it runs
//! the callback against a [`RuleContext`], the handle every property builder
//! writes through:
//!
//! ```rust
//! use stylist::{Formatter, Style};
//!
//! let link = Style::named("link", |s| {
//!     s.declare("color", "black");
//!     s.sub_rule("$:hover", &Style::new(|s| {
//!         s.declare("color", "red");
//!     }));
//! });
//!
//! let css = Formatter::compact().format(&[link]);
//! assert_eq!(css, ".link{color:black;}.link:hover{color:red;}");
//! ```
//!
//! # Context scoping
//!
//! The rule under construction is passed explicitly as `&mut RuleContext`.
//! A sub-rule gets its own context for its own fresh rule, and the child is
//! linked into the parent only after its callback returns. Builds on
//! different threads share nothing, and a callback that panics leaves no
//! partially built child behind.
//!
//! # Property builders
//!
//! [`PropertyDefinition`] is the seam typed property builders sit on: a
//! property name plus the vendor targets it must be fanned out to.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use crate::identity::Location;
use crate::properties::Properties;
use crate::rule::{compose_selector, StyleRule};
use crate::target::{RenderTarget, TargetSet};
use crate::value::Value;

type Declare = dyn Fn(&mut RuleContext<'_>) + Send + Sync;

#[derive(Clone)]
struct StyleInner {
    location: Location,
    class_name: Option<String>,
    comment: Option<String>,
    declare: Arc<Declare>,
}

/// A style description: an identity and a declaration callback.
///
/// Clones share the identity, and therefore the generated class name.
#[derive(Clone)]
pub struct Style {
    inner: Arc<StyleInner>,
}

impl Style {
    /// Creates an anonymous style; its class name comes from the identity registry.
    pub fn new(declare: impl Fn(&mut RuleContext<'_>) + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(StyleInner {
                location: Location::new(),
                class_name: None,
                comment: None,
                declare: Arc::new(declare),
            }),
        }
    }

    /// Creates a style with a fixed class name.
    pub fn named(
        name: impl Into<String>,
        declare: impl Fn(&mut RuleContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        let mut style = Self::new(declare);
        Arc::make_mut(&mut style.inner).class_name = Some(name.into());
        style
    }

    /// Attaches a comment, written before the selector by formatters that allow it.
    pub fn describe(mut self, comment: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.inner).comment = Some(comment.into());
        self
    }

    /// The identity shared by this style and its clones.
    pub fn location(&self) -> Location {
        self.inner.location
    }

    /// The class name: the fixed one, or the registry name for this identity.
    pub fn name(&self) -> String {
        match &self.inner.class_name {
            Some(name) => name.clone(),
            None => self.inner.location.name(),
        }
    }

    /// The root selector, `"." + name`.
    pub fn selector(&self) -> String {
        format!(".{}", self.name())
    }

    /// The comment attached with [`Style::describe`].
    pub fn comment(&self) -> Option<&str> {
        self.inner.comment.as_deref()
    }

    /// Runs the declaration callback against `context`.
    pub fn declare(&self, context: &mut RuleContext<'_>) {
        (self.inner.declare)(context)
    }

    /// Builds this style as a root rule.
    pub fn build(&self) -> StyleRule {
        let rule = self.build_into(self.selector());
        tracing::debug!(
            selector = %rule.selector,
            properties = rule.properties.len(),
            rules = rule.count(),
            "built style rule"
        );
        rule
    }

    fn build_into(&self, selector: String) -> StyleRule {
        let mut rule = StyleRule::new(selector);
        rule.comment = self.inner.comment.clone();
        self.declare(&mut RuleContext::new(&mut rule));
        rule
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("location", &self.inner.location)
            .field("class_name", &self.inner.class_name)
            .field("comment", &self.inner.comment)
            .finish_non_exhaustive()
    }
}

/// The rule currently being built.
///
/// Property builders write into it with [`RuleContext::declare`]; nested
/// rules are added with [`RuleContext::sub_rule`].
pub struct RuleContext<'a> {
    rule: &'a mut StyleRule,
}

impl<'a> RuleContext<'a> {
    /// Wraps `rule` as the active build target.
    pub fn new(rule: &'a mut StyleRule) -> Self {
        Self { rule }
    }

    /// Selector of the rule under construction.
    pub fn selector(&self) -> &str {
        &self.rule.selector
    }

    /// Declares a property on the active rule, replacing any previous value.
    pub fn declare(&mut self, name: impl Into<Value>, value: impl Into<Value>) -> &mut Self {
        self.rule.properties.set(name, value);
        self
    }

    /// Declares a property whose value is a list joined by `separator`.
    pub fn declare_all(
        &mut self,
        name: impl Into<Value>,
        values: impl IntoIterator<Item = Value>,
        separator: &str,
    ) -> &mut Self {
        let values = Value::join(values.into_iter().collect(), separator);
        self.declare(name, values)
    }

    /// Returns true if `name` is currently declared with the canonical value `value`.
    pub fn is(&self, name: &str, value: &str) -> bool {
        self.rule.properties.contains(name, value)
    }

    /// Value declared for `name` on the rule under construction.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.rule.properties.get(name)
    }

    /// Removes a declaration from the rule under construction.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.rule.properties.remove(name)
    }

    /// Properties of the rule under construction.
    pub fn properties(&self) -> &Properties {
        &self.rule.properties
    }

    /// Mutable properties of the rule under construction.
    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.rule.properties
    }

    /// Builds `style` as a nested rule whose selector is `template` applied to
    /// the active selector (see [`compose_selector`]), and attaches it.
    pub fn sub_rule(&mut self, template: &str, style: &Style) -> &mut Self {
        let selector = compose_selector(template, &self.rule.selector);
        let child = style.build_into(selector);
        tracing::trace!(parent = %self.rule.selector, child = %child.selector, "attached sub-rule");
        self.rule.children.push(child);
        self
    }
}

/// A property name together with the vendor targets it is written for.
///
/// # Example
///
/// ```rust
/// use stylist::{Formatter, PropertyDefinition, RenderTarget, Style};
///
/// const TRANSFORM: PropertyDefinition =
///     PropertyDefinition::new("transform").with_vendor(RenderTarget::Webkit);
///
/// let style = Style::named("box", |s| TRANSFORM.set(s, "rotate(10deg)"));
/// assert_eq!(
///     Formatter::compact().format(&[style]),
///     ".box{transform:rotate(10deg);-webkit-transform:rotate(10deg);}"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDefinition {
    name: &'static str,
    vendors: TargetSet,
}

impl PropertyDefinition {
    /// A property written without vendor prefixes.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            vendors: TargetSet::EMPTY,
        }
    }

    /// Adds a target whose prefixed name is written alongside the standard one.
    pub const fn with_vendor(self, target: RenderTarget) -> Self {
        Self {
            name: self.name,
            vendors: self.vendors.with(target),
        }
    }

    /// The standard property name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Vendor targets the name is also written for.
    pub const fn vendors(&self) -> TargetSet {
        self.vendors
    }

    /// The property name as a value, prefixed for each vendor target.
    pub fn name_value(&self) -> Value {
        if self.vendors.is_empty() {
            Value::from(self.name)
        } else {
            Value::prefixed(self.name, self.vendors)
        }
    }

    /// Declares this property with `value`.
    pub fn set(&self, context: &mut RuleContext<'_>, value: impl Into<Value>) {
        context.declare(self.name_value(), value);
    }

    /// Declares this property with a list of values joined by `separator`.
    pub fn set_all(
        &self,
        context: &mut RuleContext<'_>,
        values: impl IntoIterator<Item = Value>,
        separator: &str,
    ) {
        context.declare_all(self.name_value(), values, separator);
    }

    /// Declares the `initial` keyword.
    pub fn initial(&self, context: &mut RuleContext<'_>) {
        self.set(context, "initial");
    }

    /// Returns true if this property is currently declared as `value`.
    pub fn is(&self, context: &RuleContext<'_>, value: &str) -> bool {
        context.is(self.name, value)
    }
}

type FamilyDeclare<K> = dyn Fn(&K, &mut RuleContext<'_>) + Send + Sync;

/// Styles parametrized by a key, typically an enum.
///
/// Each key maps to exactly one [`Style`], created on first use, so every
/// key keeps a stable class name.
///
/// # Example
///
/// ```rust
/// use stylist::StyleFamily;
///
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// enum Level { Info, Warn }
///
/// let badge = StyleFamily::new(|level: &Level, s| {
///     s.declare("color", match level {
///         Level::Info => "blue",
///         Level::Warn => "orange",
///     });
/// });
///
/// assert_eq!(badge.of(Level::Info).location(), badge.of(Level::Info).location());
/// assert_ne!(badge.of(Level::Info).location(), badge.of(Level::Warn).location());
/// ```
pub struct StyleFamily<K> {
    declare: Arc<FamilyDeclare<K>>,
    styles: Mutex<HashMap<K, Style>>,
}

impl<K> StyleFamily<K>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
{
    /// Creates a family whose members run `declare` with their key.
    pub fn new(declare: impl Fn(&K, &mut RuleContext<'_>) + Send + Sync + 'static) -> Self {
        Self {
            declare: Arc::new(declare),
            styles: Mutex::new(HashMap::new()),
        }
    }

    /// The style for `key`, created on first use.
    pub fn of(&self, key: K) -> Style {
        let mut styles = self.styles.lock().unwrap_or_else(PoisonError::into_inner);
        styles
            .entry(key.clone())
            .or_insert_with(|| {
                let declare = Arc::clone(&self.declare);
                Style::new(move |context| declare(&key, context))
            })
            .clone()
    }

    /// The styles for every key, in the given order.
    pub fn all(&self, keys: impl IntoIterator<Item = K>) -> Vec<Style> {
        keys.into_iter().map(|key| self.of(key)).collect()
    }
}

impl<K> fmt::Debug for StyleFamily<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self
            .styles
            .lock()
            .map(|styles| styles.len())
            .unwrap_or_default();
        f.debug_struct("StyleFamily")
            .field("styles", &count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::thread;

    #[test]
    fn test_build_root_selector_from_identity() {
        let style = Style::new(|s| {
            s.declare("color", "black");
        });
        let rule = style.build();
        assert_eq!(rule.selector, format!(".{}", style.location().name()));
        assert!(rule.properties.contains("color", "black"));
    }

    #[test]
    fn test_named_style() {
        let style = Style::named("button", |_| {});
        assert_eq!(style.selector(), ".button");
        assert_eq!(style.clone().name(), "button");
    }

    #[test]
    fn test_clones_share_identity() {
        let style = Style::new(|_| {}).describe("first");
        let copy = style.clone().describe("second");
        assert_eq!(style.location(), copy.location());
        assert_eq!(style.comment(), Some("first"));
        assert_eq!(copy.comment(), Some("second"));
    }

    #[test]
    fn test_sub_rule_composes_selector() {
        let hover = Style::new(|s| {
            s.declare("color", "red");
        });
        let mut parent = StyleRule::new(".foo::before");
        RuleContext::new(&mut parent).sub_rule("$:hover", &hover);

        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].selector, ".foo:hover::before");
        assert!(parent.children[0].properties.contains("color", "red"));
    }

    #[test]
    fn test_nested_sub_rules_restore_context() {
        let inner = Style::new(|s| {
            s.declare("b", "2");
        });
        let middle = Style::new(move |s| {
            s.declare("a", "1");
            s.sub_rule("$ span", &inner);
            s.declare("c", "3");
        });
        let root = Style::named("root", move |s| {
            s.sub_rule("$:hover", &middle);
            s.declare("d", "4");
        });

        let rule = root.build();
        assert!(rule.properties.contains("d", "4"));
        assert_eq!(rule.properties.len(), 1);

        let middle = &rule.children[0];
        assert_eq!(middle.selector, ".root:hover");
        assert!(middle.properties.contains("a", "1"));
        assert!(middle.properties.contains("c", "3"));
        assert_eq!(middle.children[0].selector, ".root:hover span");
        assert!(middle.children[0].properties.contains("b", "2"));
    }

    #[test]
    fn test_panicking_sub_rule_is_not_attached() {
        let broken = Style::new(|s| {
            s.declare("color", "red");
            panic!("broken style");
        });
        let mut parent = StyleRule::new(".p");

        let result = catch_unwind(AssertUnwindSafe(|| {
            RuleContext::new(&mut parent).sub_rule("$:hover", &broken);
        }));

        assert!(result.is_err());
        assert!(parent.children.is_empty());
        assert!(parent.properties.is_empty());

        RuleContext::new(&mut parent).declare("color", "blue");
        assert!(parent.properties.contains("color", "blue"));
    }

    #[test]
    fn test_concurrent_builds_do_not_interfere() {
        let handles: Vec<_> = (0..8)
            .map(|i: i32| {
                thread::spawn(move || {
                    let style = Style::new(move |s| {
                        for n in 0..50 {
                            s.declare(format!("p{n}"), i);
                        }
                    });
                    style.build()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let rule = handle.join().unwrap();
            assert_eq!(rule.properties.len(), 50);
            assert!(rule.properties.iter().all(|(_, v)| v.to_string() == i.to_string()));
        }
    }

    #[test]
    fn test_is_and_declare_all() {
        let style = Style::new(|s| {
            s.declare("display", "flex");
            if s.is("display", "flex") {
                s.declare_all("margin", vec![Value::from(1), Value::from("2px")], " ");
            }
        });
        let rule = style.build();
        assert!(rule.properties.contains("margin", "1 2px"));
    }

    #[test]
    fn test_property_definition_vendor_name() {
        let def = PropertyDefinition::new("transform").with_vendor(RenderTarget::Webkit);
        let name = def.name_value();
        assert_eq!(name.render(RenderTarget::Webkit).as_deref(), Some("-webkit-transform"));
        assert_eq!(name.canonical().as_deref(), Some("transform"));
        assert!(PropertyDefinition::new("color").name_value().targets().is_empty());
    }

    #[test]
    fn test_property_definition_initial_and_is() {
        const OUTLINE: PropertyDefinition = PropertyDefinition::new("outline");
        let style = Style::new(|s| {
            OUTLINE.initial(s);
            assert!(OUTLINE.is(s, "initial"));
        });
        assert!(style.build().properties.contains("outline", "initial"));
    }

    #[test]
    fn test_family_memoizes_per_key() {
        let family = StyleFamily::new(|n: &u8, s| {
            s.declare("order", i32::from(*n));
        });
        let a = family.of(1);
        let b = family.of(1);
        let c = family.of(2);
        assert_eq!(a.location(), b.location());
        assert_ne!(a.location(), c.location());
        assert!(c.build().properties.contains("order", "2"));
        assert_eq!(family.all([1, 2, 3]).len(), 3);
    }
}
