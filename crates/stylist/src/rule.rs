//! Style rules.

use std::cmp::Ordering;
use std::fmt;

use crate::format::Formatter;
use crate::properties::Properties;
use crate::style::Style;

/// Placeholder for the parent selector in sub-rule templates.
pub const SELECTOR_PLACEHOLDER: &str = "$";

/// Marker introducing a pseudo-element in a selector.
pub const PSEUDO_ELEMENT_MARKER: &str = "::";

/// One CSS rule: a selector, its properties, and nested rules.
///
/// Rules are ordered by selector, which is what gives multi-rule output a
/// stable order. A rule owns its properties and children exclusively.
#[derive(Debug, Clone, Default)]
pub struct StyleRule {
    /// The selector text, e.g. `.A` or `.A:hover::before`.
    pub selector: String,
    /// Comment emitted before the selector when the formatter allows it.
    pub comment: Option<String>,
    pub properties: Properties,
    pub children: Vec<StyleRule>,
}

impl StyleRule {
    /// Creates an empty rule with the given selector.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    /// Builds the rule tree for `style` as a root rule.
    pub fn create(style: &Style) -> Self {
        style.build()
    }

    /// Total number of rules in this tree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(StyleRule::count).sum::<usize>()
    }
}

impl PartialEq for StyleRule {
    fn eq(&self, other: &Self) -> bool {
        self.selector == other.selector
    }
}

impl Eq for StyleRule {}

impl PartialOrd for StyleRule {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StyleRule {
    fn cmp(&self, other: &Self) -> Ordering {
        self.selector.cmp(&other.selector)
    }
}

impl fmt::Display for StyleRule {
    /// Formats a copy of this rule with [`Formatter::pretty`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut copy = self.clone();
        f.write_str(&Formatter::pretty().format_rule(&mut copy))
    }
}

/// Derives a nested selector from `template` and the parent selector.
///
/// The placeholder `$` in `template` is replaced by the parent selector with
/// any pseudo-element suffix (`::before`, ...) removed; the suffix is then
/// appended again, so pseudo-classes land in front of the pseudo-element.
///
/// # Example
///
/// ```rust
/// use stylist::compose_selector;
///
/// assert_eq!(compose_selector("$:hover", ".foo::before"), ".foo:hover::before");
/// assert_eq!(compose_selector("$ > p", ".foo"), ".foo > p");
/// ```
pub fn compose_selector(template: &str, parent: &str) -> String {
    let (base, pseudo) = match parent.find(PSEUDO_ELEMENT_MARKER) {
        Some(index) => parent.split_at(index),
        None => (parent, ""),
    };
    let mut selector = template.replace(SELECTOR_PLACEHOLDER, base);
    selector.push_str(pseudo);
    selector
}
