//! Rule formatting.
//!
//! A [`Formatter`] turns [`StyleRule`] trees into CSS text. It is configured
//! once, by preset ([`Formatter::pretty`], [`Formatter::compact`]), by fluent
//! setters, or from a serialized [`Decorations`] profile, and then only read.
//!
//! # Render algorithm
//!
//! For each rule:
//!
//! 1. An empty rule is skipped unless `show_empty_style` is set; its children
//!    are still written.
//! 2. Every post-processor runs on the rule's properties, in registration order.
//! 3. Selector, optional comment and opening brace are written.
//! 4. Each property is written once per target it requires (canonical first),
//!    dropping lines whose name or value is absent and lines identical to one
//!    already written for the same property.
//! 5. The closing brace is written, then the children in order.
//!
//! Post-processors mutate the rule they are given. Formatting the same tree
//! twice therefore sees the first pass's changes; format a clone when that
//! matters.

mod decorations;
mod output;

pub use decorations::{ColorSyntax, Decorations};

use std::fmt;
use std::sync::Arc;

use crate::properties::Properties;
use crate::rule::StyleRule;
use crate::style::Style;
use crate::stylesheet::StyleProvider;
use crate::value::{Color, Value};

/// Renders a [`Color`] as CSS text.
pub type ColorHook = dyn Fn(&Color) -> String + Send + Sync;

/// Reshapes a rule's properties right before it is written.
pub type PostProcessor = dyn Fn(&mut Properties) + Send + Sync;

/// Writes style rules as CSS text.
///
/// # Example
///
/// ```rust
/// use stylist::{Formatter, StyleRule};
///
/// let mut rule = StyleRule::new(".title");
/// rule.properties.set("color", "black");
///
/// assert_eq!(Formatter::compact().format_rule(&mut rule.clone()), ".title{color:black;}");
/// assert_eq!(
///     Formatter::pretty().format_rule(&mut rule),
///     ".title {\n\tcolor: black;\n}\n\n"
/// );
/// ```
#[derive(Clone)]
pub struct Formatter {
    decorations: Decorations,
    color: Arc<ColorHook>,
    post_processors: Vec<Arc<PostProcessor>>,
}

impl Formatter {
    /// A formatter with no decoration and no post-processing.
    pub fn new() -> Self {
        Self::with_decorations(Decorations::default())
    }

    /// A formatter using `decorations`, with the color hook its profile names.
    pub fn with_decorations(decorations: Decorations) -> Self {
        let color = decorations.color.hook();
        Self {
            decorations,
            color,
            post_processors: Vec::new(),
        }
    }

    /// Human-readable output: one property per line, tab indented, a blank
    /// line after each rule, comments enabled.
    pub fn pretty() -> Self {
        Self::with_decorations(Decorations::pretty())
    }

    /// Machine-readable output: no whitespace and no comments.
    pub fn compact() -> Self {
        Self::with_decorations(Decorations::compact())
    }

    /// The current decoration profile.
    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    /// Sets the text written before and after every selector.
    pub fn selector(mut self, before: &str, after: &str) -> Self {
        self.decorations.before_selector = before.to_string();
        self.decorations.after_selector = after.to_string();
        self
    }

    /// Sets the text written after every `{`.
    pub fn start_brace(mut self, after: &str) -> Self {
        self.decorations.after_open_brace = after.to_string();
        self
    }

    /// Sets the text written before and after every `}`.
    pub fn end_brace(mut self, before: &str, after: &str) -> Self {
        self.decorations.before_close_brace = before.to_string();
        self.decorations.after_close_brace = after.to_string();
        self
    }

    /// Sets the text written before and after every property name.
    pub fn property_name(mut self, before: &str, after: &str) -> Self {
        self.decorations.before_property_name = before.to_string();
        self.decorations.after_property_name = after.to_string();
        self
    }

    /// Sets the text written before and after every property value.
    pub fn property_value(mut self, before: &str, after: &str) -> Self {
        self.decorations.before_property_value = before.to_string();
        self.decorations.after_property_value = after.to_string();
        self
    }

    /// Sets the text written after every `;`.
    pub fn property_line(mut self, after: &str) -> Self {
        self.decorations.after_property_line = after.to_string();
        self
    }

    /// Replaces the color hook. The profile then reports [`ColorSyntax::Custom`].
    pub fn color(mut self, hook: impl Fn(&Color) -> String + Send + Sync + 'static) -> Self {
        self.decorations.color = ColorSyntax::Custom;
        self.color = Arc::new(hook);
        self
    }

    /// Writes colors with one of the built-in syntaxes.
    pub fn color_syntax(mut self, syntax: ColorSyntax) -> Self {
        self.decorations.color = syntax;
        self.color = syntax.hook();
        self
    }

    /// Enables `/* .. */` rule comments.
    pub fn comment(mut self, comment: bool) -> Self {
        self.decorations.comment = comment;
        self
    }

    /// Writes rules without properties as `selector{}`.
    pub fn show_empty_style(mut self, show: bool) -> Self {
        self.decorations.show_empty_style = show;
        self
    }

    /// Appends a post-processor; they run in registration order.
    pub fn post_processor(
        mut self,
        processor: impl Fn(&mut Properties) + Send + Sync + 'static,
    ) -> Self {
        self.post_processors.push(Arc::new(processor));
        self
    }

    /// Renders a color through the configured hook.
    pub fn format_color(&self, color: &Color) -> String {
        (self.color)(color)
    }

    /// Formats one rule tree, running post-processors on it.
    pub fn format_rule(&self, rule: &mut StyleRule) -> String {
        let mut out = String::new();
        self.write_rule(rule, &mut out);
        out
    }

    /// Builds one rule per style and sorts them by selector.
    pub fn rules<'s>(&self, styles: impl IntoIterator<Item = &'s Style>) -> Vec<StyleRule> {
        let mut rules: Vec<StyleRule> = styles.into_iter().map(Style::build).collect();
        rules.sort();
        rules
    }

    /// Formats a whole stylesheet: one rule tree per style, ordered by selector.
    pub fn format<'s>(&self, styles: impl IntoIterator<Item = &'s Style>) -> String {
        let rules = self.rules(styles);
        tracing::debug!(rules = rules.len(), "formatting stylesheet");

        let mut out = String::new();
        for mut rule in rules {
            self.write_rule(&mut rule, &mut out);
        }
        out
    }

    /// Formats every style a provider supplies.
    pub fn format_provider<P: StyleProvider + ?Sized>(&self, provider: &P) -> String {
        self.format(&provider.styles())
    }

    fn write_rule(&self, rule: &mut StyleRule, out: &mut String) {
        let decorations = &self.decorations;

        if !rule.properties.is_empty() || decorations.show_empty_style {
            for processor in &self.post_processors {
                processor(&mut rule.properties);
            }
            tracing::trace!(selector = %rule.selector, properties = rule.properties.len(), "writing rule");

            out.push_str(&decorations.before_selector);
            if let Some(comment) = self.comment_text(rule.comment.as_deref()) {
                out.push_str(&comment);
            }
            out.push_str(&rule.selector);
            out.push_str(&decorations.after_selector);
            out.push('{');
            out.push_str(&decorations.after_open_brace);

            for (name, value) in rule.properties.iter() {
                self.write_property(name, value, out);
            }

            out.push_str(&decorations.before_close_brace);
            out.push('}');
            out.push_str(&decorations.after_close_brace);
        }

        for child in &mut rule.children {
            self.write_rule(child, out);
        }
    }

    fn write_property(&self, name: &Value, value: &Value, out: &mut String) {
        let decorations = &self.decorations;
        let color: &dyn Fn(&Color) -> String = &*self.color;
        let mut written: Vec<(String, String)> = Vec::new();

        for target in name.targets().union(value.targets()).fan_out() {
            let (Some(name), Some(value)) = (
                name.render_with(target, color),
                value.render_with(target, color),
            ) else {
                continue;
            };
            if written.iter().any(|(n, v)| *n == name && *v == value) {
                continue;
            }

            out.push_str(&decorations.before_property_name);
            out.push_str(&name);
            out.push_str(&decorations.after_property_name);
            out.push(':');
            out.push_str(&decorations.before_property_value);
            out.push_str(&value);
            out.push_str(&decorations.after_property_value);
            out.push(';');
            out.push_str(&decorations.after_property_line);
            written.push((name, value));
        }
    }

    fn comment_text(&self, comment: Option<&str>) -> Option<String> {
        match comment {
            Some(text) if self.decorations.comment && !text.is_empty() => {
                Some(format!("/* {text} */"))
            }
            _ => None,
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("decorations", &self.decorations)
            .field("post_processors", &self.post_processors.len())
            .finish_non_exhaustive()
    }
}
