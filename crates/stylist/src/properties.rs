//! Ordered property collection.
//!
//! [`Properties`] is the body of one [`StyleRule`](crate::StyleRule): an
//! ordered list of `(name, value)` pairs, unique by the canonical text of the
//! name (or, for vendor-only names, the first vendor spelling). Order is
//! emission order.
//!
//! # Ordering rules
//!
//! - [`Properties::set`] replaces the value of an existing name in place, or
//!   appends a new entry.
//! - [`Properties::rename`] keeps every entry where it is; when two names
//!   collide after renaming, the later value wins at the earlier position.
//! - [`Properties::compact_to`] collapses several entries into one placed at
//!   the position of the first collapsed entry.
//!
//! Post-processors receive a `&mut Properties` and use exactly these
//! operations to reshape a rule before it is written.

use crate::value::Value;

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    name: Value,
    value: Value,
}

impl Entry {
    fn new(name: Value, value: Value) -> Self {
        Self {
            key: key_of(&name),
            name,
            value,
        }
    }
}

/// The lookup key of a name: its first rendering, canonical target first.
/// Vendor-only names are keyed by their prefixed spelling.
fn key_of(name: &Value) -> String {
    name.targets()
        .fan_out()
        .find_map(|target| name.render(target))
        .unwrap_or_default()
}

/// An ordered, name-deduplicating collection of property entries.
///
/// # Example
///
/// ```rust
/// use stylist::Properties;
///
/// let mut props = Properties::new();
/// props.set("color", "black");
/// props.set("margin", "0");
/// props.set("color", "white");
///
/// let names: Vec<String> = props.names().map(|n| n.to_string()).collect();
/// assert_eq!(names, vec!["color", "margin"]);
/// assert!(props.contains("color", "white"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: Vec<Entry>,
}

impl Properties {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Index of the entry named `name`. Names absent for the canonical target
    /// are looked up by their vendor spelling, e.g. `-webkit-font-smoothing`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == name)
    }

    /// Sets `name` to `value`, keeping the original position of an existing name.
    pub fn set(&mut self, name: impl Into<Value>, value: impl Into<Value>) {
        let entry = Entry::new(name.into(), value.into());
        match self.position(&entry.key) {
            Some(index) => self.entries[index].value = entry.value,
            None => self.entries.push(entry),
        }
    }

    /// Returns the value stored for `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|i| &self.entries[i].value)
    }

    /// Removes `name` and returns its value, or `None` if it was not present.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.position(name)?;
        Some(self.entries.remove(index).value)
    }

    /// Returns true if `name` is present with the canonical value `value`.
    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.get(name)
            .and_then(Value::canonical)
            .is_some_and(|v| v == value)
    }

    /// Maps every name through `mapping`, in place.
    ///
    /// When two entries end up with the same name, the later value overwrites
    /// the earlier one and the earlier position is kept.
    pub fn rename(&mut self, mut mapping: impl FnMut(&Value) -> Value) {
        let entries = std::mem::take(&mut self.entries);
        for entry in entries {
            let renamed = mapping(&entry.name);
            self.set(renamed, entry.value);
        }
    }

    /// Replaces the value of `name` through a lookup table keyed by canonical
    /// value text. Values without a table entry are left alone.
    pub fn revalue(&mut self, name: &str, table: &[(&str, &str)]) {
        let Some(index) = self.position(name) else {
            return;
        };
        let current = self.entries[index].value.canonical();
        if let Some((_, replacement)) = table
            .iter()
            .find(|(from, _)| current.as_deref() == Some(*from))
        {
            self.entries[index].value = Value::from(*replacement);
        }
    }

    /// Folds `sources` into a single `target` entry when they all agree.
    ///
    /// Every source must be present and have the same canonical value. The
    /// sources are then removed and `target` is inserted at the position of
    /// the first removed source. If any source is missing or differs, nothing
    /// changes. `default` stands in for the shared value when the sources agree
    /// on a value that renders absent.
    ///
    /// Returns true if the collection was compacted.
    pub fn compact_to(
        &mut self,
        target: &str,
        default: impl Into<Value>,
        sources: &[&str],
    ) -> bool {
        let Some(first) = sources.first() else {
            return false;
        };
        let Some(shared) = self.get(first).cloned() else {
            return false;
        };
        for source in &sources[1..] {
            match self.get(source) {
                Some(value) if *value == shared => {}
                _ => return false,
            }
        }

        let mut insert_at = usize::MAX;
        for source in sources {
            if let Some(index) = self.position(source) {
                insert_at = insert_at.min(index);
                self.entries.remove(index);
            }
        }

        let value = if shared.is_absent() {
            default.into()
        } else {
            shared
        };
        let entry = Entry::new(Value::from(target), value);
        match self.position(&entry.key) {
            Some(index) => self.entries[index].value = entry.value,
            None => self.entries.insert(insert_at.min(self.entries.len()), entry),
        }
        true
    }

    /// Iterates over `(name, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|e| (&e.name, &e.value))
    }

    /// Iterates over property names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|e| &e.name)
    }

    /// The name at `index`.
    pub fn name(&self, index: usize) -> Option<&Value> {
        self.entries.get(index).map(|e| &e.name)
    }

    /// The value at `index`.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.entries.get(index).map(|e| &e.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::RenderTarget;

    fn sides(template: &str) -> Vec<String> {
        ["top", "right", "bottom", "left"]
            .iter()
            .map(|side| template.replace('*', side))
            .collect()
    }

    fn keys(props: &Properties) -> Vec<String> {
        props.names().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_set_appends_new_names() {
        let mut props = Properties::new();
        props.set("a", "1");
        props.set("b", "2");
        assert_eq!(keys(&props), vec!["a", "b"]);
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_vendor_only_names_do_not_collide() {
        use crate::value::Literal;

        let webkit = Literal::text("font-smoothing")
            .omit(RenderTarget::Standard)
            .with(RenderTarget::Webkit, "-webkit-font-smoothing");
        let moz = Literal::text("osx-font-smoothing")
            .omit(RenderTarget::Standard)
            .with(RenderTarget::Mozilla, "-moz-osx-font-smoothing");

        let mut props = Properties::new();
        props.set(webkit.clone(), "antialiased");
        props.set(moz, "grayscale");
        assert_eq!(props.len(), 2);
        assert!(props.contains("-webkit-font-smoothing", "antialiased"));
        assert!(props.contains("-moz-osx-font-smoothing", "grayscale"));

        props.set(webkit, "none");
        assert_eq!(props.len(), 2);
        assert!(props.contains("-webkit-font-smoothing", "none"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut props = Properties::new();
        props.set("a", "1");
        props.set("b", "2");
        props.set("a", "3");
        assert_eq!(keys(&props), vec!["a", "b"]);
        assert!(props.contains("a", "3"));
        assert!(!props.contains("a", "1"));
    }

    #[test]
    fn test_uniqueness_is_by_canonical_name() {
        let mut props = Properties::new();
        props.set("transform", "none");
        props.set(Value::prefixed("transform", RenderTarget::Webkit), "scale(2)");
        assert_eq!(props.len(), 1);
        assert!(props.contains("transform", "scale(2)"));
    }

    #[test]
    fn test_remove() {
        let mut props = Properties::new();
        props.set("a", "1");
        assert_eq!(props.remove("a").map(|v| v.to_string()).as_deref(), Some("1"));
        assert!(props.remove("a").is_none());
        assert!(props.is_empty());
    }

    #[test]
    fn test_contains_requires_exact_name_and_value() {
        let mut props = Properties::new();
        props.set("color", "black");
        assert!(props.contains("color", "black"));
        assert!(!props.contains("color", "white"));
        assert!(!props.contains("colour", "black"));
    }

    #[test]
    fn test_rename_keeps_order() {
        let mut props = Properties::new();
        props.set("width", "1px");
        props.set("color", "red");
        props.rename(|name| Value::from(format!("-fx-{name}")));
        assert_eq!(keys(&props), vec!["-fx-width", "-fx-color"]);
    }

    #[test]
    fn test_rename_collision_keeps_earlier_position() {
        let mut props = Properties::new();
        props.set("a", "1");
        props.set("x", "2");
        props.set("b", "3");
        props.rename(|name| {
            if name.to_string() == "b" {
                Value::from("a")
            } else {
                name.clone()
            }
        });
        assert_eq!(keys(&props), vec!["a", "x"]);
        assert!(props.contains("a", "3"));
    }

    #[test]
    fn test_revalue() {
        let mut props = Properties::new();
        props.set("cursor", "pointer");
        props.revalue("cursor", &[("pointer", "hand")]);
        assert!(props.contains("cursor", "hand"));

        props.set("cursor", "text");
        props.revalue("cursor", &[("pointer", "hand")]);
        assert!(props.contains("cursor", "text"));

        props.revalue("missing", &[("pointer", "hand")]);
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_compact_when_all_equal() {
        let names = sides("padding-*");
        let sources: Vec<&str> = names.iter().map(String::as_str).collect();

        let mut props = Properties::new();
        props.set("color", "red");
        for name in &sources {
            props.set(*name, "2px");
        }
        props.set("width", "1px");

        assert!(props.compact_to("padding", "0", &sources));
        assert_eq!(keys(&props), vec!["color", "padding", "width"]);
        assert!(props.contains("padding", "2px"));
    }

    #[test]
    fn test_compact_position_of_first_removed_source() {
        let mut props = Properties::new();
        props.set("padding-left", "1px");
        props.set("color", "red");
        props.set("padding-top", "1px");
        props.set("padding-right", "1px");
        props.set("padding-bottom", "1px");

        let names = sides("padding-*");
        let sources: Vec<&str> = names.iter().map(String::as_str).collect();
        assert!(props.compact_to("padding", "0", &sources));
        assert_eq!(keys(&props), vec!["padding", "color"]);
    }

    #[test]
    fn test_compact_untouched_when_values_differ() {
        let names = sides("margin-*");
        let sources: Vec<&str> = names.iter().map(String::as_str).collect();

        let mut props = Properties::new();
        props.set("margin-top", "1px");
        props.set("margin-right", "1px");
        props.set("margin-bottom", "2px");
        props.set("margin-left", "1px");

        assert!(!props.compact_to("margin", "0", &sources));
        assert_eq!(keys(&props), sources);
    }

    #[test]
    fn test_compact_untouched_when_partially_present() {
        let mut props = Properties::new();
        props.set("margin-top", "0");
        props.set("margin-left", "0");

        let names = sides("margin-*");
        let sources: Vec<&str> = names.iter().map(String::as_str).collect();
        assert!(!props.compact_to("margin", "0", &sources));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_compact_noop_when_none_present() {
        let mut props = Properties::new();
        props.set("color", "red");
        assert!(!props.compact_to("margin", "0", &["margin-top", "margin-left"]));
        assert_eq!(keys(&props), vec!["color"]);
    }

    #[test]
    fn test_compact_uses_default_for_absent_shared_value() {
        let mut props = Properties::new();
        props.set("a-1", Value::absent());
        props.set("a-2", Value::absent());
        assert!(props.compact_to("a", "0", &["a-1", "a-2"]));
        assert!(props.contains("a", "0"));
    }

    #[test]
    fn test_index_accessors() {
        let mut props = Properties::new();
        props.set("a", "1");
        assert_eq!(props.name(0).map(|v| v.to_string()).as_deref(), Some("a"));
        assert_eq!(props.value(0).map(|v| v.to_string()).as_deref(), Some("1"));
        assert!(props.name(1).is_none());
    }
}
