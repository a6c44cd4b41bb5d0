//! `@keyframes` blocks.

use std::fmt;

use crate::identity::Location;
use crate::rule::StyleRule;
use crate::style::Style;
use crate::value::Value;

/// A named animation: frames at given progress points, each holding the
/// properties of one style.
///
/// The name is allocated from the identity registry and can be used directly
/// as an `animation-name` value.
///
/// # Example
///
/// ```rust
/// use stylist::{Keyframes, Style};
///
/// let fade = Keyframes::named("fade")
///     .frame(0, &Style::new(|s| { s.declare("opacity", 0); }))
///     .frames(&[50, 100], &Style::new(|s| { s.declare("opacity", 1); }));
///
/// assert_eq!(
///     fade.to_string(),
///     "@keyframes fade{0%{opacity:0;}50%,100%{opacity:1;}}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Keyframes {
    name: String,
    frames: Vec<Frame>,
}

#[derive(Debug, Clone)]
struct Frame {
    progress: Vec<u32>,
    rule: StyleRule,
}

impl Keyframes {
    /// Creates an empty animation named `Anima` plus a fresh identity name.
    pub fn new() -> Self {
        Self::named(format!("Anima{}", Location::new().name()))
    }

    /// Creates an empty animation with a fixed name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    /// The animation name, usable as `animation-name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a frame at `progress` percent.
    pub fn frame(self, progress: u32, style: &Style) -> Self {
        self.frames(&[progress], style)
    }

    /// Adds one frame shared by several progress points. An empty `progress`
    /// list adds nothing.
    pub fn frames(mut self, progress: &[u32], style: &Style) -> Self {
        if progress.is_empty() {
            return self;
        }
        self.frames.push(Frame {
            progress: progress.to_vec(),
            rule: style.build(),
        });
        self
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no frame was added.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Default for Keyframes {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Keyframes> for Value {
    fn from(keyframes: &Keyframes) -> Self {
        Value::text(keyframes.name.clone())
    }
}

impl fmt::Display for Keyframes {
    /// Canonical compact form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@keyframes {}{{", self.name)?;
        for frame in &self.frames {
            for (i, progress) in frame.progress.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{progress}%")?;
            }
            f.write_str("{")?;
            for (name, value) in frame.rule.properties.iter() {
                if let (Some(name), Some(value)) = (name.canonical(), value.canonical()) {
                    write!(f, "{name}:{value};")?;
                }
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}
