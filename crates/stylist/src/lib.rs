//! Declarative style rules compiled to CSS text.
//!
//! Styles are described in code as callbacks that declare properties and
//! nested rules. Building a [`Style`] yields a [`StyleRule`] tree, and a
//! [`Formatter`] writes that tree as CSS, one line per vendor target a
//! property needs, with optional post-processing for other stylesheet
//! dialects.
//!
//! # Example
//!
//! ```rust
//! use stylist::{Formatter, RenderTarget, Style, Value};
//!
//! let card = Style::named("card", |s| {
//!     s.declare("width", Value::prefixed("calc(100% - 2em)", RenderTarget::Webkit));
//!     s.sub_rule("$:hover", &Style::new(|s| {
//!         s.declare("opacity", 0.8);
//!     }));
//! });
//!
//! assert_eq!(
//!     Formatter::compact().format(&[card]),
//!     ".card{width:calc(100% - 2em);width:-webkit-calc(100% - 2em);}.card:hover{opacity:0.8;}"
//! );
//! ```
//!
//! # Modules
//!
//! - [`target`]: rendering targets and target sets
//! - [`value`]: target-aware values and colors
//! - [`properties`]: the ordered property collection of a rule
//! - [`rule`] and [`style`]: rule trees and how they are built
//! - [`format`]: decoration profiles, presets and output sinks
//! - [`dialect`]: post-processors for non-browser consumers (JavaFX)
//! - [`keyframes`], [`stylesheet`], [`property`]: animations, batch
//!   registration, typed property builders
//!
//! # Logging
//!
//! Builds and formatting emit `tracing` events at `debug` and `trace`
//! level. The crate never installs a subscriber.

pub mod dialect;
pub mod error;
pub mod format;
pub mod identity;
pub mod keyframes;
pub mod properties;
pub mod property;
pub mod rule;
pub mod style;
pub mod stylesheet;
pub mod target;
pub mod value;

pub use dialect::JavaFxLizer;
pub use error::OutputError;
pub use format::{ColorHook, ColorSyntax, Decorations, Formatter, PostProcessor};
pub use identity::{IdentityRegistry, Location};
pub use keyframes::Keyframes;
pub use properties::Properties;
pub use rule::{compose_selector, StyleRule, PSEUDO_ELEMENT_MARKER, SELECTOR_PLACEHOLDER};
pub use style::{PropertyDefinition, RuleContext, Style, StyleFamily};
pub use stylesheet::{StyleProvider, Stylesheet};
pub use target::{RenderTarget, TargetSet};
pub use value::{Atom, Color, Composite, Literal, Value};
