//! Typed property builders.
//!
//! Builders are thin wrappers over [`PropertyDefinition`](crate::PropertyDefinition):
//! they know one property's keywords and value syntax and declare through the
//! [`RuleContext`](crate::RuleContext) they are given.

mod content;

pub use content::{content, Content, CONTENT};
