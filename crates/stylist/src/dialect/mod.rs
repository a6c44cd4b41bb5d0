//! Output dialects.
//!
//! A dialect is a post-processor that reshapes a rule's properties for a
//! particular consumer. Install one with [`Formatter::post_processor`]
//! (see [`javafx::pretty`] for a ready-made formatter).
//!
//! [`Formatter::post_processor`]: crate::Formatter::post_processor

pub mod javafx;

pub use javafx::JavaFxLizer;
