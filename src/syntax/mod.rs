//! Lexical classification for BloodCode
//!
//! Drives the editor's real-time syntax highlighting. The classifier is a
//! pure function over the buffer text: no state, no failure path, safe to
//! call on every keystroke. The keyword registry partitions BloodCode's
//! reserved vocabulary into the semantic categories the highlighter colors
//! differently.

pub mod classifier;
pub mod registry;

pub use classifier::classify;
pub use registry::{keyword_category, KeywordRegistry};
