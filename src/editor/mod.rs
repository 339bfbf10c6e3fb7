//! Editor buffer model
//!
//! Owns the current source text and derives the line numbering shown in
//! the editor gutter. Highlighting reads the buffer through
//! [`EditorBuffer::text`]; the buffer never calls the classifier itself.

pub mod buffer;

pub use buffer::EditorBuffer;
