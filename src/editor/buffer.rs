//! Editor Buffer Model
//!
//! Holds the current source text and recomputes line numbering on every
//! change. An empty document has exactly one line. The buffer exposes its
//! text unchanged to the token classifier; no caching or incremental
//! re-lexing is done.

/// The editor's text buffer with derived line numbering.
#[derive(Debug, Clone, Default)]
pub struct EditorBuffer {
    /// Current source text
    text: String,
}

impl EditorBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial contents.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The current source text, exactly as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the editor widget. Line numbering is derived on
    /// demand, so direct mutation needs no invalidation step.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Replace the whole buffer.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a canned program, separated from existing text by a newline.
    pub fn append_program(&mut self, program: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(program);
    }

    /// Number of newline-delimited segments. An empty document counts as
    /// one line, and a trailing newline opens a new (empty) line.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// 1-based line numbers, one per line, for the gutter.
    pub fn line_numbers(&self) -> Vec<String> {
        (1..=self.line_count()).map(|n| n.to_string()).collect()
    }
}
