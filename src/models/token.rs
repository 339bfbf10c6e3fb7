//! Lexical Span Model
//!
//! Represents a classified span of BloodCode source text. Tokens are
//! produced by the classifier in [`crate::syntax`] and consumed by the
//! editor's highlighting layer.

use serde::{Deserialize, Serialize};

/// Semantic category of a lexical span.
///
/// The set is closed; every character of the input falls into exactly one
/// category. Variants are listed in the classifier's matching priority
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    /// `//` line comment
    Comment,
    /// Double-quoted string with backslash escapes
    StringLiteral,
    /// Decimal number, optionally with a fraction (`10`, `3.14`)
    NumberLiteral,
    /// Loop keywords (`Nightmare`, `Dream`)
    CycleKeyword,
    /// Declaration keywords (`Hunter`, `GreatOnes`, ...)
    DeclarationKeyword,
    /// Type keywords (`Maria`, `Eileen`, ...)
    TypeKeyword,
    /// Conditional keywords (`Insight`, `Madness`)
    ConditionKeyword,
    /// Control-exit keywords (`Rest`, `Drunkenness`, `Echoes`)
    BreakKeyword,
    /// Vector keywords (`Djura`)
    VectorKeyword,
    /// I/O keywords (`Pray`, `Eyes`)
    IoKeyword,
    /// Word-form logical operators (`Bloodbond`, `OldBlood`, `Vileblood`)
    LogicalOperatorKeyword,
    /// Boolean literals (`true`, `false`, `Light`, `Darkness`)
    BooleanLiteral,
    /// Run of symbolic operator characters (`=>`, `==`, `+`, ...)
    Operator,
    /// Single bracket or punctuation character
    Bracket,
    /// Anything word-shaped that is not in the keyword registry
    Identifier,
    /// Whitespace run. Emitted so spans reconstruct the input exactly, but
    /// skipped by highlighting.
    Whitespace,
    /// Single character no other rule matched
    Unknown,
}

impl TokenCategory {
    /// Whether spans of this category receive highlighting.
    pub fn is_highlighted(&self) -> bool {
        !matches!(self, TokenCategory::Whitespace | TokenCategory::Unknown)
    }

    /// Whether this category is a whole-word registry category (as opposed
    /// to a literal, operator, or structural category).
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenCategory::CycleKeyword
                | TokenCategory::DeclarationKeyword
                | TokenCategory::TypeKeyword
                | TokenCategory::ConditionKeyword
                | TokenCategory::BreakKeyword
                | TokenCategory::VectorKeyword
                | TokenCategory::IoKeyword
                | TokenCategory::LogicalOperatorKeyword
                | TokenCategory::BooleanLiteral
        )
    }
}

/// A classified span of source text.
///
/// Offsets are byte positions into the classified input; `end` is
/// exclusive. Spans produced by one classifier call are contiguous and
/// non-overlapping, and concatenating their `text` fields reconstructs the
/// input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The span's text, exactly as it appears in the source
    pub text: String,

    /// Semantic category
    pub category: TokenCategory,

    /// Byte offset of the first character
    pub start: usize,

    /// Byte offset one past the last character
    pub end: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, category: TokenCategory, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            text,
            category,
            start,
            end,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty. Classifier output never contains empty
    /// spans; this exists for completeness.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
