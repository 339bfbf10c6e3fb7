//! Keyword/Symbol Registry
//!
//! Static tables partitioning BloodCode's reserved vocabulary into semantic
//! categories, plus a process-wide lexeme-keyed map for O(1) category
//! resolution. The map is built once on first use and never mutated.
//!
//! Lookups are exact-case and whole-word; the classifier only consults the
//! registry with complete identifier-shaped words, so a keyword embedded in
//! a longer name (`HunterX`) never matches.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::TokenCategory;

/// Loop keywords: `Nightmare` is the counted loop, `Dream` the conditional
/// one.
pub const CYCLE_KEYWORDS: &[&str] = &["Nightmare", "Dream"];

/// Declaration keywords for variables and functions.
pub const DECLARATION_KEYWORDS: &[&str] = &["Hunter", "Hunters", "GreatOnes"];

/// Type keywords: integer, float, string, boolean, void.
pub const TYPE_KEYWORDS: &[&str] = &["Maria", "Gehrman", "Eileen", "Blood", "Rom"];

/// Conditional keywords: if / else.
pub const CONDITION_KEYWORDS: &[&str] = &["Insight", "Madness"];

/// Control-exit keywords: break, continue, return.
pub const BREAK_KEYWORDS: &[&str] = &["Rest", "Drunkenness", "Echoes"];

/// Vector keywords.
pub const VECTOR_KEYWORDS: &[&str] = &["Djura"];

/// I/O keywords: print and read-input.
pub const IO_KEYWORDS: &[&str] = &["Pray", "Eyes"];

/// Word-form logical operators: and, or, not.
pub const LOGICAL_OPERATOR_KEYWORDS: &[&str] = &["Bloodbond", "OldBlood", "Vileblood"];

/// Boolean literals. The themed pair and the plain pair are both accepted.
pub const BOOLEAN_LITERALS: &[&str] = &["true", "false", "Light", "Darkness"];

/// Category tables in classifier priority order. The tables are disjoint,
/// so insertion order only documents the priority contract; it never
/// resolves a conflict.
const CATEGORY_TABLES: &[(&[&str], TokenCategory)] = &[
    (CYCLE_KEYWORDS, TokenCategory::CycleKeyword),
    (DECLARATION_KEYWORDS, TokenCategory::DeclarationKeyword),
    (TYPE_KEYWORDS, TokenCategory::TypeKeyword),
    (CONDITION_KEYWORDS, TokenCategory::ConditionKeyword),
    (BREAK_KEYWORDS, TokenCategory::BreakKeyword),
    (VECTOR_KEYWORDS, TokenCategory::VectorKeyword),
    (IO_KEYWORDS, TokenCategory::IoKeyword),
    (LOGICAL_OPERATOR_KEYWORDS, TokenCategory::LogicalOperatorKeyword),
    (BOOLEAN_LITERALS, TokenCategory::BooleanLiteral),
];

/// Immutable lexeme → category map, built once at first use.
pub struct KeywordRegistry {
    by_lexeme: HashMap<&'static str, TokenCategory>,
}

impl KeywordRegistry {
    fn build() -> Self {
        let mut by_lexeme = HashMap::new();
        for (table, category) in CATEGORY_TABLES {
            for lexeme in *table {
                let previous = by_lexeme.insert(*lexeme, *category);
                debug_assert!(previous.is_none(), "duplicate registry lexeme {lexeme}");
            }
        }
        Self { by_lexeme }
    }

    /// The process-wide registry instance.
    pub fn global() -> &'static Self {
        static REGISTRY: Lazy<KeywordRegistry> = Lazy::new(KeywordRegistry::build);
        &REGISTRY
    }

    /// Look up a whole word; `None` means it is an ordinary identifier.
    pub fn category_of(&self, word: &str) -> Option<TokenCategory> {
        self.by_lexeme.get(word).copied()
    }

    /// Number of reserved lexemes.
    pub fn len(&self) -> usize {
        self.by_lexeme.len()
    }

    /// Whether the registry is empty (never true in practice).
    pub fn is_empty(&self) -> bool {
        self.by_lexeme.is_empty()
    }

    /// All reserved lexemes of one category, in table order. Used by the
    /// editor's completion popup.
    pub fn lexemes_of(&self, category: TokenCategory) -> Vec<&'static str> {
        CATEGORY_TABLES
            .iter()
            .filter(|(_, c)| *c == category)
            .flat_map(|(table, _)| table.iter().copied())
            .collect()
    }
}

/// Convenience wrapper over the global registry.
pub fn keyword_category(word: &str) -> Option<TokenCategory> {
    KeywordRegistry::global().category_of(word)
}
