//! Token Classifier
//!
//! Single left-to-right scan over the source text with ordered-alternative
//! matching at each position; the first rule that matches wins. The
//! function is total: anything no rule recognizes is consumed one character
//! at a time as `Unknown`, so the scan always makes forward progress and
//! never fails.
//!
//! Keyword lookup runs on whole identifier-shaped words only, so an
//! identifier that merely begins with a keyword (`HunterX`) is never
//! misclassified. Literals are matched before the generic operator and
//! bracket rules so a quoted `=>` or a digit run stays one span.

use crate::models::{Token, TokenCategory};
use crate::syntax::registry::KeywordRegistry;

/// Characters that form symbolic operator runs.
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '=', '<', '>', '!'];

/// Single-character brackets and punctuation.
const BRACKET_CHARS: &[char] = &['{', '}', '[', ']', '(', ')', ':', ',', ';', '.'];

/// Classify `text` into an ordered sequence of lexical spans.
///
/// Deterministic and side-effect free; safe to call on every keystroke.
/// The returned spans are contiguous, non-overlapping, and concatenate
/// back to `text` exactly (whitespace included).
pub fn classify(text: &str) -> Vec<Token> {
    let registry = KeywordRegistry::global();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let (len, category) = match_at(rest, registry);
        debug_assert!(len > 0, "classifier must always consume input");
        tokens.push(Token::new(&rest[..len], category, pos));
        pos += len;
    }

    tokens
}

/// Match one span at the start of `rest`. Returns its byte length and
/// category; always consumes at least one character.
fn match_at(rest: &str, registry: &KeywordRegistry) -> (usize, TokenCategory) {
    let first = rest.chars().next().expect("match_at called on empty input");

    if first.is_whitespace() {
        return (whitespace_len(rest), TokenCategory::Whitespace);
    }
    if rest.starts_with("//") {
        return (comment_len(rest), TokenCategory::Comment);
    }
    if first == '"' {
        return match string_len(rest) {
            Some(len) => (len, TokenCategory::StringLiteral),
            // Unterminated: the rest of the text is one Unknown span
            None => (rest.len(), TokenCategory::Unknown),
        };
    }
    if first.is_ascii_digit() {
        return (number_len(rest), TokenCategory::NumberLiteral);
    }
    if first.is_ascii_alphabetic() || first == '_' {
        let len = word_len(rest);
        let category = registry
            .category_of(&rest[..len])
            .unwrap_or(TokenCategory::Identifier);
        return (len, category);
    }
    if OPERATOR_CHARS.contains(&first) {
        return (operator_len(rest), TokenCategory::Operator);
    }
    if BRACKET_CHARS.contains(&first) {
        return (first.len_utf8(), TokenCategory::Bracket);
    }

    (first.len_utf8(), TokenCategory::Unknown)
}

/// Length of the leading whitespace run.
fn whitespace_len(rest: &str) -> usize {
    rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len())
}

/// Length of a `//` comment: everything up to (not including) the newline.
fn comment_len(rest: &str) -> usize {
    rest.find('\n').unwrap_or(rest.len())
}

/// Length of a double-quoted string, `None` if unterminated. A backslash
/// escapes any following character, including a quote.
fn string_len(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next()?;
            }
            '"' => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// Length of a decimal number: digits with an optional single fraction.
/// The dot is only consumed when a digit follows, so `10.` lexes as the
/// number `10` and a separate bracket span.
fn number_len(rest: &str) -> usize {
    let digits = |s: &str| s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());

    let mut len = digits(rest);
    let after = &rest[len..];
    if let Some(fraction) = after.strip_prefix('.') {
        let fraction_len = digits(fraction);
        if fraction_len > 0 {
            len += 1 + fraction_len;
        }
    }
    len
}

/// Length of an identifier-shaped word: letter or underscore, then
/// letters, digits, and underscores.
fn word_len(rest: &str) -> usize {
    rest.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len())
}

/// Length of a run of operator characters.
fn operator_len(rest: &str) -> usize {
    rest.find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(rest.len())
}
