//! Property-based tests for the token classifier

use proptest::prelude::*;

use bloodstudio::models::TokenCategory;
use bloodstudio::syntax::{classify, keyword_category};

proptest! {
    /// Concatenating the spans reconstructs any input exactly.
    #[test]
    fn round_trip_reconstruction(text in ".*") {
        let rebuilt: String = classify(&text).iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, text);
    }

    /// Classification is deterministic and stateless.
    #[test]
    fn idempotence(text in ".*") {
        prop_assert_eq!(classify(&text), classify(&text));
    }

    /// Spans are contiguous, non-overlapping, and never empty.
    #[test]
    fn spans_are_contiguous(text in ".*") {
        let tokens = classify(&text);
        let mut cursor = 0;
        for token in &tokens {
            prop_assert_eq!(token.start, cursor);
            prop_assert!(token.end > token.start);
            cursor = token.end;
        }
        prop_assert_eq!(cursor, text.len());
    }

    /// A registry word with an identifier tail is one Identifier span.
    #[test]
    fn keyword_with_tail_is_identifier(tail in "[A-Za-z0-9_]{1,8}") {
        for keyword in ["Hunter", "Dream", "Pray", "Maria", "Rest"] {
            let word = format!("{keyword}{tail}");
            // A tail can land on another registry word ("Hunter" + "s")
            prop_assume!(keyword_category(&word).is_none());
            let tokens = classify(&word);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].category, TokenCategory::Identifier);
        }
    }

    /// Programs built from BloodCode-looking fragments never produce
    /// Unknown spans.
    #[test]
    fn wellformed_fragments_have_no_unknowns(
        name in "[a-z_][a-z0-9_]{0,10}",
        number in 0u32..100_000,
    ) {
        let program = format!(
            "Hunter {name}: Maria => {number};\nInsight ({name} > 10) {{ Pray({name}); }}"
        );
        let tokens = classify(&program);
        prop_assert!(tokens.iter().all(|t| t.category != TokenCategory::Unknown));
    }
}
