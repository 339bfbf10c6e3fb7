//! Unit tests for the token classifier through the public API

use bloodstudio::models::TokenCategory;
use bloodstudio::syntax::{classify, keyword_category};

/// Non-whitespace categories of the classified text.
fn visible_categories(text: &str) -> Vec<TokenCategory> {
    classify(text)
        .into_iter()
        .filter(|t| t.category != TokenCategory::Whitespace)
        .map(|t| t.category)
        .collect()
}

#[test]
fn classifies_the_canonical_declaration() {
    use TokenCategory::*;
    // Hunter x: Maria => 10;
    assert_eq!(
        visible_categories("Hunter x: Maria => 10;"),
        vec![
            DeclarationKeyword, // Hunter
            Identifier,         // x
            Bracket,            // :
            TypeKeyword,        // Maria
            Operator,           // =>
            NumberLiteral,      // 10
            Bracket,            // ;
        ]
    );
}

#[test]
fn classifies_a_whole_program() {
    let program = r#"GreatOnes factorial(n: Maria): Maria {
  Insight (n == 1) {
    Echoes 1;
  } Madness {
    Echoes (n * factorial(n - 1));
  }
}"#;
    let tokens = classify(program);

    // Spans reconstruct the program exactly
    let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(rebuilt, program);

    // And nothing fell through to Unknown
    assert!(tokens.iter().all(|t| t.category != TokenCategory::Unknown));
}

#[test]
fn keyword_prefix_of_identifier_is_identifier() {
    for text in ["HunterX", "Mariana", "Prayer", "Insightful", "trueblood"] {
        let tokens = classify(text);
        assert_eq!(tokens.len(), 1, "{text}");
        assert_eq!(tokens[0].category, TokenCategory::Identifier, "{text}");
    }
}

#[test]
fn string_literal_wins_over_everything_inside() {
    let tokens = classify("\"Nightmare => 3.14 // Insight\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].category, TokenCategory::StringLiteral);
}

#[test]
fn comment_wins_over_division() {
    let tokens = classify("a / b // a / b");
    let comment = tokens.last().unwrap();
    assert_eq!(comment.category, TokenCategory::Comment);
    assert_eq!(comment.text, "// a / b");
    assert!(tokens
        .iter()
        .any(|t| t.category == TokenCategory::Operator && t.text == "/"));
}

#[test]
fn registry_covers_the_full_vocabulary() {
    use TokenCategory::*;
    let expectations = [
        ("Nightmare", CycleKeyword),
        ("Dream", CycleKeyword),
        ("Hunter", DeclarationKeyword),
        ("Hunters", DeclarationKeyword),
        ("GreatOnes", DeclarationKeyword),
        ("Maria", TypeKeyword),
        ("Gehrman", TypeKeyword),
        ("Eileen", TypeKeyword),
        ("Blood", TypeKeyword),
        ("Rom", TypeKeyword),
        ("Insight", ConditionKeyword),
        ("Madness", ConditionKeyword),
        ("Rest", BreakKeyword),
        ("Drunkenness", BreakKeyword),
        ("Echoes", BreakKeyword),
        ("Djura", VectorKeyword),
        ("Pray", IoKeyword),
        ("Eyes", IoKeyword),
        ("Bloodbond", LogicalOperatorKeyword),
        ("OldBlood", LogicalOperatorKeyword),
        ("Vileblood", LogicalOperatorKeyword),
        ("true", BooleanLiteral),
        ("false", BooleanLiteral),
        ("Light", BooleanLiteral),
        ("Darkness", BooleanLiteral),
    ];

    for (lexeme, expected) in expectations {
        assert_eq!(keyword_category(lexeme), Some(expected), "{lexeme}");
        let tokens = classify(lexeme);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, expected, "{lexeme}");
    }
}

#[test]
fn unknown_never_stalls_the_scan() {
    let text = "ñ€¿?#@~`'&|^%$";
    let tokens = classify(text);
    let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(rebuilt, text);
    assert!(tokens
        .iter()
        .all(|t| t.category == TokenCategory::Unknown));
}
