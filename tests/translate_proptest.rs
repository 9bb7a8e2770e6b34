//! Property-based tests for lexing and translation

use lexpr::lexpr::formats::print_program;
use lexpr::lexpr::lexing::{tokenize, IdentifierMergeMapper};
use lexpr::lexpr::testing::render;
use lexpr::lexpr::token::{RawToken, TokenKind};
use lexpr::lexpr::translate;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}"
}

/// Fragments of Lexpr with no commas, so a whole input is a single expression
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => word(),
        2 => "[0-9]{1,3}",
        1 => prop_oneof![Just("+"), Just("-"), Just("*"), Just("<="), Just("!")].prop_map(String::from),
        1 => Just(".".to_string()),
        1 => Just(":".to_string()),
        1 => Just("(".to_string()),
        1 => Just(")".to_string()),
    ]
}

fn expression() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 1..12).prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn merging_is_idempotent(words in prop::collection::vec(word(), 1..8)) {
        let source = words.join(" ");
        let mapper = IdentifierMergeMapper::new();
        let merged = mapper.map(tokenize(&source).unwrap());

        prop_assert_eq!(merged.len(), 1);
        prop_assert_eq!(merged[0].kind, TokenKind::Identifier);
        prop_assert_eq!(&merged[0].text, &words.join("-"));
        prop_assert_eq!(merged[0].word_count(), words.len());

        // Feeding the merged identifier back through the mapper changes nothing
        let again = mapper.map(
            merged
                .iter()
                .map(|t| (RawToken::Word(t.text.clone()), t.range.clone()))
                .collect(),
        );
        prop_assert_eq!(again, merged);
    }

    #[test]
    fn single_tokens_print_bare(text in prop_oneof![
        "[a-z][a-z0-9]{0,8}",
        "[0-9]{1,4}(\\.[0-9]{1,3})?",
        "[+*/<>=!?&|-]{1,3}",
    ]) {
        prop_assert_eq!(render(&text).unwrap(), text);
    }

    #[test]
    fn parentheses_isolate_an_expression(source in expression()) {
        if let Ok(program) = translate(&source) {
            prop_assume!(!program.is_empty());
            let wrapped = translate(&format!("({source})")).unwrap();
            prop_assert_eq!(print_program(&wrapped), print_program(&program));
        }
    }

    #[test]
    fn wrapped_call_stays_one_argument(head in "[a-z]{1,4}", args in prop::collection::vec("[0-9]{1,3}", 1..5)) {
        let inner = format!("{} {}", head, args.join(" "));
        let expected_inner = render(&inner).unwrap();
        prop_assert_eq!(
            render(&format!("g: ({inner})")).unwrap(),
            format!("(g {expected_inner})")
        );
    }

    #[test]
    fn translation_never_panics(source in "\\PC{0,40}") {
        let _ = translate(&source);
    }

    #[test]
    fn token_soup_never_panics(source in expression()) {
        match translate(&source) {
            Ok(program) => { let _ = print_program(&program); }
            Err(err) => {
                prop_assert!(err.position().line >= 1);
                prop_assert!(err.position().column >= 1);
                prop_assert!(err.to_string().starts_with(err.kind()));
            }
        }
    }
}
