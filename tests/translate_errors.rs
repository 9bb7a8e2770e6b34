//! Error reporting: every failure names its kind and a 1-based position

use lexpr::lexpr::ast::Position;
use lexpr::lexpr::config::Loader;
use lexpr::lexpr::error::{LexErrorKind, Limit, Operator, ParenProblem, Side};
use lexpr::lexpr::{translate, translate_with, TranslateError};
use rstest::rstest;

#[rstest]
#[case::control_char("f \u{7}", "LexError", 1, 3)]
#[case::malformed_number("x 1.2.3", "LexError", 1, 3)]
#[case::unterminated_string("say \"hi", "LexError", 1, 5)]
#[case::bad_escape("\"a\\qb\"", "LexError", 1, 3)]
#[case::backslash_newline("f \"a\\\nb\"", "LexError", 1, 5)]
#[case::format_char("x\u{200B}y", "LexError", 1, 2)]
#[case::unclosed("f (x (y)", "UnbalancedParens", 1, 3)]
#[case::stray("f x)", "UnbalancedParens", 1, 4)]
#[case::two_symbols("1 + 2 * 3", "AmbiguousHead", 1, 7)]
#[case::two_words("f 1 g", "AmbiguousHead", 1, 5)]
#[case::dangling_dot("x.", "EmptySequence", 1, 2)]
#[case::leading_colon(": x", "EmptySequence", 1, 1)]
#[case::empty_group("f ()", "EmptySequence", 1, 3)]
#[case::error_on_second_line("f x,\ng (", "UnbalancedParens", 2, 3)]
fn error_kind_and_position(
    #[case] source: &str,
    #[case] kind: &str,
    #[case] line: usize,
    #[case] column: usize,
) {
    let err = translate(source).unwrap_err();
    assert_eq!(err.kind(), kind, "{err}");
    assert_eq!(err.position(), Position::new(line, column), "{err}");
}

#[test]
fn messages_start_with_kind_and_position() {
    let err = translate("f x)").unwrap_err();
    assert_eq!(err.to_string(), "UnbalancedParens at 1:4: `)` has no matching `(`");

    let err = translate("a, , b").unwrap_err();
    assert_eq!(err.to_string(), "EmptySequence at 1:2: nothing after `,`");
}

#[test]
fn lex_errors_carry_detail() {
    assert_eq!(
        translate("x 1.2.3").unwrap_err(),
        TranslateError::Lex {
            kind: LexErrorKind::MalformedNumber,
            lexeme: "1.2.3".to_string(),
            position: Position::new(1, 3),
        }
    );
}

#[test]
fn columns_count_characters() {
    let err = translate("größe 1 f").unwrap_err();
    assert_eq!(err.position(), Position::new(1, 9));
}

#[test]
fn missing_operand_details() {
    assert_eq!(
        translate("x. : y").unwrap_err(),
        TranslateError::EmptySequence {
            operator: Operator::Dot,
            side: Side::After,
            position: Position::new(1, 2),
        }
    );
    assert_eq!(
        translate("f (x").unwrap_err(),
        TranslateError::UnbalancedParens {
            problem: ParenProblem::Unclosed,
            position: Position::new(1, 3),
        }
    );
}

#[test]
fn input_limit() {
    let config = Loader::new()
        .set_override("limits.max_input_bytes", 8_i64)
        .unwrap()
        .build()
        .unwrap();
    assert!(translate_with("f x", &config).is_ok());
    assert_eq!(
        translate_with("f 1 2 3 4 5", &config).unwrap_err(),
        TranslateError::LimitExceeded {
            limit: Limit::InputBytes { max: 8, actual: 11 },
            position: Position::new(1, 1),
        }
    );
}

#[test]
fn depth_limit() {
    let deep = format!("{}x{}", "(".repeat(300), ")".repeat(300));
    let err = translate(&deep).unwrap_err();
    assert_eq!(err.kind(), "LimitExceeded");
    assert_eq!(err.position(), Position::new(1, 257));

    let config = Loader::new()
        .set_override("limits.max_depth", 1000_i64)
        .unwrap()
        .build()
        .unwrap();
    assert!(translate_with(&deep, &config).is_ok());
}
