//! Base tokenization for the Lexpr lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.
//!
//! This is NOT a transformation - transformations operate on token streams.
//! Unlike a lenient scanner, the first unrecognized character aborts tokenization
//! with a positioned `LexError`.

use crate::lexpr::ast::{Range, SourceLocation};
use crate::lexpr::error::{LexErrorKind, TranslateError, TranslateResult};
use crate::lexpr::token::{invalid_escape_offset, RawToken};
use logos::Logos;

/// Tokenize source code with location information
///
/// Returns raw tokens paired with their source ranges. Whitespace never appears in
/// the output.
pub fn tokenize(source: &str) -> TranslateResult<Vec<(RawToken, Range)>> {
    let locations = SourceLocation::new(source);
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, locations.byte_range_to_range(&span))),
            Err(kind) => {
                // A bad escape is reported at its backslash, not at the opening quote
                let offset = match kind {
                    LexErrorKind::InvalidEscape(_) => {
                        invalid_escape_offset(lexer.slice()).unwrap_or(0)
                    }
                    _ => 0,
                };
                return Err(TranslateError::Lex {
                    kind,
                    lexeme: lexer.slice().to_string(),
                    position: locations.byte_to_position(span.start + offset),
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexpr::ast::Position;

    #[test]
    fn test_tokenizes() {
        let tokens = tokenize("hello world").unwrap();
        assert_eq!(tokens.len(), 2);

        assert_eq!(tokens[0].0, RawToken::Word("hello".to_string()));
        assert_eq!(tokens[0].1.span, 0..5);
        assert_eq!(tokens[1].0, RawToken::Word("world".to_string()));
        assert_eq!(tokens[1].1.start, Position::new(1, 7));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("  \n\t ").unwrap(), vec![]);
    }

    #[test]
    fn test_positions_across_lines() {
        let tokens = tokenize("f:\n  x").unwrap();

        assert_eq!(tokens[0].1.start, Position::new(1, 1));
        assert_eq!(tokens[1].0, RawToken::Colon);
        assert_eq!(tokens[2].1.start, Position::new(2, 3));
    }

    #[test]
    fn test_error_carries_position_and_lexeme() {
        let err = tokenize("ok\n  \u{1}").unwrap_err();

        assert_eq!(
            err,
            TranslateError::Lex {
                kind: LexErrorKind::UnexpectedCharacter,
                lexeme: "\u{1}".to_string(),
                position: Position::new(2, 3),
            }
        );
    }

    #[test]
    fn test_first_error_wins() {
        let err = tokenize("1.2.3 \"unterminated").unwrap_err();
        assert_eq!(err.kind(), "LexError");
        assert_eq!(err.position(), Position::new(1, 1));
    }

    #[test]
    fn test_invalid_escape_points_at_backslash() {
        let err = tokenize("say \"a\\\nb\"").unwrap_err();
        assert_eq!(
            err,
            TranslateError::Lex {
                kind: LexErrorKind::InvalidEscape('\n'),
                lexeme: "\"a\\\nb\"".to_string(),
                position: Position::new(1, 7),
            }
        );
    }

    #[test]
    fn test_format_characters_are_rejected() {
        let err = tokenize("x\u{200B}y").unwrap_err();
        assert_eq!(err.kind(), "LexError");
        assert_eq!(err.position(), Position::new(1, 2));
    }

    #[test]
    fn test_non_ascii_digits_are_words() {
        let tokens = tokenize("٣ ½ x").unwrap();
        assert_eq!(tokens[0].0, RawToken::Word("٣".to_string()));
        assert_eq!(tokens[1].0, RawToken::Word("½".to_string()));
        assert_eq!(tokens[1].1.start, Position::new(1, 3));
    }
}
