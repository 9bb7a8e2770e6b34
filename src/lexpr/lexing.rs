//! Lexer
//!
//!     This module orchestrates tokenization for Lexpr. Lexing runs in two steps, each a
//!     plain function over a token list:
//!
//!         1. Core tokenization using the logos lexer. See [base_tokenization](base_tokenization).
//!            Whitespace is skipped, every other character run becomes one raw token, and
//!            the first unrecognized character is reported as a `LexError`.
//!
//!         2. Identifier merging. See [identifier_merge](identifier_merge).
//!            Consecutive words fuse into one hyphen-joined identifier.
//!
//!     At this point, lexing is complete. The parser consumes the merged token list in order
//!     and never mutates it.
//!
//! Source Ranges
//!
//!     Logos tokens carry the byte range of their source text. Base tokenization converts
//!     these into [`Range`](crate::lexpr::ast::Range) values with 1-based line:column
//!     positions. Every later stage only copies or joins them, so error messages always
//!     point at real source text.

pub mod base_tokenization;
pub mod identifier_merge;

pub use base_tokenization::tokenize;
pub use identifier_merge::IdentifierMergeMapper;

use crate::lexpr::error::TranslateResult;
use crate::lexpr::token::Token;

/// Tokenize and merge in one call
pub fn lex(source: &str) -> TranslateResult<Vec<Token>> {
    let raw = tokenize(source)?;
    let tokens = IdentifierMergeMapper::new().map(raw);
    tracing::debug!(tokens = tokens.len(), "lexed source");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexpr::ast::Position;
    use crate::lexpr::token::TokenKind;

    #[test]
    fn test_lex_pattern() {
        let tokens = lex("x. greater than: y").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(tokens[2].text, "greater-than");
        assert_eq!(tokens[2].range.start, Position::new(1, 4));
        assert_eq!(tokens[4].range.start, Position::new(1, 18));
    }

    #[test]
    fn test_lex_propagates_errors() {
        let err = lex("f \u{0}").unwrap_err();
        assert_eq!(err.kind(), "LexError");
        assert_eq!(err.position(), Position::new(1, 3));
    }

    #[test]
    fn test_lex_string_literal_is_a_boundary() {
        let tokens = lex(r#"say "hi" loud"#).unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["say", "hi", "loud"]);
        assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
    }
}
