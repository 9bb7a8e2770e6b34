//! Identifier merge mapper
//!
//!     Lexpr lets multi-word names be written as plain words: `greater than` is the single
//!     name `greater-than`. The logos lexer emits one Word token per word, so this mapper
//!     fuses every run of consecutive words into one Identifier token whose text is the
//!     words joined with `-`.
//!
//!     Whitespace was already dropped by the lexer, so two Word tokens that are adjacent in
//!     the raw stream were separated by whitespace only. Anything else between them (a
//!     delimiter, a number, a string or a symbolic identifier) is a merge boundary, and
//!     those tokens are never merged themselves.
//!
//! Algorithm
//!
//!     One linear pass with an accumulator:
//!         1. A Word token starts or extends the pending identifier.
//!         2. Any other token flushes the pending identifier, then passes through.
//!         3. End of input flushes the pending identifier.
//!
//!     The merged token's range spans from the first word's start to the last word's end.
//!     Joining is associative, so the result does not depend on how the words were chunked.

use crate::lexpr::ast::Range;
use crate::lexpr::token::{RawToken, Token, TokenKind};

/// Pending identifier being accumulated
struct PendingIdentifier {
    text: String,
    range: Range,
}

/// A mapper that fuses runs of words into hyphen-joined identifiers
#[derive(Debug, Clone)]
pub struct IdentifierMergeMapper {
    separator: char,
}

impl IdentifierMergeMapper {
    pub fn new() -> Self {
        IdentifierMergeMapper { separator: '-' }
    }

    pub fn map(&self, tokens: Vec<(RawToken, Range)>) -> Vec<Token> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut pending: Option<PendingIdentifier> = None;

        for (raw, range) in tokens {
            match raw {
                RawToken::Word(word) => match pending.as_mut() {
                    Some(acc) => {
                        acc.text.push(self.separator);
                        acc.text.push_str(&word);
                        acc.range = acc.range.join(&range);
                    }
                    None => {
                        pending = Some(PendingIdentifier { text: word, range });
                    }
                },
                other => {
                    if let Some(acc) = pending.take() {
                        out.push(Token::new(TokenKind::Identifier, acc.text, acc.range));
                    }
                    let (kind, text) = other.into_parts();
                    out.push(Token::new(kind, text, range));
                }
            }
        }

        if let Some(acc) = pending {
            out.push(Token::new(TokenKind::Identifier, acc.text, acc.range));
        }

        out
    }
}

impl Default for IdentifierMergeMapper {
    fn default() -> Self {
        Self::new()
    }
}
