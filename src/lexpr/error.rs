//! Error types for translation
//!
//! Translation is all-or-nothing: the first problem found aborts the run and is returned
//! as a [`TranslateError`]. Every variant carries the 1-based position of the offending
//! token so callers can point at it.

use crate::lexpr::ast::Position;
use std::fmt;

/// Why the lexer rejected a piece of input
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[default]
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("malformed number literal")]
    MalformedNumber,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape sequence `\\{}`", .0.escape_default())]
    InvalidEscape(char),
}

/// Which half of a parenthesis pair is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenProblem {
    /// A `(` that is never closed
    Unclosed,
    /// A `)` with no matching `(`
    Stray,
}

impl fmt::Display for ParenProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParenProblem::Unclosed => write!(f, "`(` is never closed"),
            ParenProblem::Stray => write!(f, "`)` has no matching `(`"),
        }
    }
}

/// Operators (and the group brackets) whose operands may be missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Dot,
    Colon,
    Comma,
    Group,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operator::Dot => ".",
            Operator::Colon => ":",
            Operator::Comma => ",",
            Operator::Group => "()",
        };
        write!(f, "{}", text)
    }
}

/// Where the missing operand was expected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
    Inside,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Before => write!(f, "before"),
            Side::After => write!(f, "after"),
            Side::Inside => write!(f, "inside"),
        }
    }
}

/// A configured resource limit that the input went over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    InputBytes { max: usize, actual: usize },
    Depth { max: usize },
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::InputBytes { max, actual } => {
                write!(f, "input is {} bytes, the limit is {}", actual, max)
            }
            Limit::Depth { max } => write!(f, "parentheses nest deeper than {}", max),
        }
    }
}

/// Errors that abort a translation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("LexError at {position}: {kind} `{lexeme}`")]
    Lex {
        kind: LexErrorKind,
        lexeme: String,
        position: Position,
    },

    #[error("UnbalancedParens at {position}: {problem}")]
    UnbalancedParens {
        problem: ParenProblem,
        position: Position,
    },

    #[error("AmbiguousHead at {position}: `{first}` and `{second}` both compete for the head")]
    AmbiguousHead {
        first: String,
        second: String,
        position: Position,
    },

    #[error("EmptySequence at {position}: nothing {side} `{operator}`")]
    EmptySequence {
        operator: Operator,
        side: Side,
        position: Position,
    },

    #[error("LimitExceeded at {position}: {limit}")]
    LimitExceeded { limit: Limit, position: Position },
}

impl TranslateError {
    /// Name of the error kind, as it appears at the start of the message
    pub fn kind(&self) -> &'static str {
        match self {
            TranslateError::Lex { .. } => "LexError",
            TranslateError::UnbalancedParens { .. } => "UnbalancedParens",
            TranslateError::AmbiguousHead { .. } => "AmbiguousHead",
            TranslateError::EmptySequence { .. } => "EmptySequence",
            TranslateError::LimitExceeded { .. } => "LimitExceeded",
        }
    }

    pub fn position(&self) -> Position {
        match self {
            TranslateError::Lex { position, .. }
            | TranslateError::UnbalancedParens { position, .. }
            | TranslateError::AmbiguousHead { position, .. }
            | TranslateError::EmptySequence { position, .. }
            | TranslateError::LimitExceeded { position, .. } => *position,
        }
    }
}

pub type TranslateResult<T> = Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_kind_and_position() {
        let err = TranslateError::EmptySequence {
            operator: Operator::Dot,
            side: Side::After,
            position: Position::new(2, 7),
        };
        assert_eq!(err.to_string(), "EmptySequence at 2:7: nothing after `.`");
        assert_eq!(err.kind(), "EmptySequence");
        assert_eq!(err.position(), Position::new(2, 7));
    }

    #[test]
    fn test_lex_error_message() {
        let err = TranslateError::Lex {
            kind: LexErrorKind::MalformedNumber,
            lexeme: "1.2.3".to_string(),
            position: Position::new(1, 1),
        };
        assert_eq!(err.to_string(), "LexError at 1:1: malformed number literal `1.2.3`");
    }

    #[test]
    fn test_invalid_escape_message() {
        assert_eq!(
            LexErrorKind::InvalidEscape('q').to_string(),
            "invalid escape sequence `\\q`"
        );
    }

    #[test]
    fn test_limit_message() {
        let err = TranslateError::LimitExceeded {
            limit: Limit::Depth { max: 4 },
            position: Position::new(1, 5),
        };
        assert_eq!(
            err.to_string(),
            "LimitExceeded at 1:5: parentheses nest deeper than 4"
        );
    }

    #[test]
    fn test_unbalanced_message() {
        let err = TranslateError::UnbalancedParens {
            problem: ParenProblem::Stray,
            position: Position::new(1, 3),
        };
        assert_eq!(
            err.to_string(),
            "UnbalancedParens at 1:3: `)` has no matching `(`"
        );
    }
}
