//! Token definitions for Lexpr
//!
//! There are two token layers:
//!
//!     Raw Tokens:
//!         Produced by the logos lexer, one per maximal character run. Whitespace is skipped
//!         here and never reaches the token stream. See [`RawToken`].
//!
//!     Tokens:
//!         The stream the parser consumes. It is the raw stream with identifier merging
//!         already applied: consecutive alphanumeric words become one hyphen-joined
//!         [`TokenKind::Identifier`]. See [identifier_merge](crate::lexpr::lexing::identifier_merge).
//!
//! Character classes:
//!
//!     - `. : , ( )` are single-character delimiters and never merge with anything.
//!     - Words start with a letter, `_` or a non-ASCII digit (`٣`, `½`) and continue with
//!       letters, digits or `_`. An ASCII digit always starts a number.
//!     - Numbers are ASCII digits with at most one attached decimal part (`12`, `1.5`).
//!       A `.` not followed by a digit is the Dot operator, so `2.` is `2` then Dot.
//!     - Strings are double-quoted with `\n`, `\t`, `\\` and `\"` escapes.
//!     - Any other run of visible non-whitespace characters is a symbolic identifier
//!       (`+`, `<=`, `!`). Control and format characters (`U+200B`) are lexing errors.

use crate::lexpr::ast::Range;
use crate::lexpr::error::LexErrorKind;
use logos::{Lexer, Logos};
use serde::Serialize;
use std::fmt;

/// Tokens as logos produces them
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"\s+")]
#[logos(error = LexErrorKind)]
pub enum RawToken {
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[regex(r"[\p{L}\p{N}_--0-9][\p{L}\p{N}_]*", |lex| lex.slice().to_owned())]
    Word(String),

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_owned())]
    #[regex(r"[0-9]+\.[0-9]+(\.[0-9]+)+", malformed_number)]
    Number(String),

    #[regex(r#""([^"\\]|\\(.|\n))*""#, string_literal)]
    #[regex(r#""([^"\\]|\\(.|\n))*"#, unterminated_string)]
    Str(String),

    #[regex(r#"[^\s\p{L}\p{N}_.:,()"\p{Cc}\p{Cf}]+"#, |lex| lex.slice().to_owned())]
    Symbol(String),
}

fn malformed_number(_lex: &mut Lexer<RawToken>) -> Result<String, LexErrorKind> {
    Err(LexErrorKind::MalformedNumber)
}

fn unterminated_string(_lex: &mut Lexer<RawToken>) -> Result<String, LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

fn string_literal(lex: &mut Lexer<RawToken>) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    unescape(&slice[1..slice.len() - 1])
}

/// Resolve the escapes of a string literal body (quotes already stripped)
pub fn unescape(body: &str) -> Result<String, LexErrorKind> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => return Err(LexErrorKind::InvalidEscape(other)),
            None => return Err(LexErrorKind::UnterminatedString),
        }
    }
    Ok(out)
}

/// Byte offset of the first invalid escape inside a string literal (quotes included)
pub fn invalid_escape_offset(literal: &str) -> Option<usize> {
    let mut chars = literal.char_indices();
    while let Some((offset, ch)) = chars.next() {
        if ch != '\\' {
            continue;
        }
        match chars.next() {
            Some((_, 'n' | 't' | '\\' | '"')) => {}
            _ => return Some(offset),
        }
    }
    None
}

/// Inverse of [`unescape`], used by printers
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}

/// Kinds of tokens the parser sees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    Number,
    SymbolicIdentifier,
    StringLiteral,
    Dot,
    Colon,
    Comma,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::SymbolicIdentifier => "symbol",
            TokenKind::StringLiteral => "string",
            TokenKind::Dot => "dot",
            TokenKind::Colon => "colon",
            TokenKind::Comma => "comma",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
        };
        write!(f, "{}", name)
    }
}

impl RawToken {
    /// Split a raw token into its parser-facing kind and literal text
    pub fn into_parts(self) -> (TokenKind, String) {
        match self {
            RawToken::Dot => (TokenKind::Dot, ".".to_string()),
            RawToken::Colon => (TokenKind::Colon, ":".to_string()),
            RawToken::Comma => (TokenKind::Comma, ",".to_string()),
            RawToken::LParen => (TokenKind::LParen, "(".to_string()),
            RawToken::RParen => (TokenKind::RParen, ")".to_string()),
            RawToken::Word(text) => (TokenKind::Identifier, text),
            RawToken::Number(text) => (TokenKind::Number, text),
            RawToken::Str(text) => (TokenKind::StringLiteral, text),
            RawToken::Symbol(text) => (TokenKind::SymbolicIdentifier, text),
        }
    }
}

/// A token of the merged stream
///
/// For string literals `text` holds the unescaped contents; for merged identifiers it
/// holds the hyphen-joined words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub range: Range,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, range: Range) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
        }
    }

    /// Number of words fused into this identifier (1 for anything unmerged)
    pub fn word_count(&self) -> usize {
        match self.kind {
            TokenKind::Identifier => self.text.split('-').count(),
            _ => 1,
        }
    }
}
