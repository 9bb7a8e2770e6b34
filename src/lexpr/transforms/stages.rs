//! Pipeline stages
//!
//!     InputLimit         String -> String                 rejects oversized input
//!     CoreTokenization   String -> Vec<(RawToken, Range)>  logos scan
//!     IdentifierMerge    Vec<(RawToken, Range)> -> Vec<Token>
//!     Parsing            Vec<Token> -> Program

use crate::lexpr::ast::{Position, Program, Range};
use crate::lexpr::error::{Limit, TranslateError, TranslateResult};
use crate::lexpr::lexing::{base_tokenization, IdentifierMergeMapper};
use crate::lexpr::parsing::{self, ParseOptions};
use crate::lexpr::token::{RawToken, Token};
use crate::lexpr::transforms::Runnable;

/// Fails with `LimitExceeded` when the source is longer than `max_bytes`
#[derive(Debug, Clone, Copy)]
pub struct InputLimit {
    max_bytes: usize,
}

impl InputLimit {
    pub fn new(max_bytes: usize) -> Self {
        InputLimit { max_bytes }
    }
}

impl Runnable<String, String> for InputLimit {
    fn run(&self, input: String) -> TranslateResult<String> {
        if input.len() > self.max_bytes {
            return Err(TranslateError::LimitExceeded {
                limit: Limit::InputBytes {
                    max: self.max_bytes,
                    actual: input.len(),
                },
                position: Position::default(),
            });
        }
        Ok(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CoreTokenization;

impl CoreTokenization {
    pub fn new() -> Self {
        CoreTokenization
    }
}

impl Runnable<String, Vec<(RawToken, Range)>> for CoreTokenization {
    fn run(&self, input: String) -> TranslateResult<Vec<(RawToken, Range)>> {
        base_tokenization::tokenize(&input)
    }
}

impl Runnable<&str, Vec<(RawToken, Range)>> for CoreTokenization {
    fn run(&self, input: &str) -> TranslateResult<Vec<(RawToken, Range)>> {
        base_tokenization::tokenize(input)
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierMerge {
    mapper: IdentifierMergeMapper,
}

impl IdentifierMerge {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Runnable<Vec<(RawToken, Range)>, Vec<Token>> for IdentifierMerge {
    fn run(&self, input: Vec<(RawToken, Range)>) -> TranslateResult<Vec<Token>> {
        let tokens = self.mapper.map(input);
        let compound = tokens.iter().filter(|token| token.word_count() > 1).count();
        tracing::debug!(tokens = tokens.len(), compound, "merged identifiers");
        Ok(tokens)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Parsing {
    options: ParseOptions,
}

impl Parsing {
    pub fn new(options: ParseOptions) -> Self {
        Parsing { options }
    }
}

impl Runnable<Vec<Token>, Program> for Parsing {
    fn run(&self, input: Vec<Token>) -> TranslateResult<Program> {
        parsing::parse(input, &self.options)
    }
}
