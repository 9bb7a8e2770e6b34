//! Pre-built pipelines
//!
//! The statics use the built-in defaults (1 MiB input, nesting depth 256, mixfix heads
//! off). Use [`pipeline`] to build one from a loaded [`LexprConfig`].

use crate::lexpr::ast::Program;
use crate::lexpr::config::LexprConfig;
use crate::lexpr::token::Token;
use crate::lexpr::transforms::stages::{CoreTokenization, IdentifierMerge, InputLimit, Parsing};
use crate::lexpr::transforms::Transform;
use once_cell::sync::Lazy;

/// Default input size limit, in bytes
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

pub type LexingTransform = Transform<String, Vec<Token>>;

pub type TranslationTransform = Transform<String, Program>;

/// Source text to merged tokens
pub static LEXING: Lazy<LexingTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(InputLimit::new(DEFAULT_MAX_INPUT_BYTES))
        .then(CoreTokenization::new())
        .then(IdentifierMerge::new())
});

/// Source text to program, with default settings
pub static TRANSLATION: Lazy<TranslationTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(Lazy::force(&LEXING))
        .then(Parsing::default())
});

/// Build a translation pipeline for `config`
pub fn pipeline(config: &LexprConfig) -> TranslationTransform {
    Transform::from_fn(Ok)
        .then(InputLimit::new(config.limits.max_input_bytes))
        .then(CoreTokenization::new())
        .then(IdentifierMerge::new())
        .then(Parsing::new(config.parse_options()))
}

/// Build a lexing pipeline for `config`
pub fn lexing_pipeline(config: &LexprConfig) -> LexingTransform {
    Transform::from_fn(Ok)
        .then(InputLimit::new(config.limits.max_input_bytes))
        .then(CoreTokenization::new())
        .then(IdentifierMerge::new())
}
