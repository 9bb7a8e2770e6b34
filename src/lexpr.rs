//! Lexpr to s-expression translation
//!
//!     Source text goes through four stages:
//!
//!         1. [lexing]: logos tokenization, then consecutive words merge into one
//!            hyphen-joined identifier (`greater than` is `greater-than`).
//!         2. [parsing]: Dot, Colon and Comma are threaded over the atomic runs between
//!            them, each run resolved to one node by choosing its head.
//!         3. The result is a [`Program`](ast::Program): a node arena plus the top-level items.
//!         4. [formats]: the canonical printer renders `(head arg ...)`.
//!
//!     [`translate`] runs the whole chain with default settings; [`translate_with`] takes a
//!     loaded [`LexprConfig`](config::LexprConfig). The same chains are available as
//!     composable pipelines in [transforms].

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod transforms;

pub use error::{TranslateError, TranslateResult};

use ast::Program;
use config::LexprConfig;
use transforms::standard::{pipeline, TRANSLATION};

/// Translate `source` with the built-in defaults
pub fn translate(source: &str) -> TranslateResult<Program> {
    TRANSLATION.run(source.to_string())
}

/// Translate `source` with the limits and parsing switches of `config`
pub fn translate_with(source: &str, config: &LexprConfig) -> TranslateResult<Program> {
    pipeline(config).run(source.to_string())
}
