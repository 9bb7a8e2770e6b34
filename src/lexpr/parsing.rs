//! Parser
//!
//!     Turns the merged token stream into a [`Program`]. Two pieces do the work:
//!
//!         - [sequence](sequence): resolves one atomic run (tokens and resolved groups with
//!           no operator between them) to a single node, choosing its head.
//!         - [combiner](combiner): walks the whole stream, threads Dot, Colon and Comma over
//!           the atomic runs and handles parenthesized groups.
//!
//!     Precedence is fixed, tightest first: grouping, Dot, Colon, Comma. It is not
//!     configurable.

pub mod combiner;
pub mod sequence;

pub use combiner::Combiner;
pub use sequence::{Element, SequenceBuilder};

use crate::lexpr::ast::Program;
use crate::lexpr::error::TranslateResult;
use crate::lexpr::token::Token;

/// Default parenthesis nesting limit
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs that change how tokens are parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum parenthesis nesting depth
    pub max_depth: usize,
    /// Join separated identifiers in one run into a single head instead of failing
    pub mixfix_heads: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            mixfix_heads: false,
        }
    }
}

pub fn parse(tokens: Vec<Token>, options: &ParseOptions) -> TranslateResult<Program> {
    Combiner::new(options.clone()).parse(tokens)
}
