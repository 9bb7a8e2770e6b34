//! Abstract syntax tree for translated Lexpr
//!
//! The AST is a closed set of two node variants, [`Atom`] and [`Application`], stored in a
//! flat arena ([`Ast`]) and addressed by [`NodeId`]. A [`Program`] is the arena plus the
//! ordered list of top-level items, one per comma-separated expression in the source.
//!
//! Source locations live in the [`range`] module.

pub mod node;
pub mod range;

pub use node::{Application, Ast, Atom, AtomKind, HeadKind, Node, NodeId, Program};
pub use range::{Position, Range, SourceLocation};
