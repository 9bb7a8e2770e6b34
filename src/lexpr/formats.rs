//! Output formats for translated programs
//!
//!     sexpr    canonical prefix s-expressions (the default)
//!     json     the program's arena and items, serialized with serde
//!     treeviz  one node per line, for eyeballing structure
//!
//! Formats are looked up by name through the [`FormatRegistry`].

pub mod json;
pub mod registry;
pub mod sexpr;
pub mod treeviz;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use sexpr::{print_program, SexprFormatter};
pub use treeviz::TreevizFormatter;
