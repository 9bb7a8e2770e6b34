//! Testing utilities
//!
//!     Shared helpers for unit and integration tests.
//!
//!     Lexpr's translation rules were pinned down from worked examples rather than from a
//!     general law (see the flatten-vs-nest rules in [combiner](crate::lexpr::parsing::combiner)).
//!     Hand-written one-off sources drift from those examples easily, so end-to-end tests
//!     should prefer the verified sample pairs under `samples/`, loaded with [`load_samples`]:
//!     each `<name>.lexpr` file sits next to a `<name>.sexpr` file holding the expected
//!     canonical output.

use crate::lexpr::ast::{Atom, AtomKind, Range};
use crate::lexpr::formats::sexpr::print_program;
use crate::lexpr::{translate, TranslateResult};
use std::fs;
use std::path::{Path, PathBuf};

pub mod factories {
    use super::*;

    pub fn mk_ident(text: &str) -> Atom {
        Atom::new(AtomKind::Identifier, text, Range::default())
    }

    pub fn mk_number(text: &str) -> Atom {
        Atom::new(AtomKind::Number, text, Range::default())
    }

    pub fn mk_symbol(text: &str) -> Atom {
        Atom::new(AtomKind::Symbol, text, Range::default())
    }
}

/// Translate with default settings and print canonically
pub fn render(source: &str) -> TranslateResult<String> {
    translate(source).map(|program| print_program(&program))
}

/// A verified source/expected-output pair
#[derive(Debug, Clone)]
pub struct Sample {
    pub name: String,
    pub source: String,
    pub expected: String,
}

pub fn samples_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("samples")
}

/// Load every `*.lexpr` / `*.sexpr` pair, sorted by name
///
/// Expected output has its trailing newline trimmed.
pub fn load_samples() -> std::io::Result<Vec<Sample>> {
    let mut samples = Vec::new();
    for entry in fs::read_dir(samples_dir())? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("lexpr") {
            continue;
        }
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let source = fs::read_to_string(&path)?;
        let expected = fs::read_to_string(path.with_extension("sexpr"))?
            .trim_end()
            .to_string();
        samples.push(Sample {
            name,
            source,
            expected,
        });
    }
    samples.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(samples)
}
