//! Output format registry
//!
//! Each output format implements [`Formatter`] and is looked up by name in a
//! [`FormatRegistry`]. The CLI resolves `--format` through the registry, so adding a format
//! means registering it in [`FormatRegistry::with_defaults`].

use crate::lexpr::ast::Program;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// A named way of rendering a translated program
pub trait Formatter: Send + Sync {
    /// Name used on the command line (`sexpr`, `json`, ...)
    fn name(&self) -> &str;

    fn serialize(&self, program: &Program) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// An empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any existing one with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, program: &Program, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(program)
    }

    /// Format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// `(name, description)` pairs, sorted by name
    pub fn describe_formats(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .filter_map(|name| {
                let description = self.get(&name)?.description().to_string();
                Some((name, description))
            })
            .collect()
    }

    /// A registry holding the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::SexprFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::TreevizFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
