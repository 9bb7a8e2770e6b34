//! Configuration loader
//!
//! `defaults/lexpr.default.toml` is embedded into the binary, so the documented defaults
//! and the runtime behavior cannot drift apart. Callers layer a user file and individual
//! overrides on top of it through [`Loader`] and deserialize into [`LexprConfig`].

use crate::lexpr::parsing::ParseOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/lexpr.default.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexprConfig {
    pub limits: LimitsConfig,
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    /// Inputs above this size are rejected before lexing
    pub max_input_bytes: usize,
    pub max_depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub mixfix_heads: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered output format
    pub format: String,
}

impl LexprConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_depth: self.limits.max_depth,
            mixfix_heads: self.parsing.mixfix_heads,
        }
    }
}

/// Layers user settings over the embedded defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that must exist
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file, skipped when absent
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `parsing.mixfix_heads`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<LexprConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<LexprConfig, ConfigError> {
    Loader::new().build()
}
