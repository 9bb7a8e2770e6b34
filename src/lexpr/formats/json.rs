//! JSON formatter
//!
//! Serializes the [`Program`] as is: the flat node arena plus the ids of the top-level
//! items. Children always appear before their parents in the arena.

use crate::lexpr::ast::Program;
use crate::lexpr::formats::registry::{FormatError, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        serde_json::to_string_pretty(program)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Node arena and top-level items as JSON"
    }
}
