//! JSON serialization of parse results
//!
//! The JSON shape mirrors [ParsedNode](crate::ast::ParsedNode) directly:
//! `tagName` (omitted for text leaves), `content`, `children`. This is the
//! lossless interchange format; parse results round-trip through it.

use super::registry::{FormatError, Formatter};
use crate::ast::ParsedNode;

/// Serialize a forest to pretty-printed JSON.
pub fn to_json_str(nodes: &[ParsedNode]) -> Result<String, FormatError> {
    serde_json::to_string_pretty(nodes)
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// Serialize a forest to compact single-line JSON.
pub fn to_json_compact_str(nodes: &[ParsedNode]) -> Result<String, FormatError> {
    serde_json::to_string(nodes).map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// Pretty-printed JSON formatter
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, nodes: &[ParsedNode]) -> Result<String, FormatError> {
        to_json_str(nodes)
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON, lossless"
    }
}

/// Compact JSON formatter
pub struct JsonCompactFormatter;

impl Formatter for JsonCompactFormatter {
    fn name(&self) -> &str {
        "json-compact"
    }

    fn serialize(&self, nodes: &[ParsedNode]) -> Result<String, FormatError> {
        to_json_compact_str(nodes)
    }

    fn description(&self) -> &str {
        "Single-line JSON, lossless"
    }
}
