//! YAML serialization of parse results
//!
//! Same shape as the JSON format, rendered with serde_yaml. Mostly useful
//! for eyeballing larger trees; JSON remains the interchange format.

use super::registry::{FormatError, Formatter};
use crate::ast::ParsedNode;

/// Serialize a forest to YAML.
pub fn to_yaml_str(nodes: &[ParsedNode]) -> Result<String, FormatError> {
    serde_yaml::to_string(nodes).map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// YAML formatter
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, nodes: &[ParsedNode]) -> Result<String, FormatError> {
        to_yaml_str(nodes)
    }

    fn description(&self) -> &str {
        "YAML rendering of the node tree"
    }
}
