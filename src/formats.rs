//! Output format implementations for parse-result serialization
//!
//! This module contains the different format implementations for rendering
//! a forest of parsed nodes:
//! - JSON (pretty and compact): lossless interchange
//! - YAML: human-friendly structured rendering
//! - treeviz: one-line-per-node display format
//!
//! Formats are consumers of the parse result; they never influence parsing.

pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use json::{to_json_compact_str, to_json_str, JsonCompactFormatter, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::{to_yaml_str, YamlFormatter};
