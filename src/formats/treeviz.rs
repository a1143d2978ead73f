//! Treeviz formatter for parse results
//!
//! A one-line-per-node visual rendering of the tree, for quick scanning of
//! what the parser recovered from a messy transcript. Structure is encoded
//! with box-drawing connectors:
//!
//!     ├─ element: <findings> The indemnification clause…
//!     │ └─ element: <details> This could expose us to…
//!     └─ text: "Thank you."
//!
//! Labels are truncated to 40 characters. This format is display-only and
//! lossy; use the JSON format for interchange.

use super::registry::{FormatError, Formatter};
use crate::ast::ParsedNode;

const MAX_LABEL_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn display_label(node: &ParsedNode) -> String {
    match &node.tag_name {
        Some(tag) if node.content.is_empty() => format!("<{tag}>"),
        Some(tag) => format!("<{tag}> {}", node.content),
        None => format!("{:?}", node.content),
    }
}

fn node_kind(node: &ParsedNode) -> &'static str {
    if node.is_text() {
        "text"
    } else {
        "element"
    }
}

/// Render a forest of nodes as an indented tree, one line per node.
pub fn to_treeviz_str(nodes: &[ParsedNode]) -> String {
    let mut result = String::new();
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        append_node(&mut result, node, "", is_last);
    }
    result
}

fn append_node(result: &mut String, node: &ParsedNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&display_label(node), MAX_LABEL_CHARS);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node_kind(node),
        label
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    for (i, child) in node.children.iter().enumerate() {
        let child_is_last = i == node.children.len() - 1;
        append_node(result, child, &child_prefix, child_is_last);
    }
}

/// Treeviz formatter
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, nodes: &[ParsedNode]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(nodes))
    }

    fn description(&self) -> &str {
        "One line per node, indentation shows nesting (lossy)"
    }
}
