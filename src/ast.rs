//! Output tree for fuzzy XML parsing
//!
//!     The parse result is a forest of [ParsedNode] values. A node is either a
//!     tagged container (it came from a matched opening tag and may nest further
//!     nodes) or a plain text leaf (it came from a run of text between tags).
//!
//!     Nodes are plain values: once the parser returns them they are never
//!     mutated. There is no node identity beyond structural position.
//!
//! Serialization
//!
//!     `ParsedNode` serializes losslessly to JSON/YAML with camelCase field
//!     names. `tagName` is omitted entirely for text leaves:
//!
//!         {"tagName": "a", "content": "hello", "children": []}
//!         {"content": "loose text", "children": []}

use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of the output tree: a tagged container or a plain text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedNode {
    /// Tag name of the opening tag this node came from; `None` for text leaves.
    /// The empty string is a legal tag name (`<>` parses leniently).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    /// Directly-contained text, trimmed of leading/trailing whitespace.
    /// Never contains the `<` character.
    pub content: String,
    /// Nested tagged nodes in document order. Always empty for text leaves.
    #[serde(default)]
    pub children: Vec<ParsedNode>,
}

impl ParsedNode {
    /// A tagged container node.
    pub fn element(
        tag_name: impl Into<String>,
        content: impl Into<String>,
        children: Vec<ParsedNode>,
    ) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            content: content.into(),
            children,
        }
    }

    /// A plain text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag_name: None,
            content: content.into(),
            children: Vec::new(),
        }
    }

    /// True for plain text leaves (no tag name).
    pub fn is_text(&self) -> bool {
        self.tag_name.is_none()
    }

    /// First direct child with the given tag name, if any.
    pub fn child_by_tag(&self, tag_name: &str) -> Option<&ParsedNode> {
        self.children
            .iter()
            .find(|child| child.tag_name.as_deref() == Some(tag_name))
    }

    /// Number of nodes in this subtree, this node included.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ParsedNode::subtree_len)
            .sum::<usize>()
    }
}

impl fmt::Display for ParsedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag_name {
            Some(tag) => write!(f, "Element('{}', {} children)", tag, self.children.len()),
            None => write!(f, "Text({:?})", self.content),
        }
    }
}
