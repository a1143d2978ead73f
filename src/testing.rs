//! Testing utilities for parse-result assertions
//!
//! Asserting on node trees with nested `match`es buries the intent under
//! boilerplate. This module provides a fluent assertion API that tests whole
//! hierarchies at once:
//!
//! ```rust-example
//! use fuzzy_xml::testing::assert_nodes;
//!
//! assert_nodes(&nodes)
//!     .node_count(2)
//!     .node(0, |node| {
//!         node.assert_element()
//!             .tag("findings")
//!             .content_contains("indemnification")
//!             .child_count(1)
//!             .child(0, |child| {
//!                 child.assert_element().tag("details");
//!             });
//!     })
//!     .node(1, |node| {
//!         node.assert_text().content("Thank you.");
//!     });
//! ```
//!
//! Every assertion panics with a context path (`nodes[1].children[0]`) so a
//! failure names the exact node that went wrong.

use crate::ast::ParsedNode;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a forest of top-level nodes
pub fn assert_nodes(nodes: &[ParsedNode]) -> NodesAssertion<'_> {
    NodesAssertion { nodes }
}

// ============================================================================
// Forest Assertions
// ============================================================================

pub struct NodesAssertion<'a> {
    nodes: &'a [ParsedNode],
}

impl<'a> NodesAssertion<'a> {
    /// Assert the number of top-level nodes
    pub fn node_count(self, expected: usize) -> Self {
        let actual = self.nodes.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} top-level nodes, found {}: [{}]",
            expected,
            actual,
            summarize_nodes(self.nodes)
        );
        self
    }

    /// Assert on a specific top-level node by index
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.nodes.len(),
            "Node index {} out of bounds (result has {} top-level nodes)",
            index,
            self.nodes.len()
        );

        assertion(NodeAssertion {
            node: &self.nodes[index],
            context: format!("nodes[{}]", index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a ParsedNode,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert this node is a tagged element and return element assertions
    pub fn assert_element(self) -> ElementAssertion<'a> {
        match &self.node.tag_name {
            Some(_) => ElementAssertion {
                node: self.node,
                context: self.context,
            },
            None => panic!(
                "{}: Expected element, found text {:?}",
                self.context, self.node.content
            ),
        }
    }

    /// Assert this node is a plain text leaf and return text assertions
    pub fn assert_text(self) -> TextAssertion<'a> {
        match &self.node.tag_name {
            None => TextAssertion {
                node: self.node,
                context: self.context,
            },
            Some(tag) => panic!("{}: Expected text, found element '{}'", self.context, tag),
        }
    }
}

// ============================================================================
// Element Assertions
// ============================================================================

pub struct ElementAssertion<'a> {
    node: &'a ParsedNode,
    context: String,
}

impl<'a> ElementAssertion<'a> {
    /// Assert the element's tag name
    pub fn tag(self, expected: &str) -> Self {
        let actual = self.node.tag_name.as_deref().unwrap_or_default();
        assert_eq!(
            actual, expected,
            "{}: Expected tag '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    /// Assert the element's directly-contained text, exactly
    pub fn content(self, expected: &str) -> Self {
        assert_eq!(
            self.node.content, expected,
            "{}: Expected content {:?}, found {:?}",
            self.context, expected, self.node.content
        );
        self
    }

    /// Assert the element's text contains a fragment
    pub fn content_contains(self, fragment: &str) -> Self {
        assert!(
            self.node.content.contains(fragment),
            "{}: Expected content containing {:?}, found {:?}",
            self.context,
            fragment,
            self.node.content
        );
        self
    }

    /// Assert the number of direct children
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_nodes(&self.node.children)
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.node.children.len(),
            "{}: Child index {} out of bounds (element has {} children)",
            self.context,
            index,
            self.node.children.len()
        );

        assertion(NodeAssertion {
            node: &self.node.children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Text Assertions
// ============================================================================

pub struct TextAssertion<'a> {
    node: &'a ParsedNode,
    context: String,
}

impl TextAssertion<'_> {
    /// Assert the text content, exactly
    pub fn content(self, expected: &str) -> Self {
        assert_eq!(
            self.node.content, expected,
            "{}: Expected text {:?}, found {:?}",
            self.context, expected, self.node.content
        );
        self
    }

    /// Assert the text content contains a fragment
    pub fn content_contains(self, fragment: &str) -> Self {
        assert!(
            self.node.content.contains(fragment),
            "{}: Expected text containing {:?}, found {:?}",
            self.context,
            fragment,
            self.node.content
        );
        self
    }
}

fn summarize_nodes(nodes: &[ParsedNode]) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
