//! Recursive tree assembly over the shared scanner
//!
//!     One pass, one cursor, no separate lexer. `parse_node` produces a
//!     single node (tagged or text) and recurses for nested tags; the
//!     top-level loop collects nodes until the input is exhausted.
//!
//!     Nothing here can fail. Every malformed construct degrades to one of
//!     the recovery policies:
//!       - unterminated tag: rolled back and rescanned as text / skipped;
//!       - mismatched end tag inside a body: parsed recursively, so it lands
//!         as a child element (its `/` is discarded by the tag reader);
//!       - end of input before the matching end tag: the node closes
//!         implicitly with whatever it accumulated;
//!       - a lone `<` that forms neither tag nor text: skipped, one
//!         character at a time, with no diagnostic.

use super::scanner::Scanner;
use super::tags::{match_tag_name, read_tag_name};
use crate::ast::ParsedNode;

/// Outcome of one `parse_node` attempt.
///
/// `Skip` means no node could be formed at the cursor and no input was
/// consumed; the caller must advance one character to guarantee progress.
/// This is deliberately not an error: skipping is a recovery policy.
#[derive(Debug)]
enum ParseStep {
    Node(ParsedNode),
    Skip,
}

/// A parser instance bound to one input text.
///
/// Instances are single-use and single-threaded; distinct instances over
/// distinct inputs are fully independent.
#[derive(Debug)]
pub struct Parser {
    scanner: Scanner,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self {
            scanner: Scanner::new(input),
        }
    }

    /// Parse the entire input into a forest of top-level nodes.
    ///
    /// Total over all inputs: the empty string yields an empty forest and no
    /// input, however malformed, raises an error.
    pub fn parse(mut self) -> Vec<ParsedNode> {
        let mut nodes = Vec::new();
        while !self.scanner.is_at_end() {
            match self.parse_node() {
                ParseStep::Node(node) => nodes.push(node),
                // Forced single-character advance: the only way the cursor
                // moves when no node could be formed.
                ParseStep::Skip => self.scanner.bump(),
            }
        }
        nodes
    }

    /// Produce one node at the cursor, or `Skip` when nothing can be formed.
    fn parse_node(&mut self) -> ParseStep {
        self.scanner.skip_whitespace();

        if self.scanner.peek() != Some('<') {
            // Text outside of tags, up to the next '<' or end of input.
            return self.text_step();
        }

        match read_tag_name(&mut self.scanner) {
            Some(tag) => ParseStep::Node(self.parse_element_body(tag)),
            // Failed tag read; the cursor was rolled back onto the '<', so
            // the text rescan stops immediately and this becomes a Skip.
            None => self.text_step(),
        }
    }

    /// Scan the body of an element whose opening tag was just consumed.
    fn parse_element_body(&mut self, tag: String) -> ParsedNode {
        let mut children = Vec::new();
        let mut content = String::new();

        while !self.scanner.is_at_end() {
            if self.scanner.peek_ahead(0) == Some('<')
                && self.scanner.peek_ahead(1) == Some('/')
                && match_tag_name(&self.scanner, &tag)
            {
                // Matching end tag: consume it and close. The read can still
                // fail on a truncated `</name` with no '>'; the node closes
                // either way, per the end-of-input recovery policy.
                read_tag_name(&mut self.scanner);
                break;
            } else if self.scanner.peek() == Some('<') {
                // A different tag, a mismatched end tag, or noise: recurse.
                match self.parse_node() {
                    ParseStep::Node(child) => children.push(child),
                    // Recursion consumed nothing; advance one character so
                    // the body loop makes progress (e.g. `<a>b<c`).
                    ParseStep::Skip => self.scanner.bump(),
                }
            } else {
                content.push_str(&self.scanner.read_until('<'));
            }
        }

        // Reaching end of input without the end tag closes the node
        // implicitly; truncated output is the common case, not an error.
        ParsedNode {
            tag_name: Some(tag),
            content: content.trim().to_string(),
            children,
        }
    }

    /// Read plain text up to the next '<'; empty trimmed text yields `Skip`.
    fn text_step(&mut self) -> ParseStep {
        let text = self.scanner.read_until('<');
        let trimmed = text.trim();
        if trimmed.is_empty() {
            ParseStep::Skip
        } else {
            ParseStep::Node(ParsedNode::text(trimmed))
        }
    }
}

/// Parse `input` into a forest of top-level nodes.
///
/// Convenience wrapper over [Parser]; this is the primary entry point.
pub fn parse(input: &str) -> Vec<ParsedNode> {
    Parser::new(input).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), vec![]);
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(parse(" \n\t "), vec![]);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("just text"), vec![ParsedNode::text("just text")]);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(
            parse("<a>hello</a>"),
            vec![ParsedNode::element("a", "hello", vec![])]
        );
    }

    #[test]
    fn test_nested_elements() {
        assert_eq!(
            parse("<a>hello<b>world</b></a>"),
            vec![ParsedNode::element(
                "a",
                "hello",
                vec![ParsedNode::element("b", "world", vec![])]
            )]
        );
    }

    #[test]
    fn test_unclosed_element_recovers() {
        assert_eq!(
            parse("<a>partial"),
            vec![ParsedNode::element("a", "partial", vec![])]
        );
    }

    #[test]
    fn test_lone_angle_bracket() {
        assert_eq!(parse("<"), vec![]);
        assert_eq!(parse(">"), vec![ParsedNode::text(">")]);
    }

    #[test]
    fn test_stray_bracket_between_text() {
        assert_eq!(
            parse("a < b"),
            vec![ParsedNode::text("a"), ParsedNode::text("b")]
        );
    }

    #[test]
    fn test_mismatched_end_tag_becomes_child() {
        // `</b>` never matches `a`, so the recursive path parses it as a
        // child element named "b" (the tag reader drops the '/').
        assert_eq!(
            parse("<a><c>x</c></b>"),
            vec![ParsedNode::element(
                "a",
                "",
                vec![
                    ParsedNode::element("c", "x", vec![]),
                    ParsedNode::element("b", "", vec![]),
                ]
            )]
        );
    }

    #[test]
    fn test_empty_tag_name_is_an_element() {
        assert_eq!(
            parse("<>hello</>"),
            vec![ParsedNode::element("", "hello", vec![])]
        );
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(
            parse("  <a>  hi  </a>  "),
            vec![ParsedNode::element("a", "hi", vec![])]
        );
    }

    #[test]
    fn test_unterminated_tag_inside_body_terminates() {
        // The unterminated `<c` forms no tag and no text; the body loop
        // skips the '<' and keeps going.
        assert_eq!(
            parse("<a>b<c"),
            vec![ParsedNode::element("a", "bc", vec![])]
        );
    }

    #[test]
    fn test_truncated_end_tag() {
        // `</a` matches but its read fails (no '>'), so the node closes and
        // the leftover `/a` resurfaces as top-level text after a skip.
        assert_eq!(
            parse("<a>x</a"),
            vec![
                ParsedNode::element("a", "x", vec![]),
                ParsedNode::text("/a"),
            ]
        );
    }

    #[test]
    fn test_attributes_are_skipped() {
        assert_eq!(
            parse(r#"<a href="url">link</a>"#),
            vec![ParsedNode::element("a", "link", vec![])]
        );
    }

    #[test]
    fn test_same_name_nesting() {
        assert_eq!(
            parse("<a><a>x</a></a>"),
            vec![ParsedNode::element(
                "a",
                "",
                vec![ParsedNode::element("a", "x", vec![])]
            )]
        );
    }

    #[test]
    fn test_text_around_child_concatenates() {
        assert_eq!(
            parse("<a> x <b>y</b> z </a>"),
            vec![ParsedNode::element(
                "a",
                "x  z",
                vec![ParsedNode::element("b", "y", vec![])]
            )]
        );
    }

    #[test]
    fn test_unescaped_entities_stay_literal() {
        assert_eq!(
            parse("<a>fish &amp; chips > salad</a>"),
            vec![ParsedNode::element("a", "fish &amp; chips > salad", vec![])]
        );
    }
}
