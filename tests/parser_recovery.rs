//! Integration tests for malformed-input recovery.
//!
//! Every case here is some shape of broken input; none of them may fail.
//! The exact recovery shapes are load-bearing: downstream consumers depend
//! on them, so these tests pin them down rather than merely checking that
//! parsing succeeds.

use fuzzy_xml::parse;
use fuzzy_xml::testing::assert_nodes;
use rstest::rstest;

#[rstest]
#[case::empty("")]
#[case::whitespace_only(" \t\r\n  ")]
#[case::lone_open_bracket("<")]
#[case::lone_close_bracket_whitespace(" > ")]
#[case::brackets_only("<<<<")]
#[case::unterminated_tag_only("<div")]
#[case::end_tag_fragment("</")]
fn produces_empty_or_total_result(#[case] input: &str) {
    // Totality: parse returns for all of these; shape checks are separate.
    let _ = parse(input);
}

#[rstest]
#[case::empty("", 0)]
#[case::whitespace_only("   \n  ", 0)]
#[case::lone_open_bracket("<", 0)]
// The failed tag read rolls back onto '<'; the bracket is skipped and the
// remainder comes back as text.
#[case::unterminated_tag_residue("<div with stuff", 1)]
#[case::lone_close_bracket(">", 1)]
#[case::plain_text("no tags at all", 1)]
fn top_level_node_counts(#[case] input: &str, #[case] expected: usize) {
    assert_nodes(&parse(input)).node_count(expected);
}

#[test]
fn unclosed_tag_closes_at_end_of_input() {
    assert_nodes(&parse("<a>partial")).node_count(1).node(0, |node| {
        node.assert_element().tag("a").content("partial").child_count(0);
    });
}

#[test]
fn truncated_nested_output_recovers() {
    let nodes = parse("<report>summary<finding>risk one<finding>risk two");
    assert_nodes(&nodes).node_count(1).node(0, |node| {
        node.assert_element()
            .tag("report")
            .content("summary")
            .child_count(1)
            .child(0, |child| {
                child
                    .assert_element()
                    .tag("finding")
                    .content("risk one")
                    .child_count(1)
                    .child(0, |grandchild| {
                        grandchild.assert_element().tag("finding").content("risk two");
                    });
            });
    });
}

#[test]
fn mismatched_end_tag_becomes_nested_element() {
    // `</b>` never matches `a`: the recursive fallback parses it as a child
    // element named "b" (the tag reader discards the '/'), and `a` closes at
    // end of input.
    let nodes = parse("<a><c>x</c></b>");
    assert_nodes(&nodes).node_count(1).node(0, |node| {
        node.assert_element()
            .tag("a")
            .content("")
            .child_count(2)
            .child(0, |child| {
                child.assert_element().tag("c").content("x").child_count(0);
            })
            .child(1, |child| {
                child.assert_element().tag("b").content("").child_count(0);
            });
    });
}

#[test]
fn stray_bracket_is_skipped_between_text() {
    let nodes = parse("a < b");
    assert_nodes(&nodes)
        .node_count(2)
        .node(0, |node| {
            node.assert_text().content("a");
        })
        .node(1, |node| {
            node.assert_text().content("b");
        });
}

#[test]
fn unterminated_tag_mid_body_does_not_hang() {
    // `<c` never finds a '>' so it forms no tag and no text; the body scan
    // skips the bracket and resumes with the following character.
    assert_nodes(&parse("<a>b<c")).node_count(1).node(0, |node| {
        node.assert_element().tag("a").content("bc").child_count(0);
    });
}

#[test]
fn truncated_end_tag_closes_node_and_leaves_residue() {
    // The end-tag lookahead matches `</a` but its consumption fails on the
    // missing '>'; the node still closes and the leftover `/a` comes back as
    // top-level text after the '<' is skipped.
    let nodes = parse("<a>x</a");
    assert_nodes(&nodes)
        .node_count(2)
        .node(0, |node| {
            node.assert_element().tag("a").content("x");
        })
        .node(1, |node| {
            node.assert_text().content("/a");
        });
}

#[test]
fn empty_tag_names_are_accepted() {
    assert_nodes(&parse("<>hello</>")).node_count(1).node(0, |node| {
        node.assert_element().tag("").content("hello").child_count(0);
    });
}

#[test]
fn unescaped_entities_and_gt_stay_literal() {
    let nodes = parse("<m>5 > 3 &amp;&amp; 2 < 4</m>");
    // The '<' before "4" starts a tag read with an empty name; the interior
    // skip runs all the way to the '>' of `</m>`, so the tail collapses into
    // an empty-named child element.
    assert_nodes(&nodes).node_count(1).node(0, |node| {
        node.assert_element()
            .tag("m")
            .content("5 > 3 &amp;&amp; 2")
            .child_count(1)
            .child(0, |child| {
                child.assert_element().tag("").content("").child_count(0);
            });
    });
}

#[test]
fn mismatched_close_of_never_opened_tag() {
    let nodes = parse("text</ghost>more");
    assert_nodes(&nodes)
        .node_count(2)
        .node(0, |node| {
            node.assert_text().content("text");
        })
        .node(1, |node| {
            // A stray end tag at top level parses as an element; its body
            // swallows the rest of the input as content.
            node.assert_element().tag("ghost").content("more");
        });
}

#[test]
fn deeply_nested_unclosed_tags_terminate() {
    let input = "<a>".repeat(200);
    let nodes = parse(&input);
    assert_nodes(&nodes).node_count(1);
    // 200 levels of implicit end-of-input closing.
    let mut depth = 0;
    let mut node = &nodes[0];
    loop {
        assert_eq!(node.tag_name.as_deref(), Some("a"));
        depth += 1;
        match node.children.first() {
            Some(child) => node = child,
            None => break,
        }
    }
    assert_eq!(depth, 200);
}
