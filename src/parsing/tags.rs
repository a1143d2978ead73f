//! Tag reading over the shared scanner
//!
//!     A tag is `<`, an optional `/`, a maximal `[a-zA-Z0-9]*` name, anything
//!     at all up to the next `>` (attributes and other tag-interior content
//!     are silently discarded), then `>`. The reader does not tell the caller
//!     whether the tag was an opening or closing one; only the bare name
//!     comes back.
//!
//!     Leniency rules:
//!       - An empty name is a successful read (`<>` and `</>` both yield "").
//!         Only a missing `>` before end of input is a failure.
//!       - On failure the cursor is rolled back to where the read began, via
//!         the scanner's checkpoint/restore pair.

use super::scanner::Scanner;

/// Speculatively consume one tag at the cursor and return its bare name.
///
/// Returns `None` without moving the cursor when the cursor is not on `<`,
/// and `None` after a full rollback when no `>` is found before end of input.
pub fn read_tag_name(scanner: &mut Scanner) -> Option<String> {
    if scanner.peek() != Some('<') {
        return None;
    }
    let start = scanner.checkpoint();
    scanner.bump(); // consume '<'

    // End tags read the same as opening tags; the '/' is not reported.
    if scanner.peek() == Some('/') {
        scanner.bump();
    }

    let mut tag_name = String::new();
    while let Some(c) = scanner.peek() {
        if !c.is_ascii_alphanumeric() {
            break;
        }
        tag_name.push(c);
        scanner.bump();
    }

    // Skip attributes or any other malformed interior up to '>'.
    while let Some(c) = scanner.peek() {
        if c == '>' {
            break;
        }
        scanner.bump();
    }

    if scanner.peek() == Some('>') {
        scanner.bump();
        Some(tag_name)
    } else {
        // No closing '>' before end of input: not a tag after all.
        scanner.restore(start);
        None
    }
}

/// Pure lookahead: does the cursor sit on an end tag named exactly `tag_name`?
///
/// Checks for the literal `</` followed by an alphanumeric run equal to
/// `tag_name`. The full run is captured before comparing, so `</ab>` never
/// matches `a`. The cursor does not move.
pub fn match_tag_name(scanner: &Scanner, tag_name: &str) -> bool {
    if scanner.peek_ahead(0) != Some('<') || scanner.peek_ahead(1) != Some('/') {
        return false;
    }
    let mut end_tag_name = String::new();
    let mut offset = 2;
    while let Some(c) = scanner.peek_ahead(offset) {
        if !c.is_ascii_alphanumeric() {
            break;
        }
        end_tag_name.push(c);
        offset += 1;
    }
    end_tag_name == tag_name
}
