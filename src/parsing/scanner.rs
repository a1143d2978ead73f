//! Character-level scanner over a fully materialized input
//!
//!     The scanner owns the input text and a single read cursor. All parsing
//!     layers share this one cursor; nothing in the engine buffers or streams.
//!     The input is held as a char vector so `peek_ahead` is O(1) regardless
//!     of UTF-8 byte widths.
//!
//!     The cursor only moves forward during reads. The one way it moves
//!     backward is the explicit [Checkpoint] pair: snapshot before a
//!     speculative read, restore exactly on failure.

/// Saved cursor state for speculative reads.
///
/// Opaque outside this module so a checkpoint can only be produced and
/// consumed by the scanner that issued it.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    position: usize,
}

/// Input text plus a read cursor.
#[derive(Debug)]
pub struct Scanner {
    chars: Vec<char>,
    position: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
        }
    }

    /// Character at the cursor, or `None` at end of input. No side effect.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Character `offset` positions past the cursor, or `None` past the end.
    /// No side effect.
    pub fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Advance the cursor by exactly one character.
    ///
    /// This is the forced-progress primitive for the top-level parse loop;
    /// the skipped character is dropped, it appears in no node.
    pub fn bump(&mut self) {
        if self.position < self.chars.len() {
            self.position += 1;
        }
    }

    /// Consume and return everything up to (not including) the next
    /// occurrence of `delimiter`, or to end of input. End of input counts as
    /// an implicit delimiter, so this always terminates.
    pub fn read_until(&mut self, delimiter: char) -> String {
        let mut result = String::new();
        while let Some(c) = self.peek() {
            if c == delimiter {
                break;
            }
            result.push(c);
            self.position += 1;
        }
        result
    }

    /// Advance past any run of whitespace. No-op when the cursor is not on
    /// whitespace.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.position += 1;
        }
    }

    /// Snapshot the cursor before a speculative read.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
        }
    }

    /// Restore the cursor to a previously saved checkpoint.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
    }
}
