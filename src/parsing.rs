//! Parsing module for fuzzy XML
//!
//! This module is the entire parsing engine: a single-pass recursive descent
//! over one shared cursor, with rollback for speculative tag reads.
//!
//! 1. **Scanner**: character-level primitives over the input (peek,
//!    read-until, whitespace skipping, checkpoint/restore)
//! 2. **Tag reading**: speculative consumption of `<name ...>` / `</name>`
//!    with full rollback when no closing `>` exists
//! 3. **Tree assembly**: recursive construction of [ParsedNode] values,
//!    with recovery policies for every malformed shape
//!
//! There is no separate lexer, no token stream, and no error type: parsing
//! is total. Malformed input degrades to text nodes, implicitly closed
//! elements, or silently skipped characters.
//!
//! ## Terminology
//!
//! - **well-closed**: an element whose matching end tag was found, as
//!   opposed to one closed implicitly at end of input
//! - **rollback**: restoring the cursor to a checkpoint after a failed
//!   speculative tag read

pub mod parser;
pub mod scanner;
pub mod tags;

pub use crate::ast::ParsedNode;
pub use parser::{parse, Parser};
pub use scanner::{Checkpoint, Scanner};
pub use tags::{match_tag_name, read_tag_name};
