//! # fuzzy-xml
//!
//! A lenient, fault-tolerant parser for XML-like text, built for the kind of
//! almost-XML that large-language-model output tends to contain: unescaped
//! entities, stray angle brackets, attributes nobody closed, and tags that
//! simply stop at the end of the transcript.
//!
//! Parsing is total: any input, however malformed, yields a best-effort tree
//! of tagged and untagged text segments. There is no error type.
//!
//! ## Quick Start
//!
//! ```rust-example
//! use fuzzy_xml::parse;
//!
//! let nodes = parse("<findings>clause is broad<details>high risk</details>");
//! assert_eq!(nodes[0].tag_name.as_deref(), Some("findings"));
//! assert_eq!(nodes[0].children[0].content, "high risk");
//! ```
//!
//! The result serializes losslessly to JSON (see [formats]), and the
//! `fuzzy-xml` binary renders files in any registered format.
//!
//! This crate does not validate well-formedness, resolve entities or
//! namespaces, capture attributes (they are skipped), or stream; the whole
//! input is parsed as one in-memory string.

pub mod ast;
pub mod formats;
pub mod parsing;
pub mod testing;

// Re-export the primary types at the crate root for convenience.
pub use ast::ParsedNode;
pub use parsing::{parse, Parser};
