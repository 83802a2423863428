//! Directive parser for docassert.
//!
//! Reads the documentation comment attached to one symbol and extracts its
//! `@assert` directives:
//!
//! ```text
//! @assert [{Kind}] [Name] - <args> => <expected>
//! ```
//!
//! `<args>` is a comma-separated list of `value[:type]` tokens (blank
//! elements allowed) and `<expected>` is a single `value[:type]` token.
//!
//! Parsing is line-oriented. Lines without the marker are prose and are
//! skipped. A malformed directive yields a [`ParseError`] in its slot, so
//! sibling directives still parse and source order is preserved.
//!
//! The parser also reads `@param {Type} name` and `@returns {Type}` so that
//! untyped tokens can default to the documented types (see [`DocBlock`]).

mod comment;
mod directive;
mod doc_block;
mod errors;
mod parser;
mod token;

pub use comment::doc_lines;
pub use directive::Directive;
pub use doc_block::{parse_doc_block, DocBlock, ParamDoc};
pub use errors::{ParseError, ParseErrorKind};
pub use parser::{parse_directives, ParsedDirective, MARKER};
pub use token::Token;
