//! # recast
//!
//! A round-trip-safe source rewriter: it detects outdated syntax constructs
//! in source text and mechanically rewrites them into modern equivalents,
//! preserving everything else (whitespace, comments, formatting)
//! byte-for-byte outside the rewritten spans.
//!
//! The crate is built around two lossless engines:
//!
//! - [`tokenize_src`] / [`untokenize_tokens`]: a tokenizer whose output,
//!   concatenated back together, reproduces the input exactly. Inter-token
//!   whitespace the primitive scanner does not tokenize is synthesized as
//!   explicit tokens so that original spacing is representable.
//! - [`parse_format`] / [`unparse_parsed_string`]: a mini-parser for string
//!   formatting placeholders (`{}`, `{0}`, `{name!conv:spec}`, `{{` escapes)
//!   with exactly one intentional normalization: empty conversion/spec
//!   markers are dropped on unparse (`{0!r:}` becomes `{0!r}`).
//!
//! Rewrite rules consume the token stream and edit matched subranges,
//! leaving every non-matched token untouched. [`fix_sets`] is the
//! representative rule: it rewrites `set(...)` calls over tuple/list
//! displays and generator expressions into set displays.

pub mod errors;
pub mod formatting;
pub mod lexing;
pub mod rules;
pub mod tokens;

pub use errors::{FormatParseError, LexError, LexErrorKind};
pub use formatting::{
    parse_format, parse_format_bytes, unparse_parsed_string, FormatPart, ParsedString, StrKind,
    UnparsedString,
};
pub use lexing::{tokenize_src, untokenize_tokens};
pub use rules::fix_sets;
pub use tokens::{Token, TokenKind};
