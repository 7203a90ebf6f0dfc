//! Format-string engine
//!
//! A self-contained parse/unparse pipeline for the mini-grammar of string
//! formatting placeholders: literal runs, `{{` / `}}` escapes, and
//! `{name!conversion:spec}` replacement fields. Parsing then unparsing a
//! format string is byte-identical, with exactly one intentional
//! normalization: empty conversion/spec markers are dropped on unparse
//! (`{:}` becomes `{}`, `{0!r:}` becomes `{0!r}`).
//!
//! Both text and byte strings are accepted. The subtype is an explicit
//! [`StrKind`] tag carried through the parsed structure, never inferred:
//! byte inputs are lifted losslessly through the Latin-1 mapping
//! (byte `b` ↔ `char U+00b`) so part payloads stay `String`, and the tag
//! re-encodes the output at unparse time.

pub mod parser;
pub mod unparser;

pub use parser::{parse_format, parse_format_bytes};
pub use unparser::unparse_parsed_string;

/// String subtype: text or legacy byte string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrKind {
    Text,
    Bytes,
}

/// One parsed element of a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatPart {
    /// A plain substring with brace escapes folded in (stored unescaped;
    /// the unparser re-escapes).
    Literal(String),
    /// A `{...}` replacement field. `name: None` marks an auto-numbered
    /// empty `{}` placeholder. The spec segment is opaque text; nested
    /// replacement fields inside it are not structurally parsed.
    Field {
        name: Option<String>,
        conversion: Option<String>,
        spec: Option<String>,
    },
}

/// A fully parsed format string: its subtype tag plus its elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedString {
    pub kind: StrKind,
    pub parts: Vec<FormatPart>,
}

/// Unparser output, in the same subtype as the parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnparsedString {
    Text(String),
    Bytes(Vec<u8>),
}

impl UnparsedString {
    pub fn kind(&self) -> StrKind {
        match self {
            UnparsedString::Text(_) => StrKind::Text,
            UnparsedString::Bytes(_) => StrKind::Bytes,
        }
    }

    /// The text payload, if this is a text string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            UnparsedString::Text(text) => Some(text),
            UnparsedString::Bytes(_) => None,
        }
    }

    /// The byte payload, if this is a byte string.
    pub fn as_byte_string(&self) -> Option<&[u8]> {
        match self {
            UnparsedString::Text(_) => None,
            UnparsedString::Bytes(bytes) => Some(bytes),
        }
    }
}
