//! Error types
//!
//! Two failure families exist: the primitive scanner rejecting malformed
//! source, and the format-string parser rejecting unbalanced placeholder
//! braces. Both are propagated to the caller unmodified; nothing in the
//! crate catches or retries them. The set-literal rule's third failure mode
//! (ambiguous paren attribution) is a policy, not an error: the rule
//! declines the rewrite and leaves the span byte-identical.

use thiserror::Error;

/// What the scanner choked on.
///
/// This is also the logos error type for the primitive scanner, hence the
/// `Default` impl (logos reports unknown input as the default variant).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[default]
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// Tokenization failure, positioned at the offending byte.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot tokenize source at line {line}, byte offset {utf8_byte_offset}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line of the failure.
    pub line: usize,
    /// 0-based byte offset within `line`.
    pub utf8_byte_offset: usize,
}

/// Malformed placeholder braces in a format string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatParseError {
    #[error("single '}}' encountered in format string")]
    SingleClosingBrace,
    #[error("expected '}}' before end of string")]
    UnterminatedField,
    #[error("unexpected '{{' in field name")]
    UnexpectedBrace,
    #[error("missing ']' in field name index")]
    UnterminatedIndex,
}
