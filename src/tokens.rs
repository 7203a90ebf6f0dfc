//! Token model
//!
//! The unit of both tokenization output and untokenization input. A token
//! pairs a lexical category with the exact source substring it covers, so a
//! token sequence is a lossless view of the source: concatenating `text`
//! over a sequence reproduces the original input byte-for-byte.

use std::fmt;

use serde::Serialize;

/// Lexical categories, a closed vocabulary.
///
/// The primitive scanner's native categories are mapped onto this set at the
/// tokenizer boundary; `UnimportantWs` and `Indent` are synthesized from the
/// gaps the scanner does not tokenize itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Name,
    Op,
    Number,
    String,
    Newline,
    Comment,
    Indent,
    UnimportantWs,
    #[serde(rename = "ENDMARKER")]
    EndMarker,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Name => "NAME",
            TokenKind::Op => "OP",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Indent => "INDENT",
            TokenKind::UnimportantWs => "UNIMPORTANT_WS",
            TokenKind::EndMarker => "ENDMARKER",
        };
        f.write_str(name)
    }
}

/// One lexical unit plus its exact source position.
///
/// `line` is 1-based, `utf8_byte_offset` is the 0-based byte offset within
/// that line. Both are `None` for synthesized whitespace tokens, which fill
/// inter-token gaps and carry no independent position. Equality is
/// structural, which is what the round-trip tests assert against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: Option<usize>,
    pub utf8_byte_offset: Option<usize>,
}

impl Token {
    /// A token with a known source position.
    pub fn positioned(
        kind: TokenKind,
        text: impl Into<String>,
        line: usize,
        utf8_byte_offset: usize,
    ) -> Self {
        Token {
            kind,
            text: text.into(),
            line: Some(line),
            utf8_byte_offset: Some(utf8_byte_offset),
        }
    }

    /// A synthesized token with no position of its own.
    pub fn synthetic(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
            line: None,
            utf8_byte_offset: None,
        }
    }

    /// Shorthand for a positionless operator token, used by rewrite rules
    /// when splicing replacement punctuation into a stream.
    pub fn op(text: impl Into<String>) -> Self {
        Token::synthetic(TokenKind::Op, text)
    }

    /// True for tokens that carry no syntactic weight (whitespace, comments,
    /// newlines, the end marker). Rewrite rules skip these when matching.
    pub fn is_insignificant(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::UnimportantWs
                | TokenKind::Indent
                | TokenKind::Newline
                | TokenKind::Comment
                | TokenKind::EndMarker
        )
    }

    /// True when this token is the given operator text.
    pub fn is_op(&self, text: &str) -> bool {
        self.kind == TokenKind::Op && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct OptUsize(Option<usize>);
        impl fmt::Display for OptUsize {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    Some(n) => write!(f, "{}", n),
                    None => f.write_str("None"),
                }
            }
        }
        write!(
            f,
            "Token({}, {:?}, line={}, utf8_byte_offset={})",
            self.kind,
            self.text,
            OptUsize(self.line),
            OptUsize(self.utf8_byte_offset),
        )
    }
}
