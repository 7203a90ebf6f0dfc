//! Primitive scanner
//!
//! The raw logos lexer over Python-style source text. This is the layer the
//! tokenizer drives; nothing else should call it directly.
//!
//! Horizontal whitespace and backslash-newline continuations are skips, not
//! tokens. The tokenizer recovers them from the byte gaps between spans.
//! String literals are matched with callbacks rather than regexes because a
//! literal runs to its closing quote honoring backslash escapes, and a
//! triple-quoted literal may span lines; both are simpler and stricter as a
//! hand scan over the remainder.

use logos::{Lexer, Logos};

use crate::errors::LexErrorKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\f]+")]
#[logos(skip r"\\\r?\n")]
pub enum RawToken {
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Name,

    #[regex(r"0[xXoObB][0-9a-fA-F_]+")]
    #[regex(r"[0-9][0-9_]*\.?[0-9_]*([eE][+-]?[0-9][0-9_]*)?[jJ]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?[jJ]?")]
    Number,

    // Triple-quote openers are longer fixed tokens, so logos prefers them
    // over the single-quote openers at the same position.
    #[token("'''", scan_triple)]
    #[token("\"\"\"", scan_triple)]
    #[token("'", scan_single)]
    #[token("\"", scan_single)]
    Str,

    #[regex(r"[-+*/%@&|^=<>!]=|\*\*=?|//=?|<<=?|>>=?|->|:=|\.\.\.|[-+*/%@&|^~=<>,:;.()\[\]{}]")]
    Op,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"#[^\n]*")]
    Comment,
}

/// Consume up to and including the closing quote of a single-quoted literal.
///
/// A backslash escapes the next character (including a newline); an
/// unescaped newline or end of input before the closing quote is an
/// unterminated literal.
fn scan_single(lex: &mut Lexer<'_, RawToken>) -> Result<(), LexErrorKind> {
    let quote = lex.slice().as_bytes()[0];
    let rest = lex.remainder().as_bytes();
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            b'\\' => i += 2,
            b'\n' => break,
            b if b == quote => {
                lex.bump(i + 1);
                return Ok(());
            }
            _ => i += 1,
        }
    }
    Err(LexErrorKind::UnterminatedString)
}

/// Consume up to and including the closing delimiter of a triple-quoted
/// literal. Embedded newlines are part of the token.
fn scan_triple(lex: &mut Lexer<'_, RawToken>) -> Result<(), LexErrorKind> {
    let quote = lex.slice().as_bytes()[0];
    let rest = lex.remainder().as_bytes();
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            b'\\' => i += 2,
            b if b == quote && rest.len() >= i + 3 && rest[i + 1] == quote && rest[i + 2] == quote => {
                lex.bump(i + 3);
                return Ok(());
            }
            _ => i += 1,
        }
    }
    Err(LexErrorKind::UnterminatedString)
}
