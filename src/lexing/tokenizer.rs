//! Tokenizer
//!
//! Drives the primitive scanner and produces the lossless token stream.
//! Every byte of the input ends up in exactly one token's text: primitive
//! tokens keep their slices, and the byte spans the scanner skipped are
//! synthesized back as explicit whitespace tokens. Positions are computed
//! from a line-start table in UTF-8 bytes from the start, so the round-trip
//! contract and the reported offsets agree by construction.

use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::LexError;
use crate::lexing::scanner::RawToken;
use crate::tokens::{Token, TokenKind};

/// String literal prefixes the scanner reports as a separate NAME token.
static STRING_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:b|r|u|f|br|rb|fr|rf)$").unwrap());

/// Tokenize source text into a lossless ordered token sequence.
///
/// Concatenating `text` over the result reproduces `source` exactly.
/// Synthesized gap tokens are `INDENT` (with a real position) when the gap
/// starts at column 0 of a line, otherwise `UNIMPORTANT_WS` with no
/// position. The sequence always ends with an empty `ENDMARKER` positioned
/// at end of input.
///
/// Fails with [`LexError`] when the scanner cannot lex the input; the error
/// is positioned at the offending byte and is never caught internally.
pub fn tokenize_src(source: &str) -> Result<Vec<Token>, LexError> {
    let line_starts = line_starts(source);
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = RawToken::lexer(source);
    let mut prev_end = 0usize;

    while let Some(item) = lexer.next() {
        let span = lexer.span();
        let raw = match item {
            Ok(raw) => raw,
            Err(kind) => {
                let (line, utf8_byte_offset) = locate(&line_starts, span.start);
                return Err(LexError {
                    kind,
                    line,
                    utf8_byte_offset,
                });
            }
        };

        let mut gap_before = false;
        if span.start > prev_end {
            push_gap(&mut tokens, &line_starts, prev_end, &source[prev_end..span.start]);
            gap_before = true;
        }

        let kind = token_kind(raw);
        let text = &source[span.clone()];

        // The scanner reports a string prefix (`b`, `r'`, `rb"`, ...) as a
        // NAME immediately preceding the quote; fold the two into a single
        // STRING token keeping the prefix's position.
        if kind == TokenKind::String && !gap_before {
            if let Some(prev) = tokens.last_mut() {
                if prev.kind == TokenKind::Name && STRING_PREFIX_RE.is_match(&prev.text) {
                    prev.kind = TokenKind::String;
                    prev.text.push_str(text);
                    prev_end = span.end;
                    continue;
                }
            }
        }

        let (line, utf8_byte_offset) = locate(&line_starts, span.start);
        tokens.push(Token::positioned(kind, text, line, utf8_byte_offset));
        prev_end = span.end;
    }

    if prev_end < source.len() {
        push_gap(&mut tokens, &line_starts, prev_end, &source[prev_end..]);
    }

    let (line, utf8_byte_offset) = locate(&line_starts, source.len());
    tokens.push(Token::positioned(TokenKind::EndMarker, "", line, utf8_byte_offset));
    Ok(tokens)
}

fn token_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Name => TokenKind::Name,
        RawToken::Number => TokenKind::Number,
        RawToken::Str => TokenKind::String,
        RawToken::Op => TokenKind::Op,
        RawToken::Newline => TokenKind::Newline,
        RawToken::Comment => TokenKind::Comment,
    }
}

fn push_gap(tokens: &mut Vec<Token>, line_starts: &[usize], start: usize, text: &str) {
    let (line, utf8_byte_offset) = locate(line_starts, start);
    if utf8_byte_offset == 0 {
        tokens.push(Token::positioned(TokenKind::Indent, text, line, 0));
    } else {
        tokens.push(Token::synthetic(TokenKind::UnimportantWs, text));
    }
}

/// Byte offsets at which each line begins.
fn line_starts(source: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(
        source
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'\n')
            .map(|(i, _)| i + 1),
    );
    starts
}

/// (1-based line, 0-based byte offset within that line) for a byte position.
fn locate(line_starts: &[usize], pos: usize) -> (usize, usize) {
    let line = line_starts.partition_point(|&start| start <= pos);
    (line, pos - line_starts[line - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LexErrorKind;
    use crate::lexing::untokenize_tokens;

    #[test]
    fn test_empty_source() {
        let tokens = tokenize_src("").unwrap();
        assert_eq!(tokens, vec![Token::positioned(TokenKind::EndMarker, "", 1, 0)]);
    }

    #[test]
    fn test_gap_between_tokens_is_synthesized() {
        let tokens = tokenize_src("a  b").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::positioned(TokenKind::Name, "a", 1, 0),
                Token::synthetic(TokenKind::UnimportantWs, "  "),
                Token::positioned(TokenKind::Name, "b", 1, 3),
                Token::positioned(TokenKind::EndMarker, "", 1, 4),
            ]
        );
    }

    #[test]
    fn test_leading_whitespace_is_indent() {
        let tokens = tokenize_src("    x\n").unwrap();
        assert_eq!(tokens[0], Token::positioned(TokenKind::Indent, "    ", 1, 0));
        assert_eq!(tokens[1], Token::positioned(TokenKind::Name, "x", 1, 4));
    }

    #[test]
    fn test_offsets_are_utf8_bytes() {
        // The snowman is three bytes; the token after it must account for
        // every one of them.
        let source = "x = '\u{2603}'\ny = 1\n";
        let tokens = tokenize_src(source).unwrap();
        let string = tokens.iter().find(|t| t.kind == TokenKind::String).unwrap();
        assert_eq!(string.text, "'\u{2603}'");
        assert_eq!(string.utf8_byte_offset, Some(4));
        let y = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Name && t.text == "y")
            .unwrap();
        assert_eq!((y.line, y.utf8_byte_offset), (Some(2), Some(0)));
        assert_eq!(untokenize_tokens(&tokens), source);
    }

    #[test]
    fn test_multiline_string_offsets_resume() {
        let source = "s = '''a\nb''' + t\n";
        let tokens = tokenize_src(source).unwrap();
        let string = tokens.iter().find(|t| t.kind == TokenKind::String).unwrap();
        assert_eq!(string.text, "'''a\nb'''");
        assert_eq!((string.line, string.utf8_byte_offset), (Some(1), Some(4)));
        let t = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Name && t.text == "t")
            .unwrap();
        assert_eq!((t.line, t.utf8_byte_offset), (Some(2), Some(7)));
        assert_eq!(untokenize_tokens(&tokens), source);
    }

    #[test]
    fn test_string_prefix_is_folded_into_string_token() {
        let tokens = tokenize_src("b'x' + rb'y'").unwrap();
        let strings: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::String)
            .collect();
        assert_eq!(strings.len(), 2);
        assert_eq!(strings[0].text, "b'x'");
        assert_eq!((strings[0].line, strings[0].utf8_byte_offset), (Some(1), Some(0)));
        assert_eq!(strings[1].text, "rb'y'");
    }

    #[test]
    fn test_name_touching_string_is_not_merged() {
        // Only recognized prefixes fold into the literal.
        let tokens = tokenize_src("print'x'").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Name);
        assert_eq!(tokens[1].kind, TokenKind::String);
    }

    #[test]
    fn test_unterminated_string_error_position() {
        let err = tokenize_src("x = 'oops\n").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!((err.line, err.utf8_byte_offset), (1, 4));
    }

    #[test]
    fn test_unexpected_character_error() {
        let err = tokenize_src("x = $\n").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter);
        assert_eq!((err.line, err.utf8_byte_offset), (1, 4));
    }

    #[test]
    fn test_trailing_whitespace_is_kept() {
        let tokens = tokenize_src("x  ").unwrap();
        assert_eq!(untokenize_tokens(&tokens), "x  ");
        assert_eq!(tokens[1], Token::synthetic(TokenKind::UnimportantWs, "  "));
    }
}
