//! Format-string parser
//!
//! Hand-written scanner over the placeholder mini-grammar. The grammar is
//! small enough that a direct character walk is both the clearest and the
//! strictest implementation: every brace is accounted for, and malformed
//! nesting fails with a positioned-enough error instead of being glossed
//! over.

use std::iter::Peekable;
use std::str::Chars;

use crate::errors::FormatParseError;
use crate::formatting::{FormatPart, ParsedString, StrKind};

/// Parse a text format string into its elements.
pub fn parse_format(src: &str) -> Result<ParsedString, FormatParseError> {
    Ok(ParsedString {
        kind: StrKind::Text,
        parts: parse_parts(src)?,
    })
}

/// Parse a legacy byte format string into its elements.
///
/// Bytes lift losslessly into text through the Latin-1 mapping (byte `b`
/// becomes `char U+00b`); the `Bytes` tag makes the unparser re-encode.
pub fn parse_format_bytes(src: &[u8]) -> Result<ParsedString, FormatParseError> {
    let text: String = src.iter().map(|&b| char::from(b)).collect();
    Ok(ParsedString {
        kind: StrKind::Bytes,
        parts: parse_parts(&text)?,
    })
}

fn parse_parts(src: &str) -> Result<Vec<FormatPart>, FormatParseError> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // Doubled braces are escapes and fold into the literal run.
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(FormatParseError::SingleClosingBrace),
            '{' => {
                if !literal.is_empty() {
                    parts.push(FormatPart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(parse_field(&mut chars)?);
            }
            c => literal.push(c),
        }
    }
    if !literal.is_empty() {
        parts.push(FormatPart::Literal(literal));
    }
    Ok(parts)
}

/// Parse one replacement field; the opening `{` has already been consumed.
fn parse_field(chars: &mut Peekable<Chars<'_>>) -> Result<FormatPart, FormatParseError> {
    let mut name = String::new();
    let mut conversion = None;
    let mut spec = None;

    // Field name, up to `!`, `:` or the closing brace. `[...]` index
    // segments are opaque: `:` and `!` inside them do not terminate the
    // name.
    let mut terminator = loop {
        match chars.next() {
            None => return Err(FormatParseError::UnterminatedField),
            Some('[') => {
                name.push('[');
                loop {
                    match chars.next() {
                        None => return Err(FormatParseError::UnterminatedIndex),
                        Some(']') => {
                            name.push(']');
                            break;
                        }
                        Some(c) => name.push(c),
                    }
                }
            }
            Some('{') => return Err(FormatParseError::UnexpectedBrace),
            Some(c @ ('!' | ':' | '}')) => break c,
            Some(c) => name.push(c),
        }
    };

    if terminator == '!' {
        let mut conv = String::new();
        terminator = loop {
            match chars.next() {
                None => return Err(FormatParseError::UnterminatedField),
                Some('{') => return Err(FormatParseError::UnexpectedBrace),
                Some(c @ (':' | '}')) => break c,
                Some(c) => conv.push(c),
            }
        };
        conversion = Some(conv);
    }

    if terminator == ':' {
        // The spec segment runs to the matching close brace. Nested
        // replacement fields are captured as opaque text.
        let mut body = String::new();
        let mut depth = 0usize;
        loop {
            match chars.next() {
                None => return Err(FormatParseError::UnterminatedField),
                Some('{') => {
                    depth += 1;
                    body.push('{');
                }
                Some('}') if depth > 0 => {
                    depth -= 1;
                    body.push('}');
                }
                Some('}') => break,
                Some(c) => body.push(c),
            }
        }
        spec = Some(body);
    }

    // An empty name is an auto-numbered placeholder.
    let name = (!name.is_empty()).then_some(name);
    Ok(FormatPart::Field {
        name,
        conversion,
        spec,
    })
}
