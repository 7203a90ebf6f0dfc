//! Format-string unparser
//!
//! Reconstructs source text from parsed elements. Literal runs are emitted
//! with braces re-escaped; fields are emitted as
//! `{name}`, `{name!conv}`, `{name:spec}` or `{name!conv:spec}`. A field
//! whose conversion or spec is present but empty is unparsed as if the
//! segment were absent; this is the engine's one documented divergence from
//! strict round-tripping.

use crate::formatting::{FormatPart, ParsedString, StrKind, UnparsedString};

/// Reconstruct a format string from parsed elements, in the same subtype
/// (text or bytes) the elements were parsed from.
pub fn unparse_parsed_string(parsed: &ParsedString) -> UnparsedString {
    let mut out = String::new();
    for part in &parsed.parts {
        match part {
            FormatPart::Literal(text) => {
                for c in text.chars() {
                    match c {
                        '{' => out.push_str("{{"),
                        '}' => out.push_str("}}"),
                        c => out.push(c),
                    }
                }
            }
            FormatPart::Field {
                name,
                conversion,
                spec,
            } => {
                out.push('{');
                if let Some(name) = name {
                    out.push_str(name);
                }
                // Empty markers are dropped: `{0!r:}` unparses as `{0!r}`.
                if let Some(conversion) = conversion.as_deref().filter(|c| !c.is_empty()) {
                    out.push('!');
                    out.push_str(conversion);
                }
                if let Some(spec) = spec.as_deref().filter(|s| !s.is_empty()) {
                    out.push(':');
                    out.push_str(spec);
                }
                out.push('}');
            }
        }
    }
    match parsed.kind {
        StrKind::Text => UnparsedString::Text(out),
        // Parts came through the Latin-1 lift, so every char fits one byte.
        StrKind::Bytes => UnparsedString::Bytes(out.chars().map(|c| c as u8).collect()),
    }
}
