//! Format-string parse/unparse round trips
//!
//! Mirrors the engine contract: parsing then unparsing is byte-identical
//! for any format string without empty conversion/spec markers, in the same
//! string subtype; the empty markers themselves are the one intentional
//! normalization.

use rstest::rstest;

use recast::{
    parse_format, parse_format_bytes, unparse_parsed_string, FormatParseError, StrKind,
    UnparsedString,
};

#[rstest]
#[case("")]
#[case("foo")]
#[case("{}")]
#[case("{0}")]
#[case("{named}")]
#[case("{!r}")]
#[case("{:>5}")]
#[case("{{")]
#[case("}}")]
#[case("{0!s:15}")]
fn test_roundtrip_text(#[case] s: &str) {
    let ret = unparse_parsed_string(&parse_format(s).unwrap());
    assert_eq!(ret, UnparsedString::Text(s.to_string()));
}

#[rstest]
#[case(b"")]
#[case(b"foo")]
#[case(b"{}")]
#[case(b"{0}")]
#[case(b"{named}")]
#[case(b"{!r}")]
#[case(b"{:>5}")]
#[case(b"{{")]
#[case(b"}}")]
#[case(b"{0!s:15}")]
fn test_roundtrip_bytes(#[case] s: &[u8]) {
    let parsed = parse_format_bytes(s).unwrap();
    assert_eq!(parsed.kind, StrKind::Bytes);
    let ret = unparse_parsed_string(&parsed);
    assert_eq!(ret, UnparsedString::Bytes(s.to_vec()));
}

#[rstest]
#[case("{:}", "{}")]
#[case("{0:}", "{0}")]
#[case("{0!r:}", "{0!r}")]
fn test_intentionally_not_round_trip(#[case] s: &str, #[case] expected: &str) {
    // Unparsing simplifies empty conversion/spec markers by design.
    let ret = unparse_parsed_string(&parse_format(s).unwrap());
    assert_eq!(ret, UnparsedString::Text(expected.to_string()));
}

#[test]
fn test_nested_spec_round_trips_as_opaque_text() {
    let s = "{0:{width}.{precision}}";
    let ret = unparse_parsed_string(&parse_format(s).unwrap());
    assert_eq!(ret, UnparsedString::Text(s.to_string()));
}

#[test]
fn test_non_ascii_bytes_survive() {
    let s = b"caf\xc3\xa9 {0} \xff";
    let ret = unparse_parsed_string(&parse_format_bytes(s).unwrap());
    assert_eq!(ret, UnparsedString::Bytes(s.to_vec()));
}

#[rstest]
#[case("{")]
#[case("{0")]
#[case("{0:{incomplete")]
fn test_unterminated_fields_fail(#[case] s: &str) {
    assert_eq!(
        parse_format(s).unwrap_err(),
        FormatParseError::UnterminatedField
    );
}

#[test]
fn test_single_close_brace_fails() {
    assert_eq!(
        parse_format("}").unwrap_err(),
        FormatParseError::SingleClosingBrace
    );
    assert_eq!(
        parse_format("a}b").unwrap_err(),
        FormatParseError::SingleClosingBrace
    );
}
