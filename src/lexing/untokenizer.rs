//! Untokenizer
//!
//! The exact inverse of tokenization: concatenating token texts in sequence
//! order. No validation beyond the fields existing; any token whose text is
//! a string (including empty) is valid, so this is total.

use crate::tokens::Token;

/// Reassemble source text from a token sequence.
///
/// For any `t` the tokenizer accepts,
/// `untokenize_tokens(&tokenize_src(t)?) == t`.
pub fn untokenize_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}
