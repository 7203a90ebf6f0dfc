//! Lossless tokenization
//!
//! This area turns source text into a token stream and back, with the
//! defining property that untokenizing exactly the tokens produced from a
//! text reproduces that text byte-for-byte.
//!
//! The pipeline has two layers:
//!
//! 1. The primitive scanner ([`scanner`]) is a plain logos lexer. Like most
//!    native lexers it does not emit tokens for horizontal whitespace or
//!    backslash-newline continuations; those are configured as skips.
//! 2. The tokenizer ([`tokenizer`]) drives the scanner, recovers every
//!    skipped byte span from the gaps between primitive token spans, and
//!    synthesizes explicit whitespace tokens for them. It also attaches
//!    line / byte-offset positions and appends the end marker.
//!
//! Keeping the scanner vanilla and recovering whitespace from spans in a
//! separate step isolates all position bookkeeping in one place, and means
//! the round-trip invariant holds by construction: every byte of the input
//! is covered by exactly one token's text.

pub mod scanner;
pub mod tokenizer;
pub mod untokenizer;

pub use tokenizer::tokenize_src;
pub use untokenizer::untokenize_tokens;
