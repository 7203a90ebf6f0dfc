//! Rewrite rules
//!
//! Rules consume the lossless token stream, identify a pattern, and edit the
//! matched subrange, leaving every non-matched token untouched. Because the
//! stream satisfies the round-trip invariant, untokenizing the edited stream
//! yields the original text everywhere outside the rewritten spans.
//!
//! Every rule shares one policy: when the token scan cannot unambiguously
//! attribute the syntax it is about to remove, it silently declines the
//! rewrite. Leaving source unchanged is always correct; a wrong rewrite
//! never is.

pub mod sets;

pub use sets::fix_sets;
