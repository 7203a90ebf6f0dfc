//! Set-literal rewrite rule
//!
//! Rewrites `set(...)` calls over tuple/list displays and generator
//! expressions into set displays:
//!
//! ```text
//! set((1, 2))        -> {1, 2}
//! set([x for x in y]) -> {x for x in y}
//! set(())            -> set()      (never {}, which is an empty dict)
//! ```
//!
//! A structural parse alone cannot drive this rewrite: the parse of a call
//! does not record which parenthesis tokens were redundant grouping, so
//! `set((1, 2))` and `set(((1, 2)))` look alike while their token streams do
//! not. The rule therefore works in two passes over the stream: pass one
//! finds candidate call boundaries, pass two re-scans the raw tokens inside
//! each boundary to attribute every bracket before committing. Anything it
//! cannot attribute is left byte-identical.

use tracing::{debug, trace};

use crate::errors::LexError;
use crate::lexing::{tokenize_src, untokenize_tokens};
use crate::tokens::{Token, TokenKind};

/// Rewrite `set(...)` literal calls in `source`, returning the rewritten
/// text. Everything outside the rewritten spans is preserved byte-for-byte;
/// a source with no matches comes back unchanged. `filename` is used for
/// diagnostics only.
///
/// Fails with [`LexError`] when the source cannot be tokenized; nothing is
/// partially rewritten in that case.
pub fn fix_sets(source: &str, filename: &str) -> Result<String, LexError> {
    let mut tokens = tokenize_src(source)?;
    let starts = find_set_call_starts(&tokens);
    if starts.is_empty() {
        return Ok(source.to_owned());
    }
    debug!(file = filename, candidates = starts.len(), "rewriting set() calls");
    // Right-to-left, so edits inside one call cannot shift the recorded
    // start of an enclosing call, and nested calls reach a fixed point in a
    // single pass: inner rewrites land before the outer call is classified.
    for &start in starts.iter().rev() {
        rewrite_set_call(&mut tokens, start);
    }
    Ok(untokenize_tokens(&tokens))
}

/// How a matched call's argument region is shaped, after bracket
/// attribution. Wrapper pairs are token indices of brackets that belong to
/// the rewrite (display brackets and redundant grouping parens), not to the
/// elements.
enum ArgShape {
    /// `set(())`, `set([])`, `set(( ))` and the like.
    EmptyDisplay,
    /// A tuple or list display; `inner` is the element region used for
    /// trailing-comma handling.
    Display {
        wrappers: Vec<(usize, usize)>,
        inner: (usize, usize),
    },
    /// A generator expression or comprehension body.
    Generator { wrappers: Vec<(usize, usize)> },
}

/// Pass one: candidate call starts. A candidate is a NAME `set` whose `(`
/// touches it (so `set (...)` never matches) and which is not an attribute
/// or a definition name.
fn find_set_call_starts(tokens: &[Token]) -> Vec<usize> {
    let mut starts = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Name || token.text != "set" {
            continue;
        }
        let Some(next) = tokens.get(i + 1) else {
            continue;
        };
        if !next.is_op("(") {
            continue;
        }
        // `obj.set(...)`, `def set(...)` and `class set(...)` are not calls
        // to the builtin.
        if let Some(prev) = tokens[..i].iter().rev().find(|t| !t.is_insignificant()) {
            if prev.is_op(".")
                || (prev.kind == TokenKind::Name && (prev.text == "def" || prev.text == "class"))
            {
                continue;
            }
        }
        starts.push(i);
    }
    starts
}

/// Pass two, per candidate: recompute boundaries on the current stream,
/// attribute brackets, and rewrite if the shape is unambiguous.
fn rewrite_set_call(tokens: &mut Vec<Token>, start: usize) {
    let open = start + 1;
    let Some(close) = matching_close(tokens, open) else {
        return;
    };
    match classify_argument(tokens, open, close) {
        Some(ArgShape::EmptyDisplay) => rewrite_empty_literal(tokens, open, close),
        Some(ArgShape::Display { wrappers, inner }) => {
            rewrite_literal(tokens, start, open, close, wrappers, Some(inner));
        }
        Some(ArgShape::Generator { wrappers }) => {
            rewrite_literal(tokens, start, open, close, wrappers, None);
        }
        None => trace!(index = start, "declining set() call with unattributable argument"),
    }
}

/// Attribute the brackets of the argument region `open+1 .. close`.
///
/// Grouping parens that span the whole remaining region peel off
/// repeatedly; a bracket pair peels once and confirms a display (its inner
/// parens belong to elements, so peeling stops). The innermost region then
/// decides the shape. Returns `None` whenever the region is not provably a
/// display or generator argument.
fn classify_argument(tokens: &[Token], open: usize, close: usize) -> Option<ArgShape> {
    let mut lo = open + 1;
    let mut hi = close;
    let mut wrappers: Vec<(usize, usize)> = Vec::new();
    let mut bracket_display = false;

    loop {
        let sig = significant_indices(tokens, lo, hi);
        let (Some(&first), Some(&last)) = (sig.first(), sig.last()) else {
            // Nothing left inside: an empty display if its brackets were
            // peeled, otherwise a bare `set()` call, which is not a match.
            return (!wrappers.is_empty()).then_some(ArgShape::EmptyDisplay);
        };

        let opens_region = tokens[first].is_op("(") || tokens[first].is_op("[");
        if !bracket_display && opens_region && matching_close(tokens, first) == Some(last) {
            bracket_display = tokens[first].is_op("[");
            wrappers.push((first, last));
            lo = first + 1;
            hi = last;
            continue;
        }

        return if has_top_level(tokens, lo, hi, |t| {
            t.kind == TokenKind::Name && t.text == "for"
        }) {
            Some(ArgShape::Generator { wrappers })
        } else if bracket_display
            || (!wrappers.is_empty() && has_top_level(tokens, lo, hi, |t| t.is_op(",")))
        {
            Some(ArgShape::Display {
                wrappers,
                inner: (lo, hi),
            })
        } else {
            // A single parenthesized expression (`set((x))`), multiple call
            // arguments, or anything else we cannot attribute.
            None
        };
    }
}

/// `set(())` and friends become `set()` by deleting everything between the
/// call parens. Declined when the region spans lines, since removing it
/// could produce broken source.
fn rewrite_empty_literal(tokens: &mut Vec<Token>, open: usize, close: usize) {
    if tokens[open + 1..close].iter().any(|t| t.text.contains('\n')) {
        trace!("declining multiline empty set literal");
        return;
    }
    tokens.drain(open + 1..close);
}

/// Replace `set(` with `{`, the call's close paren with `}`, and drop the
/// attributed wrapper brackets. For displays, a single trailing comma (and
/// the gap after it) is dropped when no newline separates it from the
/// close.
fn rewrite_literal(
    tokens: &mut Vec<Token>,
    start: usize,
    open: usize,
    close: usize,
    wrappers: Vec<(usize, usize)>,
    inner: Option<(usize, usize)>,
) {
    let mut removals: Vec<usize> = wrappers.iter().flat_map(|&(a, b)| [a, b]).collect();

    if let Some((in_lo, in_hi)) = inner {
        let sig = significant_indices(tokens, in_lo, in_hi);
        if let Some(&last) = sig.last() {
            if tokens[last].is_op(",")
                && !tokens[last + 1..in_hi].iter().any(|t| t.text.contains('\n'))
            {
                removals.extend(last..in_hi);
            }
        }
    }

    tokens[close] = Token::op("}");
    removals.sort_unstable();
    removals.dedup();
    for index in removals.into_iter().rev() {
        tokens.remove(index);
    }
    tokens[start] = Token::op("{");
    tokens.remove(open);
}

/// Index of the close bracket matching the open bracket at `open`.
fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        if token.kind != TokenKind::Op {
            continue;
        }
        match token.text.as_str() {
            "(" | "[" | "{" => depth += 1,
            ")" | "]" | "}" => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn significant_indices(tokens: &[Token], lo: usize, hi: usize) -> Vec<usize> {
    (lo..hi).filter(|&i| !tokens[i].is_insignificant()).collect()
}

/// True when a token at bracket depth zero of `lo..hi` satisfies `pred`.
fn has_top_level(
    tokens: &[Token],
    lo: usize,
    hi: usize,
    pred: impl Fn(&Token) -> bool,
) -> bool {
    let mut depth = 0usize;
    for token in &tokens[lo..hi] {
        if token.kind == TokenKind::Op {
            match token.text.as_str() {
                "(" | "[" | "{" => {
                    depth += 1;
                    continue;
                }
                ")" | "]" | "}" => {
                    depth = depth.saturating_sub(1);
                    continue;
                }
                _ => {}
            }
        }
        if depth == 0 && pred(token) {
            return true;
        }
    }
    false
}
