//! Whole-text normalization primitives.
//!
//! Pure text-to-text transforms the parser applies before and during
//! tokenization: per-line preprocessing ([`replace_null_chars`], [`detab`],
//! composed as [`prepare_line`]), trimming ([`strip_ascii_spaces`],
//! [`strip_ascii_spaces_and_newlines`], [`strip_atx_suffix`]) and run
//! collapsing ([`collapse_whitespace`]).
//!
//! Every function is total: defined for the empty string and any codepoint
//! content, never panicking, never returning an error. Functions returning
//! `&str` always hand back a subslice of the input; functions returning
//! [`Cow`] borrow when the input needs no rewriting.

use std::borrow::Cow;

use crate::classify::{REPLACEMENT_CHAR, is_whitespace};

/// Column width of a tab stop. Shared with the block scanner's indentation
/// arithmetic.
pub const TAB_STOP: usize = 4;

/// Strips leading and trailing ASCII spaces (U+0020) only.
///
/// Tabs and line endings at either end are left in place; this is narrower
/// than `str::trim`. Idempotent.
pub fn strip_ascii_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Strips leading and trailing characters that are ASCII space or LF.
///
/// CR and tab are deliberately not part of this trim set, narrower than the
/// whitespace class the block grammar uses: a trailing `"\r\n"` loses only
/// its `'\n'`. Idempotent.
pub fn strip_ascii_spaces_and_newlines(s: &str) -> &str {
    s.trim_matches([' ', '\n'])
}

/// Collapses every maximal run of grammar whitespace to a single space and
/// drops leading and trailing whitespace.
///
/// Equivalent to splitting on the [`is_whitespace`] class, discarding empty
/// tokens and joining with one space. Unicode space separators are not part
/// of that class and survive untouched. Idempotent; `""` maps to `""`.
pub fn collapse_whitespace(s: &str) -> String {
    s.split(is_whitespace)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes a trailing ATX heading closing sequence (`#`+), if present in
/// the form the grammar requires.
///
/// The closing hashes must be separated from the heading content by at
/// least one space; exactly one separating space is consumed along with
/// them, so `"# Foo  ###"` becomes `"# Foo "`. Without the separating
/// space (`"# Foo###"`) the input is returned unchanged.
pub fn strip_atx_suffix(s: &str) -> &str {
    let no_spaces = s.trim_end_matches(' ');
    let no_hashes = no_spaces.trim_end_matches('#');
    if no_hashes.is_empty() || !no_hashes.ends_with(' ') {
        return s;
    }
    &no_hashes[..no_hashes.len() - 1]
}

/// Expands tabs to spaces against 4-column tab stops.
///
/// A tab always advances at least one column: at a tab stop boundary it
/// emits a full [`TAB_STOP`] worth of spaces. Columns count codepoints, not
/// bytes. Returns the input borrowed when it contains no tab.
///
/// Operates on a single line. Line endings in the input are treated as
/// ordinary one-column characters and do not reset the column counter, so
/// callers must split on line boundaries first.
pub fn detab(s: &str) -> Cow<'_, str> {
    if !s.contains('\t') {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + TAB_STOP);
    let mut column = 0usize;
    for c in s.chars() {
        if c == '\t' {
            let pad = TAB_STOP - (column % TAB_STOP);
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    Cow::Owned(out)
}

/// Replaces every NUL (U+0000) with [`REPLACEMENT_CHAR`].
///
/// All other characters pass through unchanged; NUL-free input is returned
/// borrowed.
pub fn replace_null_chars(s: &str) -> Cow<'_, str> {
    if !s.contains('\0') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| if c == '\0' { REPLACEMENT_CHAR } else { c })
            .collect(),
    )
}

/// Per-line preprocessing applied before block scanning: NUL substitution
/// followed by tab expansion.
///
/// Inherits [`detab`]'s single-line contract. Lines needing neither rewrite
/// are returned borrowed.
pub fn prepare_line(s: &str) -> Cow<'_, str> {
    match replace_null_chars(s) {
        Cow::Borrowed(b) => detab(b),
        Cow::Owned(o) if o.contains('\t') => Cow::Owned(detab(&o).into_owned()),
        Cow::Owned(o) => Cow::Owned(o),
    }
}
