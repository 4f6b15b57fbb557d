//! Single-codepoint character classes drawn from the CommonMark spec.
//!
//! Every predicate here is total and position-independent: it looks at one
//! `char` and nothing else. The parser calls these on its hottest path, so
//! all of them compile down to range matches or static category table
//! lookups with no allocation.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// U+FFFD, substituted for characters the spec forbids (currently NUL).
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Returns true for the two line-ending characters, LF and CR.
pub fn is_end_of_line(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Returns true for the ASCII whitespace class used by the block grammar:
/// space, tab, LF, vertical tab, form feed, CR.
///
/// Note this is not `char::is_ascii_whitespace`, which excludes vertical
/// tab.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r')
}

/// Returns true for Unicode whitespace as the inline grammar defines it:
/// the `Zs` (space separator) general category, or tab, CR, LF, form feed.
///
/// Broader than [`is_whitespace`] for `Zs` codepoints like U+00A0, but it
/// does not include vertical tab, which is `Cc` rather than `Zs`. The two
/// classes are defined independently by the spec and only overlap.
pub fn is_unicode_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\r' | '\n' | '\u{000C}')
        || c.general_category() == GeneralCategory::SpaceSeparator
}

/// Negation of [`is_whitespace`].
pub fn is_non_space(c: char) -> bool {
    !is_whitespace(c)
}

/// Returns true for exactly the 32 ASCII punctuation characters:
/// ``! " # $ % & ' ( ) * + , - . / : ; < = > ? @ [ \ ] ^ _ ` { | } ~``.
///
/// These are the four ASCII ranges U+0021..=U+002F, U+003A..=U+0040,
/// U+005B..=U+0060 and U+007B..=U+007E, which is what the std method
/// matches.
pub fn is_ascii_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Returns true for punctuation as the inline flanking rules define it: any
/// codepoint in the Unicode punctuation categories (Pc, Pd, Pe, Pf, Pi, Po,
/// Ps), plus a fixed ASCII supplement.
///
/// The supplement exists because nine of the ASCII punctuation characters
/// (``$ + < = > ^ ` | ~``) are classified as symbols (`S*`) by Unicode,
/// not punctuation, yet the grammar treats all 32 ASCII punctuation
/// characters uniformly.
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
        || c.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// Returns true for ASCII letters, `a..=z` and `A..=Z`.
pub fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}
