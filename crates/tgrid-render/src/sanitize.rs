#![forbid(unsafe_code)]

//! Glyph width checks.
//!
//! The grid maps one `char` to one cell. Anything that would occupy zero or
//! two terminal columns (combining marks, control characters, CJK, emoji)
//! breaks that mapping and would shift every cell to its right, so text is
//! either rejected up front (widget placement) or replaced (log messages).

use std::borrow::Cow;

use unicode_width::UnicodeWidthChar;

/// Replacement glyph for characters that cannot occupy exactly one cell.
pub const REPLACEMENT: char = '?';

/// Whether `ch` occupies exactly one terminal column.
#[inline]
#[must_use]
pub fn is_single_width(ch: char) -> bool {
    !ch.is_control() && UnicodeWidthChar::width(ch) == Some(1)
}

/// Map `ch` to itself if it is single-width, otherwise to [`REPLACEMENT`].
#[inline]
#[must_use]
pub fn sanitize_char(ch: char) -> char {
    if is_single_width(ch) { ch } else { REPLACEMENT }
}

/// Replace every glyph that is not single-width.
///
/// Borrows when the text is already clean.
#[must_use]
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_single_width) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().map(sanitize_char).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_printables_are_single_width() {
        assert!(('!'..='~').all(is_single_width));
        assert!(is_single_width(' '));
    }

    #[test]
    fn controls_and_wide_glyphs_are_rejected() {
        assert!(!is_single_width('\t'));
        assert!(!is_single_width('\n'));
        assert!(!is_single_width('\u{1b}'));
        assert!(!is_single_width('中'));
        assert!(!is_single_width('\u{301}'));
    }

    #[test]
    fn sanitize_borrows_clean_text() {
        assert!(matches!(sanitize("Ready."), Cow::Borrowed("Ready.")));
    }

    #[test]
    fn sanitize_replaces_each_bad_glyph() {
        assert_eq!(sanitize("a\tb中c"), "a?b?c");
    }
}
