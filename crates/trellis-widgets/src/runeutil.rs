//! Unicode text utilities for TUI rendering.
//!
//! Display-width math is delegated to the `unicode-width` crate so wide
//! (CJK, fullwidth) characters line up correctly in terminal cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Sanitize a string by removing non-printable characters.
///
/// Keeps printable characters and spaces; removes control characters, which
/// would otherwise corrupt single-line row rendering.
pub fn sanitize(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncate a string to fit within `max_width` terminal cells.
///
/// Strings that already fit are returned unchanged; otherwise the result is
/// cut at a character boundary and suffixed with `…`, never exceeding
/// `max_width` cells.
pub fn truncate(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_control_chars() {
        assert_eq!(sanitize("a\x07b\tc\nd"), "abcd");
        assert_eq!(sanitize("plain label"), "plain label");
    }

    #[test]
    fn width_counts_wide_chars_as_two() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn truncate_leaves_fitting_strings_alone() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn truncate_adds_ellipsis_within_budget() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        assert!(display_width(&truncate("abcdefgh", 5)) <= 5);
    }

    #[test]
    fn truncate_respects_wide_chars() {
        let t = truncate("日本語テキスト", 5);
        assert!(display_width(&t) <= 5);
        assert!(t.ends_with('…'));
    }

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate("anything", 0), "");
    }
}
