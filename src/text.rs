//! Whitespace cleanup shared by page text, full text and language fallback.

use regex::Regex;
use std::sync::OnceLock;

/// ASCII whitespace only; non-breaking and other Unicode spaces are content.
fn whitespace_regex() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").unwrap())
}

/// Collapse every run of ASCII whitespace into a single space and trim
/// control characters and spaces from the ends.
///
/// Unicode spaces such as U+00A0 are kept. Applying it twice yields the same
/// string as applying it once.
///
/// # Example
///
/// ```
/// use unpage::text::compress_whitespace;
///
/// assert_eq!(compress_whitespace("  Hello \n\t world  "), "Hello world");
/// ```
pub fn compress_whitespace(text: &str) -> String {
    whitespace_regex()
        .replace_all(text, " ")
        .trim_matches(|c: char| c <= ' ')
        .to_string()
}

/// Like [`compress_whitespace`], but only when `enabled` is set.
pub fn compress_if(text: String, enabled: bool) -> String {
    if enabled {
        compress_whitespace(&text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_collapses_runs() {
        assert_eq!(compress_whitespace("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn test_compress_trims() {
        assert_eq!(compress_whitespace("\n  padded  \r\n"), "padded");
    }

    #[test]
    fn test_compress_is_idempotent() {
        let once = compress_whitespace(" Lorem \u{00A0} ipsum\n\n dolor ");
        assert_eq!(once, "Lorem \u{00A0} ipsum dolor");
        assert_eq!(compress_whitespace(&once), once);
    }

    #[test]
    fn test_compress_keeps_unicode_spaces() {
        assert_eq!(compress_whitespace("a\u{00A0}b"), "a\u{00A0}b");
        assert_eq!(
            compress_whitespace("a\u{00A0}\u{00A0}b\u{2003}"),
            "a\u{00A0}\u{00A0}b\u{2003}"
        );
    }

    #[test]
    fn test_compress_trims_control_characters() {
        assert_eq!(compress_whitespace("\u{0}\u{1F} text \u{7}"), "text");
        assert_eq!(compress_whitespace("\u{000B}\u{000C}a\u{000B}b"), "a b");
    }

    #[test]
    fn test_compress_whitespace_only() {
        assert_eq!(compress_whitespace(" \t\n "), "");
        assert_eq!(compress_whitespace(""), "");
    }

    #[test]
    fn test_compress_if_disabled_keeps_text() {
        let raw = "  keep \n me ".to_string();
        assert_eq!(compress_if(raw.clone(), false), raw);
        assert_eq!(compress_if(raw, true), "keep me");
    }
}
