//! Excerpt truncation.

/// Maximum length of a commentary excerpt, in characters.
pub const EXCERPT_MAX_CHARS: usize = 500;

/// Returns the first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values rather than bytes, so the cut never lands
/// inside a multi-byte character. The cut is not moved to a word boundary.
///
/// # Examples
///
/// ```rust
/// use ihya_commentary::truncate_chars;
/// assert_eq!(truncate_chars("بسم الله", 3), "بسم");
/// assert_eq!(truncate_chars("short", 500), "short");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &text[..byte_offset],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_truncation_needed() {
        assert_eq!(truncate_chars("Hello", 100), "Hello");
    }

    #[test]
    fn exact_length_is_untouched() {
        let text = "ب".repeat(EXCERPT_MAX_CHARS);
        assert_eq!(truncate_chars(&text, EXCERPT_MAX_CHARS), text);
    }

    #[test]
    fn long_text_keeps_exactly_the_prefix() {
        let text = "ع".repeat(EXCERPT_MAX_CHARS + 20);
        let result = truncate_chars(&text, EXCERPT_MAX_CHARS);
        assert_eq!(result.chars().count(), EXCERPT_MAX_CHARS);
        assert!(text.starts_with(result));
    }

    #[test]
    fn cuts_mid_word() {
        assert_eq!(truncate_chars("knowledge is light", 5), "knowl");
    }

    #[test]
    fn mixed_width_characters() {
        // 2-byte, 1-byte and 4-byte characters.
        let text = "اa𝄞b";
        assert_eq!(truncate_chars(text, 3), "اa𝄞");
    }

    #[test]
    fn empty_and_zero() {
        assert_eq!(truncate_chars("", 10), "");
        assert_eq!(truncate_chars("text", 0), "");
    }
}
