//! Morphological segment concatenation.

/// Maximum number of segments a corpus word is split into.
pub const MAX_SEGMENTS: usize = 5;

/// Joins the ordered segments of a word into a single string.
///
/// Missing and empty segments contribute nothing; no separator is inserted.
///
/// # Examples
///
/// ```rust
/// use ihya_quran::concat_segments;
/// let segments = [Some("ا"), Some("ل"), Some(""), None, None];
/// assert_eq!(concat_segments(segments), "ال");
/// ```
pub fn concat_segments<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    segments.into_iter().flatten().fold(String::new(), |mut word, segment| {
        word.push_str(segment.as_ref());
        word
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case([Some("ا"), Some("ل"), Some(""), Some(""), Some("")], "ال")]
    #[case([Some("بِ"), Some("سْمِ"), None, None, None], "بِسْمِ")]
    #[case([None, Some("ٱللَّهِ"), None, None, None], "ٱللَّهِ")]
    #[case([None, None, None, None, None], "")]
    #[case([Some(""), Some(""), Some(""), Some(""), Some("")], "")]
    fn test_concat(#[case] segments: [Option<&str>; MAX_SEGMENTS], #[case] expected: &str) {
        assert_eq!(concat_segments(segments), expected);
    }

    #[test]
    fn test_concat_is_deterministic() {
        let segments = [Some("وَ"), None, Some("قَالَ"), Some(""), Some("وا")];
        assert_eq!(concat_segments(segments), concat_segments(segments));
        assert_eq!(concat_segments(segments), "وَقَالَوا");
    }

    #[test]
    fn test_concat_owned_segments() {
        let segments = vec![Some("ف".to_string()), None, Some("ي".to_string())];
        assert_eq!(concat_segments(segments), "في");
    }
}
