//! Book-title resolution for commentary source files.
//!
//! Commentary records name the book they were taken from by filename
//! (`vol3_Vol3-book4a_en.txt`). The app shows a human-readable title instead.

/// Filename stem → book title, in table order.
///
/// Order matters: when no stem matches exactly, the first stem contained in
/// the filename wins.
pub static BOOK_TITLES: &[(&str, &str)] = &[
    ("vol1_Vol1-book-1", "Book of Knowledge"),
    ("vol1_Vol1-book-2", "Foundations of Belief"),
    ("vol1_Vol1-book-3", "Mysteries of Purity"),
    ("vol1_Vol1-book-4", "Mysteries of Prayer"),
    ("vol1_Vol1-book-5", "Mysteries of Zakat"),
    ("vol1_Vol1-book-6", "Mysteries of Fasting"),
    ("vol1_Vol1-book-7", "Mysteries of Hajj"),
    ("vol1_Vol1-book-8", "Etiquette of Quran Recitation"),
    ("vol1_Vol1-book-9", "On Invocations and Supplications"),
    ("vol1_Vol1-book-10", "Arrangement of Litanies"),
    ("vol2_j2-k01", "Manners of Eating"),
    ("vol2_j2-k02", "Etiquette of Marriage"),
    ("vol2_j2-k03", "Etiquette of Earning"),
    ("vol2_j2-k04", "The Lawful and Prohibited"),
    ("vol2_j2-k05", "Duties of Brotherhood"),
    ("vol2_j2-k06", "Etiquette of Seclusion"),
    ("vol2_j2-k07", "Etiquette of Travel"),
    ("vol2_j2-k08", "Audition and Ecstasy"),
    ("vol2_j2-k09", "Enjoining Good and Forbidding Evil"),
    ("vol2_j2-k10", "Etiquette of Living and Prophetic Character"),
    ("vol3_j3-k01", "Disciplining the Soul"),
    ("vol3_Vol3-book2a", "Breaking the Two Desires"),
    ("vol3_Vol3-book3a", "Harms of the Tongue"),
    ("vol3_Vol3-book4a", "Condemnation of Anger and Hatred"),
    ("vol3_Vol3-book5a", "Condemnation of Envy"),
    ("vol3_Vol3-book-6a", "Condemnation of the World"),
    ("vol3_Vol3-book-7a", "Condemnation of Miserliness and Love of Wealth"),
    ("vol3_Vol3-book-8a", "Condemnation of Status and Ostentation"),
    ("vol3_Vol3-book-9a", "Condemnation of Pride and Conceit"),
    ("vol3_Vol3-book-10a", "Condemnation of Delusion"),
    ("vol4_Vol4-book1", "Book of Repentance"),
    ("vol4_Vol4-book2", "Patience and Gratitude"),
    ("vol4_Vol4-book3", "Fear and Hope"),
    ("vol4_Vol4-book4", "Poverty and Abstinence"),
    ("vol4_Vol4-book5", "Monotheism and Reliance"),
    ("vol4_Vol4-book6", "Love, Longing, Intimacy and Contentment"),
    ("vol4_j4-k07-old", "Intention, Sincerity and Truthfulness"),
    ("vol4_j4-k08", "Monitoring and Accounting"),
    ("vol4_j4-k09", "Contemplation"),
    ("vol4_Vol4-book10", "Remembrance of Death and Afterlife"),
];

/// Suffixes removed from a filename before it is matched against [`BOOK_TITLES`].
const STRIPPED_SUFFIXES: [&str; 2] = ["_en", ".txt"];

/// Book identifier: the source filename without its `.txt` extension.
pub fn book_id(filename: &str) -> String {
    filename.replace(".txt", "")
}

/// Resolves the display title of the book a commentary entry came from.
///
/// 1. Strip `_en` and `.txt`, then look for an exact stem match.
/// 2. Otherwise, take the first stem contained in the stripped name.
/// 3. Otherwise, derive a title from the filename itself: `_` and `-` become
///    spaces, and every word is capitalised.
///
/// # Examples
///
/// ```rust
/// use ihya_commentary::book_title;
/// assert_eq!(book_title("vol2_j2-k05_en.txt"), "Duties of Brotherhood");
/// assert_eq!(book_title("appendix_notes-draft.txt"), "Appendix Notes Draft.Txt");
/// ```
pub fn book_title(filename: &str) -> String {
    let stem = STRIPPED_SUFFIXES.iter().fold(filename.to_string(), |stem, suffix| stem.replace(suffix, ""));
    if let Some((_, title)) = BOOK_TITLES.iter().find(|(key, _)| *key == stem) {
        return title.to_string();
    }
    if let Some((_, title)) = BOOK_TITLES.iter().find(|(key, _)| stem.contains(key)) {
        return title.to_string();
    }
    title_case(&filename.replace(['_', '-'], " "))
}

/// Capitalises the first cased character of every run of cased characters
/// and lowercases the rest, so `vol9book` becomes `Vol9Book`.
fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        if previous_cased {
            titled.extend(c.to_lowercase());
        } else {
            titled.extend(c.to_uppercase());
        }
        previous_cased = c.is_lowercase() || c.is_uppercase();
    }
    titled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("vol1_Vol1-book-1_en.txt", "Book of Knowledge")]
    #[case("vol1_Vol1-book-10.txt", "Arrangement of Litanies")]
    #[case("vol3_Vol3-book4a_en.txt", "Condemnation of Anger and Hatred")]
    #[case("vol4_j4-k07-old", "Intention, Sincerity and Truthfulness")]
    #[case("vol4_Vol4-book10_en.txt", "Remembrance of Death and Afterlife")]
    fn test_exact_match(#[case] filename: &str, #[case] expected: &str) {
        assert_eq!(book_title(filename), expected);
    }

    #[rstest]
    #[case("vol2_j2-k08_part2_en.txt", "Audition and Ecstasy")]
    #[case("backup_vol4_Vol4-book3_en.txt", "Fear and Hope")]
    // Containment follows table order, so book-1 is found before book-10.
    #[case("vol1_Vol1-book-10_extra.txt", "Book of Knowledge")]
    fn test_containment_match(#[case] filename: &str, #[case] expected: &str) {
        assert_eq!(book_title(filename), expected);
    }

    #[rstest]
    #[case("unknown_book-one.txt", "Unknown Book One.Txt")]
    #[case("VOL5_EXTRA", "Vol5 Extra")]
    #[case("vol9book", "Vol9Book")]
    #[case("", "")]
    fn test_fallback(#[case] filename: &str, #[case] expected: &str) {
        assert_eq!(book_title(filename), expected);
    }

    #[test]
    fn test_book_id() {
        assert_eq!(book_id("vol1_Vol1-book-1_en.txt"), "vol1_Vol1-book-1_en");
        assert_eq!(book_id("no-extension"), "no-extension");
    }

    #[test]
    fn test_table_has_forty_books() {
        assert_eq!(BOOK_TITLES.len(), 40);
    }
}
