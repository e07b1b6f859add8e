use crate::keys::{VerseKey, WordIndex};

/// A single word of a verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub index: WordIndex,
    /// Original-script word, built from its morphological segments
    pub arabic: String,
    /// Latin transliteration (empty when the word list has no entry)
    pub translit: String,
}

/// A fully joined verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub key: VerseKey,
    /// Original-script text
    pub text: String,
    /// English translation
    pub translation: String,
    /// Words in ascending index order
    pub words: Vec<Word>,
    /// Whether at least one commentary entry references this verse
    pub has_commentary: bool,
}
