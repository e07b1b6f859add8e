//! The JSON documents shipped with the app.
//!
//! Records here are owned and implement both `Serialize` and `Deserialize` so
//! that generated files can be read back and compared.

use crate::combine::Chapters;
use crate::format::{Format, WordSource};
use ihya_commentary::{Commentary, CommentaryEntry};
use ihya_quran::{CHAPTERS, Chapter, ChapterNumber, Revelation, Verse, VerseNumber, Word, WordIndex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An entry of `surahs.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRecord {
    pub number: ChapterNumber,
    pub name: String,
    pub arabic: String,
    pub verses: u16,
    #[serde(rename = "type")]
    pub revelation: Revelation,
}
impl From<&Chapter> for ChapterRecord {
    fn from(chapter: &Chapter) -> Self {
        Self {
            number: chapter.number,
            name: chapter.name.to_string(),
            arabic: chapter.arabic.to_string(),
            verses: chapter.verses,
            revelation: chapter.revelation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: WordIndex,
    pub arabic: String,
    pub translit: String,
}
impl From<&Word> for WordRecord {
    fn from(word: &Word) -> Self {
        Self { id: word.index, arabic: word.arabic.clone(), translit: word.translit.clone() }
    }
}

/// A verse as written to the verse document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerseRecord {
    /// Verses carrying corpus words
    Full {
        ayah: VerseNumber,
        text: String,
        translation: String,
        words: Vec<WordRecord>,
        #[serde(rename = "hasIhya")]
        has_commentary: bool,
    },
    /// Verses whose words are bare transliterations
    Plain {
        ayah: VerseNumber,
        arabic: String,
        translation: String,
        words: Vec<String>,
        #[serde(rename = "hasIhya")]
        has_commentary: bool,
    },
}
impl VerseRecord {
    pub fn new(format: Format, verse: &Verse) -> Self {
        let ayah = verse.key.verse;
        let translation = verse.translation.clone();
        let has_commentary = verse.has_commentary;
        match format.word_source() {
            WordSource::Transliteration => Self::Plain {
                ayah,
                arabic: verse.text.clone(),
                translation,
                words: verse.words.iter().map(|w| w.translit.clone()).collect(),
                has_commentary,
            },
            WordSource::Corpus => Self::Full {
                ayah,
                text: verse.text.clone(),
                translation,
                words: verse.words.iter().map(WordRecord::from).collect(),
                has_commentary,
            },
        }
    }
}

/// A commentary entry as written to the commentary document.
///
/// Variant order matters for reading: a v4 entry's fields are a subset of
/// the others'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentaryRecord {
    Typed {
        arabic: String,
        english: String,
        #[serde(rename = "type")]
        analysis_type: String,
        book: String,
    },
    Titled {
        arabic: String,
        english: String,
        book_file: String,
        book_title: String,
    },
    Plain {
        arabic: String,
        english: String,
        book: String,
    },
}
impl CommentaryRecord {
    pub fn new(format: Format, entry: &CommentaryEntry) -> Self {
        let arabic = entry.arabic.clone();
        let english = entry.english.clone();
        match format {
            Format::V1 => Self::Typed { arabic, english, analysis_type: entry.analysis_type.clone(), book: entry.book_id() },
            Format::V4 => Self::Plain { arabic, english, book: entry.book_id() },
            Format::V5 => {
                Self::Titled { arabic, english, book_file: entry.book_file.clone(), book_title: entry.book_title.clone() }
            },
        }
    }
}

/// The three generated documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documents {
    pub chapters: Vec<ChapterRecord>,
    pub verses: BTreeMap<ChapterNumber, Vec<VerseRecord>>,
    pub commentary: BTreeMap<String, Vec<CommentaryRecord>>,
}
impl Documents {
    pub fn build(format: Format, chapters: &Chapters, commentary: &Commentary) -> Self {
        Self {
            chapters: CHAPTERS.iter().map(ChapterRecord::from).collect(),
            verses: chapters
                .iter()
                .map(|(number, verses)| (*number, verses.iter().map(|v| VerseRecord::new(format, v)).collect()))
                .collect(),
            commentary: commentary
                .iter()
                .map(|(reference, entries)| {
                    (reference.to_string(), entries.iter().map(|e| CommentaryRecord::new(format, e)).collect())
                })
                .collect(),
        }
    }
}
