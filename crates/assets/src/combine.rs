//! Joining the loaded sources into per-chapter verse lists.

use crate::format::{Anchoring, Format, WordSource};
use ihya_commentary::Commentary;
use ihya_quran::{CHAPTERS, ChapterNumber, Verse, VerseKey, Word, WordKey};
use std::collections::BTreeMap;

/// Verses grouped by chapter, both in ascending order.
pub type Chapters = BTreeMap<ChapterNumber, Vec<Verse>>;

/// Everything loaded from the databases, keyed for joining.
#[derive(Debug, Default, Clone)]
pub struct Sources {
    /// Original-script verse text
    pub verse_texts: BTreeMap<VerseKey, String>,
    pub translations: BTreeMap<VerseKey, String>,
    pub transliterations: BTreeMap<WordKey, String>,
    /// Concatenated corpus segments; only loaded for formats that use them
    pub segments: Option<BTreeMap<WordKey, String>>,
}

impl Sources {
    /// Build one [`Verse`] per anchored key.
    ///
    /// Missing text, translation or transliteration becomes an empty string;
    /// a missing key never drops a verse.
    pub fn combine(&self, format: Format, commentary: &Commentary) -> Chapters {
        let mut chapters = Chapters::new();
        for key in self.anchors(format) {
            let verse = Verse {
                key,
                text: lookup(&self.verse_texts, &key, format.trims_text()),
                translation: lookup(&self.translations, &key, format.trims_text()),
                words: self.words(format, key),
                has_commentary: commentary.contains(&key),
            };
            chapters.entry(key.chapter).or_default().push(verse);
        }
        tracing::debug!(
            chapters = chapters.len(),
            verses = chapters.values().map(Vec::len).sum::<usize>(),
            "Combined verses"
        );
        chapters
    }

    fn anchors(&self, format: Format) -> Box<dyn Iterator<Item = VerseKey> + '_> {
        match format.anchoring() {
            Anchoring::Observed => Box::new(self.verse_texts.keys().copied()),
            Anchoring::Declared => Box::new(CHAPTERS.iter().flat_map(|chapter| chapter.verse_keys())),
        }
    }

    fn words(&self, format: Format, key: VerseKey) -> Vec<Word> {
        let translit = |word: &WordKey| self.transliterations.get(word).cloned().unwrap_or_default();
        let mut words = match (format.word_source(), &self.segments) {
            (WordSource::Transliteration, _) => self
                .transliterations
                .range(key.words())
                .map(|(word, text)| Word { index: word.index, arabic: String::new(), translit: text.clone() })
                .collect::<Vec<_>>(),
            (WordSource::Corpus, Some(segments)) => segments
                .range(key.words())
                .map(|(word, arabic)| Word { index: word.index, arabic: arabic.clone(), translit: translit(word) })
                .collect(),
            (WordSource::Corpus, None) => Vec::new(),
        };
        words.sort_by_key(|word| word.index);
        words
    }
}

fn lookup(map: &BTreeMap<VerseKey, String>, key: &VerseKey, trim: bool) -> String {
    match map.get(key) {
        Some(text) if trim => text.trim().to_string(),
        Some(text) => text.clone(),
        None => String::new(),
    }
}
