//! Raw rows as returned by the source queries.
//!
//! Columns are read exactly as SQLite stores them; conversion into bounded
//! keys happens in [`KeyedRow::into_entry`], which is where out-of-range rows
//! are detected.

use ihya_quran::error::Result as ModelResult;
use ihya_quran::{ChapterNumber, VerseKey, WordKey, concat_segments};

/// A row that maps onto a single `(key, value)` entry.
pub(crate) trait KeyedRow {
    type Key: Ord;
    type Value;
    fn into_entry(self) -> ModelResult<(Self::Key, Self::Value)>;
}

/// `verses(sura, ayah, text)`, shared by the original-text and translation databases.
#[derive(sqlx::FromRow)]
pub(crate) struct VerseRow {
    pub(crate) sura: i64,
    pub(crate) ayah: i64,
    pub(crate) text: Option<String>,
}
impl KeyedRow for VerseRow {
    type Key = VerseKey;
    type Value = String;
    fn into_entry(self) -> ModelResult<(VerseKey, String)> {
        Ok((VerseKey::from_raw(self.sura, self.ayah)?, self.text.unwrap_or_default()))
    }
}

/// Row count of `verses` grouped by `sura`.
#[derive(sqlx::FromRow)]
pub(crate) struct CountRow {
    pub(crate) sura: i64,
    pub(crate) verses: i64,
}
impl KeyedRow for CountRow {
    type Key = ChapterNumber;
    type Value = u64;
    fn into_entry(self) -> ModelResult<(ChapterNumber, u64)> {
        // COUNT(*) is never negative.
        Ok((ChapterNumber::try_from(self.sura)?, self.verses.unsigned_abs()))
    }
}

/// `allwords(sura, ayah, word, en)`
#[derive(sqlx::FromRow)]
pub(crate) struct WordRow {
    pub(crate) sura: i64,
    pub(crate) ayah: i64,
    pub(crate) word: i64,
    pub(crate) en: Option<String>,
}
impl KeyedRow for WordRow {
    type Key = WordKey;
    type Value = String;
    fn into_entry(self) -> ModelResult<(WordKey, String)> {
        Ok((WordKey::from_raw(self.sura, self.ayah, self.word)?, self.en.unwrap_or_default()))
    }
}

/// `corpus(surah, ayah, word, ar1..ar5)`
#[derive(sqlx::FromRow)]
pub(crate) struct SegmentRow {
    pub(crate) surah: i64,
    pub(crate) ayah: i64,
    pub(crate) word: i64,
    pub(crate) ar1: Option<String>,
    pub(crate) ar2: Option<String>,
    pub(crate) ar3: Option<String>,
    pub(crate) ar4: Option<String>,
    pub(crate) ar5: Option<String>,
}
impl KeyedRow for SegmentRow {
    type Key = WordKey;
    type Value = String;
    fn into_entry(self) -> ModelResult<(WordKey, String)> {
        let key = WordKey::from_raw(self.surah, self.ayah, self.word)?;
        Ok((key, concat_segments([self.ar1, self.ar2, self.ar3, self.ar4, self.ar5])))
    }
}
