//! Typed access to the four source tables.

use crate::Database;
use crate::error::{ErrorKind, Result};
use crate::models::{CountRow, KeyedRow, SegmentRow, VerseRow, WordRow};
use exn::ResultExt;
use ihya_quran::error::ErrorKind as ModelErrorKind;
use ihya_quran::{ChapterNumber, VerseKey, WordKey};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use std::collections::BTreeMap;
use tracing::instrument;

/// Verse key → verse text (original or translated).
pub type VerseTexts = BTreeMap<VerseKey, String>;
/// Chapter → number of rows observed in a `verses` table.
pub type VerseCounts = BTreeMap<ChapterNumber, u64>;
/// Word key → word text (transliteration or concatenated segments).
pub type WordTexts = BTreeMap<WordKey, String>;

/// Queries against an open source [`Database`].
///
/// Every method drains its query completely and returns an ordered map. Rows
/// whose keys are out of range (chapter `0`, verse past the chapter's declared
/// count, word `0`) are logged and skipped. When a key appears more than once
/// the last row wins.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}
impl From<&Database> for Repository {
    fn from(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }
}
impl Repository {
    async fn fetch<R>(&self, table: &'static str, query: &'static str) -> Result<BTreeMap<R::Key, R::Value>>
    where
        R: KeyedRow + for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let rows: Vec<R> = sqlx::query_as(query).fetch_all(&self.pool).await.or_raise(|| ErrorKind::Database)?;
        let total = rows.len();
        let mut skipped = 0usize;
        let mut entries = BTreeMap::new();
        for row in rows {
            match row.into_entry() {
                Ok((key, value)) => {
                    entries.insert(key, value);
                },
                Err(err) => {
                    skipped += 1;
                    let reason: &ModelErrorKind = &err;
                    tracing::warn!(table, %reason, "Skipping row with an invalid key");
                },
            }
        }
        tracing::debug!(table, rows = total, skipped, "Loaded rows");
        Ok(entries)
    }

    /// `verses(sura, ayah, text)` as verse key → text. `NULL` text becomes `""`.
    #[instrument(skip(self))]
    pub async fn verse_texts(&self) -> Result<VerseTexts> {
        self.fetch::<VerseRow>("verses", include_str!("../queries/verses.sql")).await
    }

    /// Number of `verses` rows per chapter.
    #[instrument(skip(self))]
    pub async fn verse_counts(&self) -> Result<VerseCounts> {
        self.fetch::<CountRow>("verses", include_str!("../queries/verse_counts.sql")).await
    }

    /// `allwords(sura, ayah, word, en)` as word key → transliteration.
    #[instrument(skip(self))]
    pub async fn transliterations(&self) -> Result<WordTexts> {
        self.fetch::<WordRow>("allwords", include_str!("../queries/allwords.sql")).await
    }

    /// `corpus(surah, ayah, word, ar1..ar5)` as word key → concatenated word.
    #[instrument(skip(self))]
    pub async fn segments(&self) -> Result<WordTexts> {
        self.fetch::<SegmentRow>("corpus", include_str!("../queries/corpus.sql")).await
    }
}
