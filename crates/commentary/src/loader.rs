//! Reading the commentary JSONL file into per-verse entry lists.

use crate::entry::CommentaryEntry;
use crate::error::{ErrorKind, Result};
use crate::filter::Acceptance;
use crate::record::Record;
use exn::ResultExt;
use ihya_quran::VerseKey;
use std::collections::BTreeMap;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::instrument;

/// How the lines of a commentary file were handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Accepted into the commentary table
    pub accepted: usize,
    /// Parsed, but missing a verse reference or substantial English text
    pub rejected: usize,
    /// Not a JSON object of the expected shape
    pub malformed: usize,
}

/// Commentary entries grouped by verse reference.
///
/// References are kept exactly as written in the source file (`"2:255"`).
/// Entries for the same reference keep file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Commentary {
    entries: BTreeMap<String, Vec<CommentaryEntry>>,
    stats: LoadStats,
}

impl Commentary {
    /// A table with no entries, used when the optional commentary file is absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the commentary file at `path`.
    ///
    /// A missing file yields an empty table unless `required` is set, in which
    /// case it is [`ErrorKind::NotFound`].
    #[instrument(skip_all, fields(path = %path.as_ref().display(), ?acceptance))]
    pub async fn load(path: impl AsRef<Path>, acceptance: Acceptance, required: bool) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                if required {
                    exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
                }
                tracing::warn!(path = %path.display(), "Commentary file not found; continuing without commentary");
                return Ok(Self::empty());
            },
            Err(e) => return Err(e).or_raise(|| ErrorKind::Io(path.to_path_buf())),
        };
        let commentary =
            Self::read(BufReader::new(file), acceptance).await.or_raise(|| ErrorKind::Io(path.to_path_buf()))?;
        let LoadStats { accepted, rejected, malformed } = commentary.stats;
        tracing::info!(accepted, rejected, malformed, verses = commentary.len(), "Loaded commentary");
        Ok(commentary)
    }

    /// Read newline-delimited records from `reader`.
    ///
    /// Lines are handled independently: a line that fails to parse is counted
    /// as malformed and skipped. Blank lines are ignored.
    pub async fn read<R: AsyncBufRead + Unpin>(reader: R, acceptance: Acceptance) -> std::io::Result<Self> {
        let mut commentary = Self::empty();
        let mut lines = reader.split(b'\n');
        while let Some(line) = lines.next_segment().await? {
            commentary.push_line(&line, acceptance);
        }
        Ok(commentary)
    }

    /// Parse and, if accepted, add a single line.
    pub fn push_line(&mut self, line: &[u8], acceptance: Acceptance) {
        let line = line.trim_ascii();
        if line.is_empty() {
            return;
        }
        let record = match Record::from_slice(line) {
            Ok(record) => record,
            Err(e) => {
                self.stats.malformed += 1;
                tracing::trace!(error = %e, "Skipping malformed commentary line");
                return;
            },
        };
        match record.reference() {
            Some(reference) if acceptance.accepts(record.english_text()) => {
                self.entries.entry(reference.to_string()).or_default().push(CommentaryEntry::from(&record));
                self.stats.accepted += 1;
            },
            _ => self.stats.rejected += 1,
        }
    }

    /// Whether any entry references `key`.
    pub fn contains(&self, key: &VerseKey) -> bool {
        self.entries.contains_key(&key.to_string())
    }

    /// Entries for a reference, in file order.
    pub fn get(&self, reference: &str) -> Option<&[CommentaryEntry]> {
        self.entries.get(reference).map(Vec::as_slice)
    }

    /// Iterate over `(reference, entries)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CommentaryEntry])> {
        self.entries.iter().map(|(reference, entries)| (reference.as_str(), entries.as_slice()))
    }

    /// Number of distinct verse references.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }
}
