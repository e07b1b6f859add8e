use crate::record::Record;
use crate::titles::{book_id, book_title};
use crate::truncate::{EXCERPT_MAX_CHARS, truncate_chars};

/// One accepted piece of commentary attached to a verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentaryEntry {
    /// Original-script excerpt, at most [`EXCERPT_MAX_CHARS`] characters
    pub arabic: String,
    /// English explanation
    pub english: String,
    pub analysis_type: String,
    /// Source filename as found in the record
    pub book_file: String,
    /// Human-readable book title derived from the filename
    pub book_title: String,
}
impl CommentaryEntry {
    /// Source filename without its `.txt` extension.
    pub fn book_id(&self) -> String {
        book_id(&self.book_file)
    }
}
impl From<&Record> for CommentaryEntry {
    fn from(record: &Record) -> Self {
        let file = record.file();
        Self {
            arabic: truncate_chars(record.arabic_snippet(), EXCERPT_MAX_CHARS).to_string(),
            english: record.english_text().to_string(),
            analysis_type: record.analysis_type().to_string(),
            book_file: file.to_string(),
            book_title: book_title(file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record() {
        let line = format!(
            r#"{{"custom_id":"3:190","file":"vol4_j4-k09_en.txt","analysis":{{"arabic_snippet":"{}","english_text":"On reflection.","analysis_type":"tafsir"}}}}"#,
            "ت".repeat(600)
        );
        let record: Record = serde_json::from_str(&line).unwrap();
        let entry = CommentaryEntry::from(&record);
        assert_eq!(entry.arabic.chars().count(), EXCERPT_MAX_CHARS);
        assert_eq!(entry.english, "On reflection.");
        assert_eq!(entry.analysis_type, "tafsir");
        assert_eq!(entry.book_file, "vol4_j4-k09_en.txt");
        assert_eq!(entry.book_id(), "vol4_j4-k09_en");
        assert_eq!(entry.book_title, "Contemplation");
    }
}
