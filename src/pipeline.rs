//! A single asset-building run.
//!
//! Each store is opened, drained and closed before the next one is touched;
//! nothing runs concurrently.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use ihya_assets::{Documents, OutputPaths, Sources, WordSource};
use ihya_commentary::Commentary;
use ihya_config::Config;
use ihya_quran::CHAPTERS;
use ihya_source::error::Result as SourceResult;
use ihya_source::{Database, Repository, VerseCounts};
use std::path::PathBuf;
use tracing::instrument;

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub chapters: usize,
    pub verses: usize,
    /// Distinct verse references with at least one commentary entry
    pub commented_verses: usize,
    pub paths: OutputPaths,
}

/// Open the database at `path`, run `load` against it, then close it.
async fn drain<T, F, Fut>(store: &'static str, path: PathBuf, load: F) -> Result<T>
where
    F: FnOnce(Repository) -> Fut,
    Fut: Future<Output = SourceResult<T>>,
{
    let database = Database::open(&path).await.or_raise(|| ErrorKind::Source(store))?;
    tracing::debug!(store, path = %database.path().display(), "Draining source database");
    let loaded = load(Repository::from(&database)).await.or_raise(|| ErrorKind::Source(store));
    database.close().await;
    loaded
}

/// Warn about every chapter whose row count in the verse-text store differs
/// from its declared verse count. Returns the number of such chapters.
fn check_verse_counts(observed: &VerseCounts) -> usize {
    let mut mismatched = 0;
    for chapter in &CHAPTERS {
        let rows = observed.get(&chapter.number).copied().unwrap_or_default();
        if rows != u64::from(chapter.verses) {
            mismatched += 1;
            tracing::warn!(
                chapter = %chapter.number,
                declared = chapter.verses,
                rows,
                "Verse count in the database differs from the declared count"
            );
        }
    }
    mismatched
}

#[instrument(skip_all, fields(format = %config.format))]
pub async fn run(config: &Config) -> Result<Summary> {
    let format = config.format;
    let inputs = &config.sources;

    let (verse_texts, counts) = drain("quran", inputs.quran_path(), |repo| async move {
        SourceResult::Ok((repo.verse_texts().await?, repo.verse_counts().await?))
    })
    .await?;
    check_verse_counts(&counts);
    let translations =
        drain("translation", inputs.translation_path(), |repo| async move { repo.verse_texts().await }).await?;
    let transliterations =
        drain("words", inputs.words_path(), |repo| async move { repo.transliterations().await }).await?;
    let segments = match format.word_source() {
        WordSource::Corpus => {
            Some(drain("corpus", inputs.corpus_path(), |repo| async move { repo.segments().await }).await?)
        },
        WordSource::Transliteration => None,
    };

    let commentary = Commentary::load(&inputs.commentary, format.acceptance(), format.commentary_required())
        .await
        .or_raise(|| ErrorKind::Commentary)?;

    let sources = Sources { verse_texts, translations, transliterations, segments };
    let chapters = sources.combine(format, &commentary);
    let documents = Documents::build(format, &chapters, &commentary);
    let paths = config.output_paths();
    documents.write(&paths, config.output.pretty).await.or_raise(|| ErrorKind::Output)?;

    let summary = Summary {
        chapters: documents.verses.len(),
        verses: documents.verses.values().map(Vec::len).sum(),
        commented_verses: documents.commentary.len(),
        paths,
    };
    tracing::info!(
        chapters = summary.chapters,
        verses = summary.verses,
        commented_verses = summary.commented_verses,
        "Assets built"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ihya_assets::Format;
    use ihya_config::{Output, Sources as Inputs};
    use ihya_source::fixtures::{self, CorpusRow};
    use serde_json::{Value, json};
    use std::path::Path;

    const COMMENTARY: &str = concat!(
        r#"{"custom_id":"2:2","file":"vol1_Vol1-book-1_en.txt","analysis":{"arabic_snippet":"ذلك الكتاب","english_text":"This Book is a guidance for those who are mindful of God and steadfast.","analysis_type":"tafsir"}}"#,
        "\n",
        r#"{"custom_id":"4:110","file":"vol4_Vol4-book1_en.txt","analysis":{"arabic_snippet":"ومن يعمل","english_text":"Forty characters of repentance guidance.","analysis_type":"tafsir"}}"#,
        "\n",
        "this line is not json\n",
        r#"{"custom_id":"intro","file":"vol1_Vol1-book-1_en.txt","analysis":{"english_text":"No verse reference here."}}"#,
        "\n",
    );

    async fn seed(root: &Path) {
        let db = root.join("databases");
        std::fs::create_dir_all(&db).unwrap();
        fixtures::verses_db(
            &db.join("quran.db"),
            &[(1, 1, Some(" بسم الله ")), (2, 1, Some("الم")), (2, 2, Some("ذلك الكتاب")), (4, 110, Some("ومن"))],
        )
        .await
        .unwrap();
        fixtures::verses_db(&db.join("en_sahih.db"), &[(2, 2, Some("This is the Book ")), (4, 110, None)])
            .await
            .unwrap();
        fixtures::words_db(&db.join("words.db"), &[(2, 2, 2, Some("alkitabu")), (2, 2, 1, Some("thalika"))])
            .await
            .unwrap();
        let corpus: &[CorpusRow] = &[
            (2, 2, 2, [Some("ال"), Some("كتاب"), None, None, None]),
            (2, 2, 1, [Some("ذٰ"), Some("لِ"), Some("كَ"), Some(""), None]),
            (2, 2, 3, [Some("لَا"), None, None, None, None]),
        ];
        fixtures::corpus_db(&db.join("corpus.db"), corpus).await.unwrap();
        std::fs::write(root.join("analysis.jsonl"), COMMENTARY).unwrap();
    }

    fn config(root: &Path, format: Format) -> Config {
        Config {
            format,
            sources: Inputs {
                database_dir: root.join("databases"),
                commentary: root.join("analysis.jsonl"),
                ..Inputs::default()
            },
            output: Output { directory: root.join("assets"), ..Output::default() },
        }
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_build_v5() {
        let temp_dir = tempfile::tempdir().unwrap();
        seed(temp_dir.path()).await;
        let summary = run(&config(temp_dir.path(), Format::V5)).await.unwrap();
        assert_eq!(summary.chapters, 114);
        assert_eq!(summary.verses, 6236);
        assert!(summary.paths.verses.ends_with("verses_v4.json"));

        let chapters = read_json(&summary.paths.chapters);
        assert_eq!(chapters.as_array().unwrap().len(), 114);
        assert_eq!(chapters[1]["type"], "Medinan");

        let verses = read_json(&summary.paths.verses);
        assert_eq!(verses["1"].as_array().unwrap().len(), 7);
        assert_eq!(verses["2"].as_array().unwrap().len(), 286);
        assert_eq!(verses["1"][0]["text"], " بسم الله ");
        assert_eq!(
            verses["2"][1],
            json!({
                "ayah": 2,
                "text": "ذلك الكتاب",
                "translation": "This is the Book ",
                "words": [
                    {"id": 1, "arabic": "ذٰلِكَ", "translit": "thalika"},
                    {"id": 2, "arabic": "الكتاب", "translit": "alkitabu"},
                    {"id": 3, "arabic": "لَا", "translit": ""},
                ],
                "hasIhya": true,
            })
        );
        assert_eq!(verses["4"][109]["hasIhya"], true);
        assert_eq!(verses["114"][5]["translation"], "");

        let commentary = read_json(&summary.paths.commentary);
        let keys = commentary.as_object().unwrap().keys().collect::<Vec<_>>();
        assert_eq!(keys, vec!["2:2", "4:110"]);
        assert_eq!(commentary["2:2"][0]["book_title"], "Book of Knowledge");
        assert_eq!(commentary["2:2"][0]["book_file"], "vol1_Vol1-book-1_en.txt");
    }

    #[tokio::test]
    async fn test_build_v1() {
        let temp_dir = tempfile::tempdir().unwrap();
        seed(temp_dir.path()).await;
        let summary = run(&config(temp_dir.path(), Format::V1)).await.unwrap();
        assert_eq!(summary.chapters, 3);
        assert_eq!(summary.verses, 4);
        assert!(summary.paths.verses.ends_with("verses.json"));

        let verses = read_json(&summary.paths.verses);
        assert_eq!(verses.as_object().unwrap().keys().collect::<Vec<_>>(), vec!["1", "2", "4"]);
        assert_eq!(verses["1"][0]["arabic"], "بسم الله");
        assert_eq!(
            verses["2"][1],
            json!({
                "ayah": 2,
                "arabic": "ذلك الكتاب",
                "translation": "This is the Book",
                "words": ["thalika", "alkitabu"],
                "hasIhya": true,
            })
        );
        // The 40-character entry for 4:110 does not pass the strict filter.
        assert_eq!(verses["4"][0]["hasIhya"], false);

        let commentary = read_json(&summary.paths.commentary);
        assert_eq!(commentary.as_object().unwrap().len(), 1);
        assert_eq!(
            commentary["2:2"][0],
            json!({
                "arabic": "ذلك الكتاب",
                "english": "This Book is a guidance for those who are mindful of God and steadfast.",
                "type": "tafsir",
                "book": "vol1_Vol1-book-1_en",
            })
        );
    }

    #[tokio::test]
    async fn test_build_v4_commentary_shape() {
        let temp_dir = tempfile::tempdir().unwrap();
        seed(temp_dir.path()).await;
        let summary = run(&config(temp_dir.path(), Format::V4)).await.unwrap();
        let commentary = read_json(&summary.paths.commentary);
        assert_eq!(
            commentary["4:110"][0],
            json!({"arabic": "ومن يعمل", "english": "Forty characters of repentance guidance.", "book": "vol4_Vol4-book1_en"})
        );
    }

    #[tokio::test]
    async fn test_runs_are_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        seed(temp_dir.path()).await;
        let config = config(temp_dir.path(), Format::V5);
        let first = run(&config).await.unwrap();
        let before = std::fs::read(&first.paths.verses).unwrap();
        let second = run(&config).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second.paths.verses).unwrap(), before);
    }

    #[tokio::test]
    async fn test_missing_store_is_fatal() {
        let temp_dir = tempfile::tempdir().unwrap();
        seed(temp_dir.path()).await;
        std::fs::remove_file(temp_dir.path().join("databases/corpus.db")).unwrap();
        let err = run(&config(temp_dir.path(), Format::V5)).await.unwrap_err();
        assert_eq!(*err, ErrorKind::Source("corpus"));
        assert!(!temp_dir.path().join("assets").exists());
    }

    #[tokio::test]
    async fn test_v1_does_not_need_corpus() {
        let temp_dir = tempfile::tempdir().unwrap();
        seed(temp_dir.path()).await;
        std::fs::remove_file(temp_dir.path().join("databases/corpus.db")).unwrap();
        assert!(run(&config(temp_dir.path(), Format::V1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_commentary() {
        let temp_dir = tempfile::tempdir().unwrap();
        seed(temp_dir.path()).await;
        std::fs::remove_file(temp_dir.path().join("analysis.jsonl")).unwrap();

        let summary = run(&config(temp_dir.path(), Format::V5)).await.unwrap();
        assert_eq!(summary.commented_verses, 0);
        assert_eq!(read_json(&summary.paths.commentary), json!({}));

        let err = run(&config(temp_dir.path(), Format::V1)).await.unwrap_err();
        assert_eq!(*err, ErrorKind::Commentary);
    }

    #[test]
    fn test_check_verse_counts() {
        let mut observed =
            CHAPTERS.iter().map(|chapter| (chapter.number, u64::from(chapter.verses))).collect::<VerseCounts>();
        assert_eq!(check_verse_counts(&observed), 0);
        let first = CHAPTERS[0].number;
        observed.insert(first, 6);
        observed.remove(&CHAPTERS[113].number);
        assert_eq!(check_verse_counts(&observed), 2);
    }
}
