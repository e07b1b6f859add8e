//! Builders for small source databases, for use in tests.
//!
//! Available to other crates through the `fixtures` feature.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::Path;

/// One `corpus` row: `(surah, ayah, word, [ar1..ar5])`.
pub type CorpusRow<'a> = (i64, i64, i64, [Option<&'a str>; 5]);

async fn create(path: &Path, schema: &str) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        // No WAL side files, so the database can be reopened read-only.
        .journal_mode(SqliteJournalMode::Delete);
    let pool = SqlitePoolOptions::new().max_connections(1).connect_with(options).await?;
    sqlx::query(schema).execute(&pool).await?;
    Ok(pool)
}

/// Create a `verses(sura, ayah, text)` database.
pub async fn verses_db(path: &Path, rows: &[(i64, i64, Option<&str>)]) -> sqlx::Result<()> {
    let pool = create(path, "CREATE TABLE verses (sura INTEGER, ayah INTEGER, text TEXT)").await?;
    for &(sura, ayah, text) in rows {
        sqlx::query("INSERT INTO verses (sura, ayah, text) VALUES (?, ?, ?)")
            .bind(sura)
            .bind(ayah)
            .bind(text)
            .execute(&pool)
            .await?;
    }
    pool.close().await;
    Ok(())
}

/// Create an `allwords(sura, ayah, word, en)` database.
pub async fn words_db(path: &Path, rows: &[(i64, i64, i64, Option<&str>)]) -> sqlx::Result<()> {
    let pool = create(path, "CREATE TABLE allwords (sura INTEGER, ayah INTEGER, word INTEGER, en TEXT)").await?;
    for &(sura, ayah, word, en) in rows {
        sqlx::query("INSERT INTO allwords (sura, ayah, word, en) VALUES (?, ?, ?, ?)")
            .bind(sura)
            .bind(ayah)
            .bind(word)
            .bind(en)
            .execute(&pool)
            .await?;
    }
    pool.close().await;
    Ok(())
}

/// Create a `corpus(surah, ayah, word, ar1..ar5)` database.
pub async fn corpus_db(path: &Path, rows: &[CorpusRow<'_>]) -> sqlx::Result<()> {
    let pool = create(
        path,
        "CREATE TABLE corpus (surah INTEGER, ayah INTEGER, word INTEGER, ar1 TEXT, ar2 TEXT, ar3 TEXT, ar4 TEXT, ar5 TEXT)",
    )
    .await?;
    for &(surah, ayah, word, [ar1, ar2, ar3, ar4, ar5]) in rows {
        sqlx::query("INSERT INTO corpus (surah, ayah, word, ar1, ar2, ar3, ar4, ar5) VALUES (?, ?, ?, ?, ?, ?, ?, ?)")
            .bind(surah)
            .bind(ayah)
            .bind(word)
            .bind(ar1)
            .bind(ar2)
            .bind(ar3)
            .bind(ar4)
            .bind(ar5)
            .execute(&pool)
            .await?;
    }
    pool.close().await;
    Ok(())
}
