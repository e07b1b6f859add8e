//! Read-only access to the source SQLite databases.
//!
//! Four tables feed the asset builder:
//! - `verses(sura, ayah, text)` twice, once for the original text and once
//!   for the English translation,
//! - `allwords(sura, ayah, word, en)` with per-word transliterations,
//! - `corpus(surah, ayah, word, ar1..ar5)` with per-word morphological
//!   segments.
//!
//! Open a [`Database`], drain what is needed through a [`Repository`], then
//! [`close`](Database::close) it before moving on to the next source.

mod db;
pub mod error;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
mod models;
mod repo;

pub use crate::db::Database;
pub use crate::repo::{Repository, VerseCounts, VerseTexts, WordTexts};
