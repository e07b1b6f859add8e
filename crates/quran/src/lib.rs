//! Core types for the Quran asset builder.
//!
//! - **Keys**: [`ChapterNumber`], [`VerseNumber`], [`WordIndex`] are bounded
//!   integers; [`VerseKey`] and [`WordKey`] are the composite join keys used
//!   by every source.
//! - **Chapters**: the static [`CHAPTERS`] table is the single authority for
//!   chapter names and declared verse counts.
//! - **Models**: [`Verse`] and [`Word`] are the joined records the asset
//!   files are generated from.

mod chapters;
pub mod error;
mod keys;
mod models;
mod segments;

pub use crate::chapters::{CHAPTERS, Chapter, Revelation};
pub use crate::keys::{CHAPTER_COUNT, ChapterNumber, VerseKey, VerseNumber, WordIndex, WordKey};
pub use crate::models::{Verse, Word};
pub use crate::segments::{MAX_SEGMENTS, concat_segments};
