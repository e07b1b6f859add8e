//! Commentary (tafsir) loading.
//!
//! The commentary corpus is a JSONL file in which every line is a
//! pre-analysed excerpt tied to a verse reference. Loading filters the lines
//! with an [`Acceptance`] rule, truncates excerpts to
//! [`EXCERPT_MAX_CHARS`] characters, resolves book titles, and groups the
//! result by verse reference into a [`Commentary`] table.

mod entry;
pub mod error;
mod filter;
mod loader;
mod record;
mod titles;
mod truncate;

pub use crate::entry::CommentaryEntry;
pub use crate::filter::Acceptance;
pub use crate::loader::{Commentary, LoadStats};
pub use crate::record::{Analysis, Record};
pub use crate::titles::{BOOK_TITLES, book_id, book_title};
pub use crate::truncate::{EXCERPT_MAX_CHARS, truncate_chars};
