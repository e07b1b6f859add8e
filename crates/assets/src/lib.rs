//! Asset generation for the Ihya app.
//!
//! [`Sources::combine`] joins the loaded verse texts, translations, words and
//! commentary into per-chapter verse lists; [`Documents::build`] reshapes them
//! into the layout selected by a [`Format`]; [`Documents::write`] puts the
//! three JSON files on disk.

mod combine;
mod document;
pub mod error;
mod format;
mod write;

pub use crate::combine::{Chapters, Sources};
pub use crate::document::{ChapterRecord, CommentaryRecord, Documents, VerseRecord, WordRecord};
pub use crate::format::{Anchoring, Format, WordSource};
pub use crate::write::{OutputPaths, write_json};
