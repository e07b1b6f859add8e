//! Output format profiles.
//!
//! The mobile app has gone through three asset layouts. Each [`Format`] fixes
//! how verses are anchored, where words come from, how commentary is filtered,
//! and the shape and file name of the generated documents.

use crate::error::{Error, ErrorKind, Result};
use exn::OptionExt;
use ihya_commentary::Acceptance;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Which verses a chapter's verse list is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchoring {
    /// Only verses that have a row in the verse-text store
    Observed,
    /// Every verse in `1..=declared count`, whether or not the stores have it
    Declared,
}

/// Where a verse's word list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource {
    /// Transliterations only, emitted as plain strings
    Transliteration,
    /// Corpus segments, joined with transliterations by word key
    Corpus,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    V1,
    V4,
    #[default]
    V5,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::V1, Format::V4, Format::V5];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V4 => "v4",
            Self::V5 => "v5",
        }
    }

    pub fn anchoring(&self) -> Anchoring {
        match self {
            Self::V1 => Anchoring::Observed,
            Self::V4 | Self::V5 => Anchoring::Declared,
        }
    }

    pub fn word_source(&self) -> WordSource {
        match self {
            Self::V1 => WordSource::Transliteration,
            Self::V4 | Self::V5 => WordSource::Corpus,
        }
    }

    /// Whether verse text and translation are trimmed of surrounding whitespace.
    pub fn trims_text(&self) -> bool {
        matches!(self, Self::V1)
    }

    /// Rule applied to each commentary record's English text.
    pub fn acceptance(&self) -> Acceptance {
        match self {
            Self::V1 => Acceptance::strict(),
            Self::V4 | Self::V5 => Acceptance::NonEmpty,
        }
    }

    /// Whether a missing commentary file aborts the run.
    pub fn commentary_required(&self) -> bool {
        matches!(self, Self::V1)
    }

    /// File name of the verse document when none is configured.
    pub fn default_verses_filename(&self) -> &'static str {
        match self {
            Self::V1 => "verses.json",
            Self::V4 | Self::V5 => "verses_v4.json",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_raise(|| ErrorKind::UnsupportedFormat(s.to_string()))
    }
}
