//! Bounded numeric keys for chapters, verses and words.
//!
//! Source rows carry raw SQLite integers and commentary references carry
//! `"chapter:verse"` strings. Both are converted into these keys at the edge
//! so the rest of the pipeline never sees a chapter `0` or `115`.

use crate::error::{Error, ErrorKind, Result};
use exn::{OptionExt, ResultExt};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Number of chapters in the text.
pub const CHAPTER_COUNT: u8 = 114;

macro_rules! bounded {
    ($(#[$meta:meta])* $name:ident($repr:ty), $field:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) $repr);
        impl $name {
            /// Largest accepted value (the smallest is always `1`).
            pub const MAX: $repr = $max;

            pub fn new(value: $repr) -> Result<Self> {
                if value == 0 || value > Self::MAX {
                    exn::bail!(ErrorKind::OutOfRange { field: $field, value: value.to_string() });
                }
                Ok(Self(value))
            }

            pub fn get(self) -> $repr {
                self.0
            }
        }
        impl TryFrom<i64> for $name {
            type Error = Error;
            fn try_from(value: i64) -> Result<Self> {
                match <$repr>::try_from(value) {
                    Ok(value) => Self::new(value),
                    Err(_) => exn::bail!(ErrorKind::OutOfRange { field: $field, value: value.to_string() }),
                }
            }
        }
        impl FromStr for $name {
            type Err = Error;
            fn from_str(s: &str) -> Result<Self> {
                let value = s
                    .trim()
                    .parse::<$repr>()
                    .or_raise(|| ErrorKind::ParseError { field: $field, value: s.to_string() })?;
                Self::new(value)
            }
        }
        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "{}", self.0)
            }
        }
        // Hand-written so that out-of-range values are rejected when reading
        // generated files back, and so the keys work as JSON object keys.
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_u64(u64::from(self.0))
            }
        }
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let value = <$repr>::deserialize(deserializer)?;
                Self::new(value).map_err(|e| D::Error::custom(&*e))
            }
        }
    };
}

bounded!(
    /// A chapter (surah) number, `1..=114`.
    ChapterNumber(u8),
    "chapter",
    CHAPTER_COUNT
);
bounded!(
    /// A verse (ayah) number within a chapter, 1-based.
    ///
    /// The upper bound depends on the chapter; see [`VerseKey::new`].
    VerseNumber(u16),
    "verse",
    u16::MAX
);
bounded!(
    /// 1-based position of a word within a verse.
    WordIndex(u16),
    "word",
    u16::MAX
);

impl ChapterNumber {
    /// All chapter numbers in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=CHAPTER_COUNT).map(Self)
    }
}

/// Identifies a verse by `(chapter, verse)`. Displayed as `"chapter:verse"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseKey {
    pub chapter: ChapterNumber,
    pub verse: VerseNumber,
}
impl VerseKey {
    /// Creates a key, rejecting verse numbers past the chapter's declared count.
    pub fn new(chapter: ChapterNumber, verse: VerseNumber) -> Result<Self> {
        if verse.get() > chapter.metadata().verses {
            exn::bail!(ErrorKind::OutOfRange { field: "verse", value: format!("{chapter}:{verse}") });
        }
        Ok(Self { chapter, verse })
    }

    /// Creates a key from raw database integers.
    pub fn from_raw(chapter: i64, verse: i64) -> Result<Self> {
        Self::new(ChapterNumber::try_from(chapter)?, VerseNumber::try_from(verse)?)
    }

    /// Key of the `index`-th word of this verse.
    pub fn word(self, index: WordIndex) -> WordKey {
        WordKey { verse: self, index }
    }

    /// Every possible word key of this verse, for slicing maps keyed by [`WordKey`].
    pub fn words(self) -> RangeInclusive<WordKey> {
        self.word(WordIndex(1))..=self.word(WordIndex(WordIndex::MAX))
    }
}
impl FromStr for VerseKey {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let (chapter, verse) =
            s.split_once(':').ok_or_raise(|| ErrorKind::ParseError { field: "verse key", value: s.to_string() })?;
        Self::new(chapter.parse()?, verse.parse()?)
    }
}
impl Display for VerseKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// Identifies a word by `(chapter, verse, word-index)`.
///
/// Orders by verse first, then by index, so a sorted collection of word keys
/// is already in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordKey {
    pub verse: VerseKey,
    pub index: WordIndex,
}
impl WordKey {
    /// Creates a key from raw database integers.
    pub fn from_raw(chapter: i64, verse: i64, index: i64) -> Result<Self> {
        Ok(VerseKey::from_raw(chapter, verse)?.word(WordIndex::try_from(index)?))
    }
}
impl Display for WordKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.verse, self.index)
    }
}
