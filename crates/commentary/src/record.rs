//! One line of the commentary JSONL file.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A raw commentary record.
///
/// Every field is optional; a line parsed with [`Record::from_slice`] only
/// fails when it is not JSON, is not an object, or holds a field of the wrong
/// type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Verse reference, expected as `"chapter:verse"`
    pub custom_id: Option<String>,
    /// Source book filename (e.g. `vol1_Vol1-book-1_en.txt`)
    pub file: Option<String>,
    #[serde(deserialize_with = "analysis_object")]
    pub analysis: Option<Analysis>,
}

/// The pre-computed analysis attached to a record.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Analysis {
    /// Original-script excerpt from the book
    pub arabic_snippet: Option<String>,
    /// English explanation
    pub english_text: Option<String>,
    pub analysis_type: Option<String>,
}

/// Derived struct deserializers also accept sequences; only a map is an analysis.
fn analysis_object<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Analysis>, D::Error> {
    let fields = Map::<String, Value>::deserialize(deserializer)?;
    Analysis::deserialize(Value::Object(fields)).map(Some).map_err(D::Error::custom)
}

impl Record {
    /// Parse one JSONL line. The line must hold a JSON object.
    pub fn from_slice(line: &[u8]) -> serde_json::Result<Self> {
        let fields: Map<String, Value> = serde_json::from_slice(line)?;
        Self::deserialize(Value::Object(fields))
    }

    /// The verse reference, if it contains the `chapter:verse` separator.
    pub fn reference(&self) -> Option<&str> {
        self.custom_id.as_deref().filter(|r| r.contains(':'))
    }

    pub fn english_text(&self) -> &str {
        self.analysis.as_ref().and_then(|a| a.english_text.as_deref()).unwrap_or_default()
    }

    pub fn arabic_snippet(&self) -> &str {
        self.analysis.as_ref().and_then(|a| a.arabic_snippet.as_deref()).unwrap_or_default()
    }

    pub fn analysis_type(&self) -> &str {
        self.analysis.as_ref().and_then(|a| a.analysis_type.as_deref()).unwrap_or_default()
    }

    pub fn file(&self) -> &str {
        self.file.as_deref().unwrap_or_default()
    }
}
