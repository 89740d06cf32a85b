use serde::{Deserialize, Serialize};
use std::fmt;

/// Etymology match for a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginRecord {
    /// Headword whose etymology produced the match
    pub index_word: String,
    /// Token of the description that contained an origin marker
    pub language: String,
}

impl OriginRecord {
    pub fn new(index_word: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            index_word: index_word.into(),
            language: language.into(),
        }
    }
}

/// Value held for a word in the classification store
///
/// A word that was never looked up has no entry at all. On disk an
/// explicit none is a JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<OriginRecord>", into = "Option<OriginRecord>")]
pub enum StoreEntry {
    /// A reviewer decided the word has no meaningful origin
    ExplicitNone,
    /// Known origin
    Record(OriginRecord),
}

impl StoreEntry {
    pub fn record(&self) -> Option<&OriginRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::ExplicitNone => None,
        }
    }
}

impl From<Option<OriginRecord>> for StoreEntry {
    fn from(value: Option<OriginRecord>) -> Self {
        match value {
            Some(record) => Self::Record(record),
            None => Self::ExplicitNone,
        }
    }
}

impl From<StoreEntry> for Option<OriginRecord> {
    fn from(value: StoreEntry) -> Self {
        match value {
            StoreEntry::Record(record) => Some(record),
            StoreEntry::ExplicitNone => None,
        }
    }
}

impl fmt::Display for StoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitNone => write!(f, "None"),
            Self::Record(record) => write!(
                f,
                "{{index_word: {}, language: {}}}",
                record.index_word, record.language
            ),
        }
    }
}

/// First token containing any marker
///
/// Tokens are scanned in order and, for each token, markers in priority
/// order. The whole token is returned, e.g. `anglo-french` for `french`.
pub fn find_marker<T: AsRef<str>>(tokens: &[T], markers: &[String]) -> Option<String> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .find(|token| {
            markers
                .iter()
                .any(|marker| !marker.is_empty() && token.contains(marker.as_str()))
        })
        .map(str::to_string)
}

/// Whether a language tag names a substitution target
pub fn is_foreign(language: &str, foreign_markers: &[String]) -> bool {
    foreign_markers
        .iter()
        .any(|marker| !marker.is_empty() && language.contains(marker.as_str()))
}
