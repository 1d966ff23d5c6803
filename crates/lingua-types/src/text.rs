//! Text identity and corpus entry types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LinguaError;

/// Identifier of a corpus text.
///
/// Embedded verbatim in `corpus://{text_id}` URIs, so it may not contain
/// whitespace or `/`. Example: `en_sample_01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TextId(String);

impl TextId {
    /// Creates a new `TextId`, validating the format.
    pub fn new(id: impl Into<String>) -> Result<Self, LinguaError> {
        let id = id.into();
        if id.is_empty() {
            return Err(LinguaError::invalid_input("text id cannot be empty"));
        }
        if id.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(LinguaError::invalid_input(format!(
                "text id '{id}' must not contain whitespace or '/'"
            )));
        }
        Ok(Self(id))
    }

    /// Returns the text id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TextId {
    type Err = LinguaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TextId {
    type Error = LinguaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TextId> for String {
    fn from(id: TextId) -> Self {
        id.0
    }
}

impl AsRef<str> for TextId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single text in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Unique identifier.
    pub id: TextId,
    /// Full text body, stored exactly as given.
    pub body: String,
}

impl CorpusEntry {
    /// Creates a new entry.
    pub fn new(id: TextId, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}
