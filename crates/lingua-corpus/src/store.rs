//! In-memory corpus store.

use std::collections::HashMap;

use lingua_config::CorpusConfig;
use lingua_types::{CorpusEntry, TextId};
use tracing::debug;

use crate::error::CorpusError;
use crate::provider::{LIST_URI, RESERVED_ID};
use crate::source::TextSource;

/// Built-in sample texts, in iteration order.
pub const SEED_TEXTS: &[(&str, &str)] = &[
    (
        "en_sample_01",
        "The quick brown fox jumps over the lazy dog.",
    ),
    ("en_sample_02", "To be, or not to be, that is the question."),
    ("zh_sample_01", "學而不思則罔,思而不學則殆。"),
];

/// Immutable id -> body mapping that keeps insertion order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    index: HashMap<String, usize>,
}

impl Corpus {
    /// Builds a corpus from ordered entries.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::DuplicateId`] if an identifier repeats, or
    /// [`CorpusError::InvalidId`] for the reserved id `list`, which
    /// `corpus://list` would shadow.
    pub fn new(entries: Vec<CorpusEntry>) -> Result<Self, CorpusError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if entry.id.as_str() == RESERVED_ID {
                return Err(CorpusError::InvalidId {
                    id: entry.id.to_string(),
                    reason: format!("'{RESERVED_ID}' is reserved for {LIST_URI}"),
                });
            }
            if index.insert(entry.id.as_str().to_string(), pos).is_some() {
                return Err(CorpusError::DuplicateId {
                    id: entry.id.to_string(),
                });
            }
        }
        debug!(texts = entries.len(), "corpus built");
        Ok(Self { entries, index })
    }

    /// The built-in sample corpus.
    pub fn seeded() -> Self {
        let mut entries = Vec::with_capacity(SEED_TEXTS.len());
        let mut index = HashMap::with_capacity(SEED_TEXTS.len());
        for (id, body) in SEED_TEXTS {
            if let Ok(text_id) = TextId::new(*id) {
                index.insert(text_id.as_str().to_string(), entries.len());
                entries.push(CorpusEntry::new(text_id, *body));
            }
        }
        Self { entries, index }
    }

    /// Builds the corpus described by configuration.
    ///
    /// No configured texts selects [`Corpus::seeded`].
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::InvalidId`] or [`CorpusError::DuplicateId`]
    /// when the configured texts are inconsistent.
    pub fn from_config(config: &CorpusConfig) -> Result<Self, CorpusError> {
        let Some(texts) = &config.texts else {
            return Ok(Self::seeded());
        };
        let entries = texts
            .iter()
            .map(|t| {
                TextId::new(t.id.as_str())
                    .map(|id| CorpusEntry::new(id, t.body.as_str()))
                    .map_err(|e| CorpusError::InvalidId {
                        id: t.id.clone(),
                        reason: e.message,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Body of the text with this identifier.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .and_then(|&pos| self.entries.get(pos))
            .map(|e| e.body.as_str())
    }

    /// Whether a text with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Identifiers in iteration order.
    pub fn ids(&self) -> impl Iterator<Item = &TextId> {
        self.entries.iter().map(|e| &e.id)
    }

    /// Entries in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries.iter()
    }

    /// Number of texts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus has no texts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TextSource for Corpus {
    fn text_ids(&self) -> Vec<&str> {
        self.ids().map(TextId::as_str).collect()
    }

    fn body(&self, id: &str) -> Option<&str> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingua_config::TextConfig;

    fn entry(id: &str, body: &str) -> CorpusEntry {
        CorpusEntry::new(TextId::new(id).expect("id"), body)
    }

    #[test]
    fn seeded_contains_all_samples_in_order() {
        let corpus = Corpus::seeded();
        let ids: Vec<_> = corpus.ids().map(TextId::as_str).collect();
        assert_eq!(ids, vec!["en_sample_01", "en_sample_02", "zh_sample_01"]);
        assert_eq!(corpus.len(), SEED_TEXTS.len());
    }

    #[test]
    fn get_returns_exact_body() {
        let corpus = Corpus::seeded();
        assert_eq!(
            corpus.get("zh_sample_01"),
            Some("學而不思則罔,思而不學則殆。")
        );
        assert_eq!(corpus.get("EN_SAMPLE_01"), None);
    }

    #[test]
    fn new_keeps_insertion_order() {
        let corpus = Corpus::new(vec![entry("z", "last"), entry("a", "first")]).expect("corpus");
        let ids: Vec<_> = corpus.ids().map(TextId::as_str).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn new_rejects_duplicates() {
        let err = Corpus::new(vec![entry("a", "1"), entry("a", "2")]).expect_err("dup");
        assert_eq!(err, CorpusError::DuplicateId { id: "a".into() });
    }

    #[test]
    fn empty_corpus_is_allowed() {
        let corpus = Corpus::new(vec![]).expect("corpus");
        assert!(corpus.is_empty());
        assert!(!corpus.contains("anything"));
    }

    #[test]
    fn from_config_without_texts_is_seeded() {
        let corpus = Corpus::from_config(&CorpusConfig::default()).expect("corpus");
        assert!(corpus.contains("en_sample_01"));
    }

    #[test]
    fn from_config_replaces_seed() {
        let config = CorpusConfig {
            texts: Some(vec![TextConfig {
                id: "custom".into(),
                body: "Custom body.".into(),
            }]),
        };
        let corpus = Corpus::from_config(&config).expect("corpus");
        assert_eq!(corpus.len(), 1);
        assert!(!corpus.contains("en_sample_01"));
        assert_eq!(corpus.get("custom"), Some("Custom body."));
    }

    #[test]
    fn from_config_rejects_invalid_id() {
        let config = CorpusConfig {
            texts: Some(vec![TextConfig {
                id: "has space".into(),
                body: String::new(),
            }]),
        };
        let err = Corpus::from_config(&config).expect_err("invalid");
        assert!(matches!(err, CorpusError::InvalidId { ref id, .. } if id == "has space"));
    }

    #[test]
    fn reserved_list_id_is_rejected() {
        let config = CorpusConfig {
            texts: Some(vec![
                TextConfig {
                    id: "a".into(),
                    body: "visible".into(),
                },
                TextConfig {
                    id: "list".into(),
                    body: "hidden body".into(),
                },
            ]),
        };
        let err = Corpus::from_config(&config).expect_err("reserved");
        assert!(matches!(err, CorpusError::InvalidId { ref id, .. } if id == "list"));
        assert!(err.to_string().contains("corpus://list"));

        let err = Corpus::new(vec![entry("list", "x")]).expect_err("reserved");
        assert!(matches!(err, CorpusError::InvalidId { .. }));
    }

    #[test]
    fn reserved_id_is_case_sensitive() {
        let corpus = Corpus::new(vec![entry("List", "capitalised")]).expect("corpus");
        assert_eq!(corpus.get("List"), Some("capitalised"));
    }

    #[test]
    fn text_source_matches_inherent_api() {
        let corpus = Corpus::seeded();
        let source: &dyn TextSource = &corpus;
        assert_eq!(source.text_ids().len(), 3);
        assert_eq!(source.body("en_sample_02"), corpus.get("en_sample_02"));
    }
}
