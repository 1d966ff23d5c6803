//! Corpus error types.

use lingua_types::{DiagnosticError, ErrorKind, LinguaError};
use thiserror::Error;

/// Errors from building or reading the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    /// No text with this identifier exists.
    #[error("Text '{id}' not found. Available: {}", .available.join(", "))]
    TextNotFound { id: String, available: Vec<String> },
    /// The same identifier appeared twice while building the corpus.
    #[error("duplicate text id: {id}")]
    DuplicateId { id: String },
    /// A configured identifier is malformed.
    #[error("invalid text id '{id}': {reason}")]
    InvalidId { id: String, reason: String },
    /// The URI does not address a corpus resource.
    #[error("unsupported resource uri: {uri}")]
    UnsupportedUri { uri: String },
}

impl CorpusError {
    /// Whether this is a missing-text error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TextNotFound { .. })
    }

    /// Known ids carried by a missing-text error; empty otherwise.
    pub fn available_ids(&self) -> &[String] {
        match self {
            Self::TextNotFound { available, .. } => available,
            _ => &[],
        }
    }
}

/// Renders an error the way the resource surface reports it to humans.
///
/// For a missing text this is
/// `Error: Text '<id>' not found. Available: <id>, <id>, ...`.
pub fn fallback_message(err: &CorpusError) -> String {
    format!("Error: {err}")
}

impl From<CorpusError> for LinguaError {
    fn from(e: CorpusError) -> Self {
        let kind = match &e {
            CorpusError::TextNotFound { .. } => ErrorKind::NotFound,
            CorpusError::DuplicateId { .. } | CorpusError::InvalidId { .. } => ErrorKind::Config,
            CorpusError::UnsupportedUri { .. } => ErrorKind::InvalidInput,
        };
        LinguaError::new(kind, e.to_string())
    }
}

impl DiagnosticError for CorpusError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::TextNotFound { available, .. } if available.is_empty() => {
                Some("The corpus is empty.".into())
            }
            Self::TextNotFound { .. } => {
                Some("Text ids are case-sensitive and must match exactly.".into())
            }
            Self::DuplicateId { .. } => {
                Some("Every [[corpus.texts]] entry needs a unique id.".into())
            }
            Self::InvalidId { .. } => Some(
                "Text ids are embedded in corpus:// URIs: no whitespace, no '/', and not 'list'."
                    .into(),
            ),
            Self::UnsupportedUri { .. } => {
                Some("Only corpus://list and corpus://{text_id} are served.".into())
            }
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::TextNotFound { .. } => Some("Run `lingua list` to see valid ids.".into()),
            Self::DuplicateId { id } => Some(format!(
                "Rename or remove one of the '{id}' entries in the config file."
            )),
            _ => None,
        }
    }
}
