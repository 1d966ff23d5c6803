//! Read operations over the corpus, addressed by id or `corpus://` URI.

use std::sync::Arc;

use tracing::debug;

use crate::error::CorpusError;
use crate::source::TextSource;

/// URI scheme served by the provider.
pub const SCHEME: &str = "corpus://";
/// URI of the identifier listing.
pub const LIST_URI: &str = "corpus://list";
/// URI template of a single text.
pub const TEXT_URI_TEMPLATE: &str = "corpus://{text_id}";

/// Path segment of [`LIST_URI`]; never usable as a text id.
pub const RESERVED_ID: &str = "list";

/// Exposes `list_texts` and `get_text` over a shared text source.
#[derive(Clone)]
pub struct ResourceProvider {
    source: Arc<dyn TextSource>,
}

impl ResourceProvider {
    /// Creates a provider over the given source.
    pub fn new(source: Arc<dyn TextSource>) -> Self {
        Self { source }
    }

    /// All identifiers joined by `\n`, in iteration order.
    pub fn list_texts(&self) -> String {
        self.source.text_ids().join("\n")
    }

    /// Identifiers as owned strings, in iteration order.
    pub fn available(&self) -> Vec<String> {
        self.source
            .text_ids()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Body of `text_id`, exactly as stored.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::TextNotFound`] carrying every known id.
    pub fn get_text(&self, text_id: &str) -> Result<&str, CorpusError> {
        self.source.body(text_id).ok_or_else(|| {
            debug!(text_id, "text not found");
            CorpusError::TextNotFound {
                id: text_id.to_string(),
                available: self.available(),
            }
        })
    }

    /// Resolves `corpus://list` or `corpus://{text_id}`.
    ///
    /// `list` is reserved: it always addresses the listing.
    ///
    /// # Errors
    ///
    /// [`CorpusError::UnsupportedUri`] for other schemes, an empty id or an
    /// id containing `/`; [`CorpusError::TextNotFound`] for unknown ids.
    pub fn resolve_uri(&self, uri: &str) -> Result<String, CorpusError> {
        let segment = match uri.strip_prefix(SCHEME) {
            Some(s) if !s.is_empty() && !s.contains('/') => s,
            _ => {
                return Err(CorpusError::UnsupportedUri {
                    uri: uri.to_string(),
                })
            }
        };
        if segment == RESERVED_ID {
            return Ok(self.list_texts());
        }
        self.get_text(segment).map(str::to_string)
    }
}

impl std::fmt::Debug for ResourceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceProvider")
            .field("texts", &self.source.text_ids())
            .finish()
    }
}

/// URI of a single text.
pub fn text_uri(text_id: &str) -> String {
    format!("{SCHEME}{text_id}")
}
