//! Abstract text source (port) behind the resource provider.

/// Read-only, ordered id -> body lookup.
///
/// [`crate::Corpus`] is the in-memory implementation; any key-value store
/// with a stable iteration order can stand in for it.
pub trait TextSource: Send + Sync {
    /// All identifiers, in iteration order.
    fn text_ids(&self) -> Vec<&str>;

    /// Body of the text with this identifier.
    fn body(&self, id: &str) -> Option<&str>;
}
