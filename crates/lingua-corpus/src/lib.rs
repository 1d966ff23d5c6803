//! # lingua-corpus
//!
//! The text corpus and the `corpus://` resource provider.
//!
//! The corpus is an explicit immutable value built once at start-up
//! (from configuration or the built-in samples) and shared by reference.
//! Lookups return typed errors; the legacy `"Error: ..."` text is only a
//! rendering of [`CorpusError::TextNotFound`].

pub mod error;
pub mod provider;
pub mod source;
pub mod store;

pub use error::{fallback_message, CorpusError};
pub use provider::{text_uri, ResourceProvider, LIST_URI, RESERVED_ID, SCHEME, TEXT_URI_TEMPLATE};
pub use source::TextSource;
pub use store::{Corpus, SEED_TEXTS};
