//! # lingua-types
//!
//! Domain types for the LinguistHelper server.
//! This crate contains pure data types with no external dependencies
//! beyond serde for serialization.

pub mod error;
pub mod text;

// Re-exports for convenience.
pub use error::{DiagnosticError, ErrorKind, LinguaError};
pub use text::{CorpusEntry, TextId};
