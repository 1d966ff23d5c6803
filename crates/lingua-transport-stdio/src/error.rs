//! Transport-layer error types.

use lingua_types::{ErrorKind, LinguaError};
use thiserror::Error;

/// Errors from the stdio transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from the input stream.
    #[error("read error: {0}")]
    Read(String),
    /// Failed to write to the output stream.
    #[error("write error: {0}")]
    Write(String),
    /// A reply could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<TransportError> for LinguaError {
    fn from(e: TransportError) -> Self {
        LinguaError::new(ErrorKind::Internal, e.to_string())
    }
}
