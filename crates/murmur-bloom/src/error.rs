//! Error types for the Bloom filter crate

use thiserror::Error;

/// Errors that can occur when building or restoring a Bloom filter
///
/// Insert and lookup never fail; every error here is raised at
/// construction or restoration time.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Bit array length mismatch: expected {expected} bytes, got {actual}")]
    BitArrayLengthMismatch { expected: usize, actual: usize },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<bincode::Error> for FilterError {
    fn from(err: bincode::Error) -> Self {
        FilterError::SerializationError(err.to_string())
    }
}
