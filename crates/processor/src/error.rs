use thiserror::Error;

/// Errors that can occur while processing text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("invalid chunk size {chunk_size}; expected >= 1")]
    InvalidChunkSize { chunk_size: i64 },
    #[error("invalid overlap {overlap} for chunk size {chunk_size}; expected 0 <= overlap < chunk_size")]
    InvalidOverlap { overlap: i64, chunk_size: i64 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
