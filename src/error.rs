//! Error types for model ingestion, synonym lookup, and pipeline configuration

use thiserror::Error;

/// Result type for synonym expansion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by model loading, lookup, and configuration
///
/// Configuration and model-format errors are fatal to initialization and
/// abort construction entirely; no partially-usable model is ever returned.
/// Argument errors are fatal only to the call that raised them.
#[derive(Debug, Error)]
pub enum Error {
    /// Out-of-range or otherwise unusable stage configuration
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The container has no entry carrying the model vectors
    #[error("the container '{container}' does not contain any {prefix} entry")]
    ModelNotFound {
        container: String,
        prefix: &'static str,
    },

    /// Unreadable header or record in the model entry
    #[error("corrupted model: {reason}")]
    CorruptedModel { reason: String },

    /// A record's vector length differs from the declared dimension
    #[error("corrupted model: dimension mismatch at record {record}: declared {expected} but found {actual}")]
    DimensionMismatch {
        record: usize,
        expected: usize,
        actual: usize,
    },

    /// The record count differs from the declared dictionary size
    #[error("corrupted model: declared size {declared} but found {found}")]
    SizeMismatch { declared: usize, found: usize },

    /// No vectors to build a synonym index from
    #[error("empty or missing vector data")]
    EmptyModel,

    /// Invalid argument passed to a lookup call
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// I/O failure while reading the model container
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The container bytes are not a readable zip archive
    #[error("container error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
