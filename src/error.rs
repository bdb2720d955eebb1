//! Error types shared by every stage of the pipeline.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Errors raised by the queue, sort engine, traversal and config layers.
///
/// All variants are local to the operation that produced them. In
/// particular an [`UnsupportedAlgorithm`](DispatchError::UnsupportedAlgorithm)
/// aborts only the report being built; the processed record set is
/// borrowed by report builders and stays intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("cannot extract from an empty priority queue")]
    EmptyQueue,

    #[error("unsupported sorting algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("unsupported ordering criterion: {0}")]
    UnsupportedCriterion(String),

    #[error("record {from} references missing record {missing}")]
    MissingReference { from: String, missing: String },

    #[error("unknown record: {0}")]
    UnknownRecord(String),

    #[error("record {0} was already dispatched and cannot be queued again")]
    AlreadyDispatched(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
