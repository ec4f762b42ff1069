//! Error types for the neurite library.

use thiserror::Error;

/// Main error type for network construction, evaluation, training and
/// persistence.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// A vector-length invariant was violated: input vs. expected width,
    /// examples vs. targets count, or persisted weights vs. topology.
    #[error("shape mismatch: expected length {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Outgoing weights were requested for the output layer, which has no
    /// next layer to feed.
    #[error("layer {0} is the output layer and has no outgoing weights")]
    NoOutgoingWeights(usize),

    /// A persisted network description failed to parse. The granular cause
    /// (line count, field count, numeric format) is not preserved.
    #[error("corrupt network file")]
    CorruptFile,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
