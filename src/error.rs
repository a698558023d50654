use thiserror::Error;

/// Errors returned by perceptron construction and training operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerceptronError {
    /// A constructor or batch argument violated its contract
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An input vector's length does not match the perceptron's size
    #[error("dimension mismatch: expected input of length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
