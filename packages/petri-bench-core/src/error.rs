//! Benchmark error types.

use thiserror::Error;

/// Workload errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Fibonacci value does not fit in u64
    #[error("Fibonacci overflow at index {index}")]
    FibonacciOverflow { index: usize },

    /// Summary requested over an empty sequence
    #[error("Sequence '{sequence}' is empty")]
    EmptySequence { sequence: &'static str },

    /// Workload configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while writing the report
    #[error("I/O error: {0}")]
    Io(String),

    /// Report text was not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::Io(err.to_string())
    }
}

/// Result alias for workload operations.
pub type Result<T> = std::result::Result<T, BenchError>;
