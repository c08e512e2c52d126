//! Layered error types
//!
//! The text-rewriting engine itself never fails; only configuration, I/O
//! and worker execution can.

use thiserror::Error;

/// Pipeline-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid configuration, detected before any input is read
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A chunk task faulted; the whole run is aborted
    #[error("worker failed on chunk {chunk}: {reason}")]
    WorkerFailure {
        /// Zero-based index of the chunk in submission order
        chunk: usize,
        /// Panic message or other description of the fault
        reason: String,
    },

    /// The worker pool could not be built
    #[error("parallel execution failed: {0}")]
    ParallelError(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
