//! Parallel line pipeline for fasttok
//!
//! This crate drives a [`fasttok_core::Segmenter`] over line-oriented input
//! on a worker pool. Input is read in fixed-size chunks, each chunk is
//! processed by its own task, and results are written back strictly in
//! input order with a bounded number of chunks in flight.
//!
//! ```
//! use fasttok_engine::{Operation, Pipeline, PipelineConfig};
//!
//! let config = PipelineConfig::builder()
//!     .operation(Operation::Segment)
//!     .protected_dash_split(true)
//!     .threads(2)
//!     .build()?;
//! let pipeline = Pipeline::new(config)?;
//!
//! let mut output = Vec::new();
//! let stats = pipeline.run(&b"well-known facts.\n"[..], &mut output)?;
//! assert_eq!(output, b"well @-@ known facts .\n");
//! assert_eq!(stats.lines, 1);
//! # Ok::<(), fasttok_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod error;
pub mod operation;
pub mod pipeline;
pub mod processor;
pub mod stats;

// Re-export key types
pub use chunker::LineChunker;
pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use error::{EngineError, Result};
pub use operation::Operation;
pub use pipeline::Pipeline;
pub use processor::{LineProcessor, SegmenterTask};
pub use stats::PipelineStats;

// Re-export from core for convenience
pub use fasttok_core::Segmenter;
