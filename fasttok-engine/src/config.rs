//! Configuration types for the pipeline

use crate::{
    error::{EngineError, Result},
    operation::Operation,
};

/// Lines per chunk when nothing else is configured
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Worker threads when nothing else is configured
pub const DEFAULT_THREADS: usize = 4;

/// In-flight chunk cap per worker thread
pub const IN_FLIGHT_PER_THREAD: usize = 8;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Operation applied to every line
    pub operation: Operation,
    /// Enable join markers and protected spans
    pub protected_dash_split: bool,
    /// Number of worker threads
    pub threads: usize,
    /// Lines per chunk
    pub chunk_size: usize,
    /// Cap on submitted-but-undrained chunks (None = threads × 8)
    pub max_in_flight: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            operation: Operation::default(),
            protected_dash_split: false,
            threads: DEFAULT_THREADS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_in_flight: None,
        }
    }
}

impl PipelineConfig {
    /// Create a builder
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }

    /// Effective in-flight cap
    pub fn effective_max_in_flight(&self) -> usize {
        self.max_in_flight
            .unwrap_or(self.threads.saturating_mul(IN_FLIGHT_PER_THREAD))
    }

    /// Upper bound on input lines held in memory at any time
    pub fn buffered_line_bound(&self) -> usize {
        self.effective_max_in_flight()
            .saturating_add(self.threads)
            .saturating_mul(self.chunk_size)
    }

    /// Check the configuration before any work starts
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(EngineError::ConfigError(
                "number of threads must be positive".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(EngineError::ConfigError(
                "chunk size must be positive".to_string(),
            ));
        }
        if self.max_in_flight == Some(0) {
            return Err(EngineError::ConfigError(
                "max in-flight chunks must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`PipelineConfig`]
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operation
    pub fn operation(mut self, operation: Operation) -> Self {
        self.config.operation = operation;
        self
    }

    /// Enable or disable protected dash splitting
    pub fn protected_dash_split(mut self, enabled: bool) -> Self {
        self.config.protected_dash_split = enabled;
        self
    }

    /// Set the number of worker threads
    pub fn threads(mut self, threads: usize) -> Self {
        self.config.threads = threads;
        self
    }

    /// Set the number of lines per chunk
    pub fn chunk_size(mut self, lines: usize) -> Self {
        self.config.chunk_size = lines;
        self
    }

    /// Set the in-flight chunk cap
    pub fn max_in_flight(mut self, chunks: usize) -> Self {
        self.config.max_in_flight = Some(chunks);
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<PipelineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
