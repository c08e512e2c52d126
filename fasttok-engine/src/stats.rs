//! Run statistics

use std::time::Duration;

/// Summary of one pipeline run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    /// Lines written
    pub lines: u64,
    /// Chunks submitted
    pub chunks: usize,
    /// Lines whose invalid UTF-8 was replaced
    pub malformed_lines: u64,
    /// Most chunks submitted but not yet drained at any one time
    pub peak_in_flight: usize,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl PipelineStats {
    /// Elapsed milliseconds, never less than one
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis().max(1)
    }

    /// Throughput in lines per second
    pub fn lines_per_second(&self) -> f64 {
        self.lines as f64 * 1000.0 / self.elapsed_millis() as f64
    }
}
