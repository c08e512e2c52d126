//! Ordered parallel line pipeline
//!
//! The reading thread cuts input into chunks and submits each one to a
//! rayon pool. Every submission returns a one-shot handle that is queued
//! in submission order; the oldest handle is drained whenever the queue
//! reaches its cap and once more for every handle at end of input. Output
//! order therefore equals input order regardless of completion order, and
//! no more than the cap of chunks is ever held between reading and writing.

use crate::{
    chunker::LineChunker,
    config::PipelineConfig,
    error::{EngineError, Result},
    processor::{LineProcessor, SegmenterTask},
    stats::PipelineStats,
};
use crossbeam_channel::{bounded, Receiver};
use std::any::Any;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

type ChunkResult = std::thread::Result<Vec<String>>;

/// A submitted chunk awaiting its result
struct PendingChunk {
    index: usize,
    handle: Receiver<ChunkResult>,
}

/// Runs a [`LineProcessor`] over line-oriented input on a worker pool
pub struct Pipeline<P = SegmenterTask> {
    config: PipelineConfig,
    pool: rayon::ThreadPool,
    template: P,
}

impl Pipeline<SegmenterTask> {
    /// Create a pipeline applying the configured operation
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let template = SegmenterTask::new(config.operation, config.protected_dash_split);
        Self::with_processor(config, template)
    }
}

impl<P: LineProcessor> Pipeline<P> {
    /// Create a pipeline with a custom processor
    ///
    /// Each chunk task receives its own clone of `template`.
    pub fn with_processor(config: PipelineConfig, template: P) -> Result<Self> {
        config.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("fasttok-worker-{i}"))
            .build()
            .map_err(|e| {
                EngineError::ParallelError(format!("failed to create thread pool: {e}"))
            })?;

        log::debug!(
            "pipeline ready: operation={}, threads={}, chunk_size={}, max_in_flight={}",
            config.operation,
            config.threads,
            config.chunk_size,
            config.effective_max_in_flight()
        );

        Ok(Self {
            config,
            pool,
            template,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process all of `reader`, writing one output line per input line
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<PipelineStats> {
        self.run_with_progress(reader, writer, |_| {})
    }

    /// Like [`run`](Self::run), calling `progress` with the running line
    /// count after every drained chunk
    pub fn run_with_progress<R, W, F>(
        &self,
        reader: R,
        mut writer: W,
        mut progress: F,
    ) -> Result<PipelineStats>
    where
        R: BufRead,
        W: Write,
        F: FnMut(u64),
    {
        let start = Instant::now();
        let cap = self.config.effective_max_in_flight();
        let mut chunker = LineChunker::new(reader, self.config.chunk_size);
        let mut pending: VecDeque<PendingChunk> = VecDeque::with_capacity(cap);
        let mut stats = PipelineStats::default();

        while let Some(lines) = chunker.next_chunk()? {
            pending.push_back(self.submit(stats.chunks, lines));
            stats.chunks += 1;
            stats.peak_in_flight = stats.peak_in_flight.max(pending.len());

            if pending.len() >= cap {
                if let Some(oldest) = pending.pop_front() {
                    drain(oldest, &mut writer, &mut stats)?;
                    progress(stats.lines);
                }
            }
        }

        while let Some(oldest) = pending.pop_front() {
            drain(oldest, &mut writer, &mut stats)?;
            progress(stats.lines);
        }
        writer.flush()?;

        stats.malformed_lines = chunker.malformed_lines();
        stats.elapsed = start.elapsed();

        if stats.malformed_lines > 0 {
            log::warn!(
                "{} input lines contained malformed UTF-8",
                stats.malformed_lines
            );
        }
        log::info!(
            "processed {} lines in {} chunks ({} ms)",
            stats.lines,
            stats.chunks,
            stats.elapsed_millis()
        );
        Ok(stats)
    }

    fn submit(&self, index: usize, mut lines: Vec<String>) -> PendingChunk {
        let (tx, rx) = bounded(1);
        let mut processor = self.template.clone();
        log::trace!("submitting chunk {index} ({} lines)", lines.len());

        self.pool.spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(move || {
                processor.process_chunk(&mut lines);
                lines
            }));
            // A closed receiver means the run has already failed
            let _ = tx.send(result);
        });

        PendingChunk { index, handle: rx }
    }
}

fn drain<W: Write>(chunk: PendingChunk, writer: &mut W, stats: &mut PipelineStats) -> Result<()> {
    let lines = match chunk.handle.recv() {
        Ok(Ok(lines)) => lines,
        Ok(Err(payload)) => {
            return Err(EngineError::WorkerFailure {
                chunk: chunk.index,
                reason: panic_message(payload.as_ref()),
            })
        }
        Err(_) => {
            return Err(EngineError::WorkerFailure {
                chunk: chunk.index,
                reason: "worker exited without a result".to_string(),
            })
        }
    };

    for line in &lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    stats.lines += lines.len() as u64;
    log::trace!("drained chunk {} ({} lines)", chunk.index, lines.len());
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
