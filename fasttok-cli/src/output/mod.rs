//! Diagnostic output on standard error
//!
//! Processed lines go to standard output; everything here is for the
//! operator and is suppressed in quiet mode.

use fasttok_engine::{PipelineConfig, PipelineStats};
use std::io::{self, Write};

/// Echo the effective settings before processing starts
pub fn write_settings<W: Write>(
    writer: &mut W,
    input: &str,
    config: &PipelineConfig,
) -> io::Result<()> {
    writeln!(writer, "Input: {input}")?;
    writeln!(writer, "Operation: {}", config.operation)?;
    writeln!(
        writer,
        "Protected dash split: {}",
        config.protected_dash_split
    )?;
    writeln!(writer, "Num threads: {}", config.threads)?;
    writeln!(writer, "Chunk size: {}", config.chunk_size)?;
    writeln!(
        writer,
        "Max chunks in flight: {}",
        config.effective_max_in_flight()
    )
}

/// Report completion and throughput
pub fn write_summary<W: Write>(writer: &mut W, stats: &PipelineStats) -> io::Result<()> {
    writeln!(writer, "{} Done!", stats.lines)?;
    if stats.malformed_lines > 0 {
        writeln!(
            writer,
            "Warning: {} lines contained invalid UTF-8",
            stats.malformed_lines
        )?;
    }
    writeln!(writer, "Time taken: {}ms", stats.elapsed_millis())?;
    writeln!(writer, "Num lines: {}", stats.lines)?;
    writeln!(writer, "Rate: {:.2} lines/s", stats.lines_per_second())
}
