//! CLI command implementations

use clap::Parser;

pub mod process;

pub use process::ProcessArgs;

/// Fast Unicode text normalizer, tokenizer and detokenizer
///
/// Reads one line at a time and writes exactly one output line per input
/// line, in input order.
#[derive(Debug, Parser)]
#[command(name = "fasttok", version, about, long_about = None)]
pub struct Cli {
    /// Processing options
    #[command(flatten)]
    pub process: ProcessArgs,
}
