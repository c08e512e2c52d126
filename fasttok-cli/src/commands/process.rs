//! Process command implementation

use crate::{
    config::CliConfig,
    error::CliError,
    input::InputSource,
    output,
    progress::ProgressReporter,
};
use anyhow::Result;
use clap::Args;
use fasttok_engine::{
    config::{DEFAULT_CHUNK_SIZE, DEFAULT_THREADS},
    Operation, Pipeline, PipelineConfig,
};
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for processing a line stream
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input file, or `-` for standard input
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: String,

    /// Mark hyphens with @ join markers and pass protected spans through
    #[arg(short, long)]
    pub protected_dash_split: bool,

    /// Only normalize
    #[arg(short, long)]
    pub norm_only: bool,

    /// Only segment
    #[arg(short, long)]
    pub segm_only: bool,

    /// Desegment a token stream back to natural spacing
    #[arg(short, long)]
    pub desegment: bool,

    /// Number of worker threads [default: 4]
    #[arg(short = 'j', long, value_name = "N", allow_negative_numbers = true)]
    pub num_threads: Option<i64>,

    /// Lines per work chunk [default: 10000]
    #[arg(long, value_name = "LINES")]
    pub chunk_size: Option<usize>,

    /// Maximum chunks held between reading and writing [default: threads × 8]
    #[arg(long, value_name = "CHUNKS")]
    pub max_in_flight: Option<usize>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress settings, progress and statistics
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config = self.pipeline_config(&file_config)?;

        let cpus = num_cpus::get();
        if config.threads > cpus {
            log::warn!(
                "{} worker threads requested but only {} CPUs available",
                config.threads,
                cpus
            );
        }
        log::debug!("Arguments: {:?}", self);

        let source = InputSource::from_arg(&self.input);
        let pipeline = Pipeline::new(config)?;
        let reader = source.open()?;

        if !self.quiet {
            output::write_settings(&mut io::stderr().lock(), &source.to_string(), pipeline.config())?;
        }

        let progress = ProgressReporter::new(self.quiet);
        let writer = BufWriter::new(io::stdout().lock());
        let result = pipeline.run_with_progress(reader, writer, |lines| progress.update(lines));
        progress.finish();
        let stats = result?;

        if !self.quiet {
            output::write_summary(&mut io::stderr().lock(), &stats)?;
        }
        Ok(())
    }

    /// Merge command-line options over file settings and validate
    pub fn pipeline_config(&self, file: &CliConfig) -> Result<PipelineConfig> {
        let operation = Operation::from_flags(self.norm_only, self.segm_only, self.desegment)?;

        let threads = self
            .num_threads
            .or(file.performance.num_threads)
            .unwrap_or(DEFAULT_THREADS as i64);
        if threads <= 0 {
            return Err(CliError::ConfigError(format!(
                "Number of threads must be positive, got {threads}"
            ))
            .into());
        }

        let mut builder = PipelineConfig::builder()
            .operation(operation)
            .protected_dash_split(self.protected_dash_split || file.processing.protected_dash_split)
            .threads(usize::try_from(threads)?)
            .chunk_size(
                self.chunk_size
                    .or(file.performance.chunk_size)
                    .unwrap_or(DEFAULT_CHUNK_SIZE),
            );
        if let Some(cap) = self.max_in_flight.or(file.performance.max_in_flight) {
            builder = builder.max_in_flight(cap);
        }
        Ok(builder.build()?)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        // Only the first initialization in a process takes effect
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
