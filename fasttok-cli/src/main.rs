//! fasttok command-line entry point

use clap::Parser;
use fasttok_cli::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.process.execute()
}
