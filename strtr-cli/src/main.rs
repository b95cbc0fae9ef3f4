//! strtr command-line entry point

use clap::Parser;
use strtr_cli::commands::Commands;

/// Replace many substrings at once, never touching the same text twice
#[derive(Debug, Parser)]
#[command(
    name = "strtr",
    version,
    about = "Multi-needle string replacement without overlapping matches"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
