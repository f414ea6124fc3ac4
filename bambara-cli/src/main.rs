//! Command-line entry point for the Bambara tokenizer

use anyhow::Result;
use bambara_cli::commands::Commands;
use clap::Parser;

/// Tokenize and analyze Bambara text
#[derive(Debug, Parser)]
#[command(name = "bambara", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
