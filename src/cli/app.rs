//! Main CLI application structure

use anyhow::Result;
use clap::Parser;

use super::convert;
use super::logging;
use super::output::{Output, OutputFormat};
use crate::export::ConvertOptions;

#[derive(Parser)]
#[command(name = "trello2pivotal")]
#[command(author, version, about = "Convert a Trello board export into a Pivotal Tracker CSV import")]
pub struct Cli {
    /// Trello board export (.json) to read
    pub source: String,

    /// Pivotal Tracker import (.csv) to write
    pub target: String,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Suppress the banner and board details
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = Output::new(cli.format, cli.quiet);
    let options = ConvertOptions::new(cli.source, cli.target)?;

    let summary = convert::run(&options, &output)?;
    output.summary(&summary, options.target());
    Ok(())
}
