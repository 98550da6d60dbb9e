//! The conversion command

use anyhow::{Context, Result};
use tracing::debug;

use super::output::Output;
use crate::export::{ConversionSummary, ConvertOptions, Converter};
use crate::storage::{board_details, parse_board, read_content, CsvSink};

/// Reads the board, writes the CSV and reports what was written
pub fn run(options: &ConvertOptions, output: &Output) -> Result<ConversionSummary> {
    output.banner();

    let content = read_content(options.source())?;
    let board = parse_board(&content, options.source())?;
    output.board_details(&board_details(&content));

    let converter = Converter::new(&board);
    let header = converter.header();

    let mut sink = CsvSink::create(options.target(), &header)?;
    let summary = converter
        .write_to(&mut sink)
        .with_context(|| format!("Failed to write {}", options.target().display()))?;
    sink.finish()
        .with_context(|| format!("Failed to close {}", options.target().display()))?;

    debug!(rows = summary.rows_written(), "Conversion finished");
    Ok(summary)
}
