//! Output formatting for CLI commands

use std::path::Path;

use serde::Serialize;

use crate::export::ConversionSummary;
use crate::storage::BoardDetail;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    success: bool,
    rows_written: usize,
    #[serde(flatten)]
    summary: &'a ConversionSummary,
    target: &'a str,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    fn is_chatty(&self) -> bool {
        self.format == OutputFormat::Text && !self.quiet
    }

    /// Prints the program banner (text only)
    pub fn banner(&self) {
        if self.is_chatty() {
            println!();
            println!("-=[ trello2pivotal ]=-");
            println!();
        }
    }

    /// Prints the top-level attributes of the board (text only)
    pub fn board_details(&self, details: &[BoardDetail]) {
        if !self.is_chatty() {
            return;
        }
        println!("Trello Board Details:");
        for detail in details {
            match detail {
                BoardDetail::Text(key, value) => println!("  {}: {}", key, value),
                BoardDetail::Items(key, len) => println!("  {}({})", key, len),
            }
        }
        println!();
    }

    /// Prints the final conversion summary
    pub fn summary(&self, summary: &ConversionSummary, target: &Path) {
        match self.format {
            OutputFormat::Text => {
                println!("Wrote {} rows to CSV file.", summary.rows_written());
            }
            OutputFormat::Json => {
                let target = target.display().to_string();
                let report = SummaryReport {
                    success: true,
                    rows_written: summary.rows_written(),
                    summary,
                    target: &target,
                };
                if let Ok(json) = serde_json::to_string(&report) {
                    println!("{}", json);
                }
            }
        }
    }
}
