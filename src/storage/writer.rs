//! Pivotal Tracker CSV writing
//!
//! The header is written when the sink is opened; every following row must
//! have exactly as many values as the header.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::export::RowSink;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create Pivotal Tracker .CSV file: {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write CSV")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush CSV")]
    Io(#[from] std::io::Error),

    #[error("Row has {actual} columns but the header has {expected}")]
    WidthMismatch { expected: usize, actual: usize },
}

/// CSV row sink over any writer
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    width: usize,
}

impl CsvSink<BufWriter<File>> {
    /// Creates (or truncates) the target file and writes the header
    pub fn create(path: &Path, header: &[String]) -> Result<Self, WriteError> {
        let file = File::create(path).map_err(|source| WriteError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), columns = header.len(), "Opened Pivotal Tracker .CSV file");
        Self::new(BufWriter::new(file), header)
    }
}

impl<W: Write> CsvSink<W> {
    /// Wraps a writer and writes the header
    pub fn new(writer: W, header: &[String]) -> Result<Self, WriteError> {
        let mut writer = csv::WriterBuilder::new().flexible(false).from_writer(writer);
        writer.write_record(header)?;
        Ok(Self {
            writer,
            width: header.len(),
        })
    }

    /// Flushes buffered rows and returns the underlying writer
    pub fn finish(mut self) -> Result<W, WriteError> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|err| WriteError::Io(err.into_error()))
    }
}

impl<W: Write> RowSink for CsvSink<W> {
    type Error = WriteError;

    fn write_row(&mut self, row: &[String]) -> Result<(), WriteError> {
        if row.len() != self.width {
            return Err(WriteError::WidthMismatch {
                expected: self.width,
                actual: row.len(),
            });
        }
        self.writer.write_record(row)?;
        Ok(())
    }
}
