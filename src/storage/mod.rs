//! # Storage Layer
//!
//! File boundaries of the converter.
//!
//! ## Storage Formats
//!
//! | Data | Format | Direction |
//! |------|--------|-----------|
//! | Trello board | JSON export | read once |
//! | Pivotal Tracker import | CSV with header | written once |
//!
//! Both files are handled in a single pass. A failed run may leave a partial
//! CSV behind; the conversion is meant to be re-run from scratch.
//!
//! ## Key Types
//!
//! - [`read_content`] / [`parse_board`] - Read and parse the board export
//! - [`board_details`] - Top-level attributes of the export, in document order
//! - [`CsvSink`] - Header-checked CSV row writer

mod reader;
mod writer;

pub use reader::{board_details, parse_board, read_content, BoardDetail, ReadError};
pub use writer::{CsvSink, WriteError};
