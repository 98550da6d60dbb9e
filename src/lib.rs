//! trello2pivotal - Convert a Trello board export into a Pivotal Tracker import
//!
//! Reads the board JSON once, indexes its entities, and writes one CSV row
//! per card followed by one "epic" row per list. Story type, state, owners,
//! tasks and comments are inferred from Trello's data model.

pub mod domain;
pub mod export;
pub mod storage;
pub mod cli;

pub use domain::{Board, BoardIndex, StoryState, StoryType, TaskStatus};
pub use export::{ColumnLayout, ConversionSummary, ConvertOptions, Converter};
