//! CSV column layout
//!
//! The header has eight fixed columns followed by three groups of repeated
//! slots. Every row, card or epic, must have exactly as many values as the
//! header, so the slot counts are fixed before the first row is written:
//!
//! ```text
//! Title, Type, Description, Labels, Current State, Created at, Accepted at, Estimate,
//! (Task, Task Status) x task_slots,
//! Owned By x 10,
//! Comment x 51
//! ```
//!
//! Column names repeat; consumers must address columns by position.

use std::iter;

/// The leading columns present in every import
pub const FIXED_COLUMNS: [&str; 8] = [
    "Title",
    "Type",
    "Description",
    "Labels",
    "Current State",
    "Created at",
    "Accepted at",
    "Estimate",
];

pub const TASK_COLUMN: &str = "Task";
pub const TASK_STATUS_COLUMN: &str = "Task Status";
pub const OWNER_COLUMN: &str = "Owned By";
pub const COMMENT_COLUMN: &str = "Comment";

/// Number of "Owned By" slots per row
pub const OWNER_SLOTS: usize = 10;

/// Number of "Comment" slots per row
pub const COMMENT_SLOTS: usize = 51;

/// Column layout of one board's import file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    task_slots: usize,
}

impl ColumnLayout {
    /// Creates a layout with room for `task_slots` task/status pairs
    pub fn new(task_slots: usize) -> Self {
        Self { task_slots }
    }

    pub fn task_slots(&self) -> usize {
        self.task_slots
    }

    pub fn owner_slots(&self) -> usize {
        OWNER_SLOTS
    }

    pub fn comment_slots(&self) -> usize {
        COMMENT_SLOTS
    }

    /// Total number of columns
    pub fn width(&self) -> usize {
        FIXED_COLUMNS.len() + 2 * self.task_slots + self.owner_slots() + self.comment_slots()
    }

    /// Column names in order
    pub fn header(&self) -> Vec<String> {
        let mut columns: Vec<String> = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();
        columns.reserve(self.width() - FIXED_COLUMNS.len());

        for _ in 0..self.task_slots {
            columns.push(TASK_COLUMN.to_string());
            columns.push(TASK_STATUS_COLUMN.to_string());
        }
        columns.extend(iter::repeat(OWNER_COLUMN.to_string()).take(self.owner_slots()));
        columns.extend(iter::repeat(COMMENT_COLUMN.to_string()).take(self.comment_slots()));
        columns
    }
}

/// Fits `values` into exactly `width` slots
///
/// Extra values are dropped and missing ones are filled with empty strings.
pub fn pad_slots<I>(values: I, width: usize) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = String>,
{
    values
        .into_iter()
        .chain(iter::repeat_with(String::new))
        .take(width)
}
