//! # Pivotal Tracker Export
//!
//! Builds the Pivotal Tracker CSV layout and rows from an indexed board.
//!
//! ## Output Order
//!
//! 1. Header (see [`ColumnLayout`])
//! 2. One story row per card, in board order
//! 3. One epic row per list, in board order
//!
//! Every row has exactly [`ColumnLayout::width`] values.

mod converter;
mod layout;
mod options;

pub use converter::{ConversionSummary, Converter, RowSink, ESTIMATE};
pub use layout::{pad_slots, ColumnLayout, COMMENT_SLOTS, FIXED_COLUMNS, OWNER_SLOTS};
pub use options::{ConvertError, ConvertOptions};
