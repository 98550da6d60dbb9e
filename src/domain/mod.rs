//! Domain models for trello2pivotal
//!
//! The Trello board model and the rules mapping it onto Pivotal Tracker
//! stories, without any I/O concerns.

mod board;
pub mod comment;
pub mod extract;
mod index;
pub mod state;
mod story;

pub use board::{
    Action, ActionCard, ActionData, ActionMember, Attachment, Board, Card, CheckItem, Checklist,
    Label, List, Member,
};
pub use comment::Comment;
pub use extract::Task;
pub use index::{index_by_id, BoardIndex, Identified};
pub use story::{StoryState, StoryType, TaskStatus};
