//! Card comments
//!
//! Trello comments are `commentCard` actions. They are exported newest first,
//! each rendered with its creation time and author appended:
//!
//! ```text
//! Looks good to me
//! *Created at: 09:05:03, Mar 7, 2021* (Ann Lee - Mar 7, 2021)
//! ```

use chrono::{DateTime, Utc};

use super::board::Action;

/// Author shown when the comment has no creator attached
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A comment ready to be placed into a comment slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub author: String,
    /// Parsed creation time; `None` when the action date is not RFC 3339
    pub created_at: Option<DateTime<Utc>>,
    /// Creation time exactly as exported
    pub raw_date: String,
}

impl Comment {
    pub fn from_action(action: &Action) -> Self {
        let created_at = DateTime::parse_from_rfc3339(&action.date)
            .ok()
            .map(|date| date.with_timezone(&Utc));

        Self {
            text: action.data.text.clone().unwrap_or_default(),
            author: action
                .member_creator
                .as_ref()
                .map(|member| member.full_name.clone())
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            created_at,
            raw_date: action.date.clone(),
        }
    }

    /// Renders the comment text followed by its creation line
    pub fn render(&self) -> String {
        let (time, day) = match self.created_at {
            Some(date) => (
                date.format("%H:%M:%S").to_string(),
                date.format("%b %-d, %Y").to_string(),
            ),
            None => (self.raw_date.clone(), self.raw_date.clone()),
        };

        format!(
            "{}\n*Created at: {}, {}* ({} - {})",
            self.text, time, day, self.author, day
        )
    }
}

/// Collects comments and orders them newest first
///
/// The sort is stable: comments with equal timestamps keep their board
/// order. Comments with unparseable dates sort after all dated ones.
pub fn newest_first<'a>(actions: impl IntoIterator<Item = &'a Action>) -> Vec<Comment> {
    let mut comments: Vec<Comment> = actions.into_iter().map(Comment::from_action).collect();
    comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    comments
}
