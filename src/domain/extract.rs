//! Field extractors
//!
//! Pure functions deriving each Pivotal Tracker column from a card and the
//! board index. Sparse source data never fails an extraction; it degrades to
//! an empty value or a fixed placeholder instead.

use super::board::Card;
use super::comment::{self, Comment};
use super::index::BoardIndex;
use super::state;
use super::story::{StoryState, StoryType, TaskStatus};

/// Placeholder for labels without a name or unknown label ids
pub const UNNAMED_LABEL: &str = "unnamed";

/// Placeholder for member ids missing from the board
pub const UNKNOWN_MEMBER: &str = "Unknown";

/// A story task taken from a checklist item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub status: TaskStatus,
}

pub fn title(card: &Card) -> String {
    card.name.clone()
}

/// Card description with links back to the card and its attachments
pub fn description(card: &Card) -> String {
    let mut desc = format!("{}\n\nImported from Trello Card: {}", card.desc, card.url);
    for attachment in &card.attachments {
        desc.push_str("\n\nAttachment: ");
        desc.push_str(&attachment.url);
    }
    desc
}

/// Names of the card's labels in card order
///
/// Unknown ids and labels without a name yield "unnamed"; labels whose name
/// is present but empty are dropped.
pub fn label_names<'a>(card: &'a Card, index: &BoardIndex<'a>) -> Vec<&'a str> {
    card.id_labels
        .iter()
        .map(|id| {
            index
                .label(id)
                .and_then(|label| label.name.as_deref())
                .unwrap_or(UNNAMED_LABEL)
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Value of the Labels column
///
/// Label names, then the due date (date part only) when set, then the name
/// of the card's list, joined with ", ".
pub fn labels(card: &Card, index: &BoardIndex<'_>) -> String {
    let mut parts: Vec<&str> = label_names(card, index);

    if let Some(due) = card.due.as_deref().filter(|due| !due.is_empty()) {
        parts.push(due.split('T').next().unwrap_or(due));
    }

    parts.push(epic_name(card, index));
    parts.join(", ")
}

/// Name of the list holding the card, empty if the list is unknown
pub fn epic_name<'a>(card: &Card, index: &BoardIndex<'a>) -> &'a str {
    index
        .list(&card.id_list)
        .map(|list| list.name.as_str())
        .unwrap_or_default()
}

/// Infers the story type from the rendered Labels column
///
/// "debt" anywhere makes a chore and outranks "bug", which makes a bug.
pub fn story_type(labels: &str) -> StoryType {
    let labels = labels.to_lowercase();
    if labels.contains("debt") {
        StoryType::Chore
    } else if labels.contains("bug") {
        StoryType::Bug
    } else {
        StoryType::Feature
    }
}

pub fn story_state(card: &Card, index: &BoardIndex<'_>, story_type: StoryType) -> StoryState {
    state::classify(
        label_names(card, index),
        index.list(&card.id_list),
        card.closed,
        story_type,
    )
}

/// Created-at date: last activity for every state except Accepted
pub fn created_at(card: &Card, state: StoryState) -> String {
    if state.is_accepted() {
        String::new()
    } else {
        card.date_last_activity.clone()
    }
}

/// Accepted-at date: last activity for Accepted stories only
pub fn accepted_at(card: &Card, state: StoryState) -> String {
    if state.is_accepted() {
        card.date_last_activity.clone()
    } else {
        String::new()
    }
}

/// Full names of the card's members, in card order
pub fn owners(card: &Card, index: &BoardIndex<'_>) -> Vec<String> {
    card.id_members
        .iter()
        .map(|id| {
            index
                .member(id)
                .map(|member| member.full_name.clone())
                .unwrap_or_else(|| UNKNOWN_MEMBER.to_string())
        })
        .collect()
}

/// All checklist items of the card, checklist by checklist
pub fn tasks(card: &Card, index: &BoardIndex<'_>) -> Vec<Task> {
    index
        .checklists_for(&card.id)
        .iter()
        .flat_map(|checklist| &checklist.check_items)
        .map(|item| Task {
            name: item.name.clone(),
            status: TaskStatus::from_check_state(&item.state),
        })
        .collect()
}

/// Total number of checklist items owned by the card
pub fn task_count(card: &Card, index: &BoardIndex<'_>) -> usize {
    index
        .checklists_for(&card.id)
        .iter()
        .map(|checklist| checklist.check_items.len())
        .sum()
}

/// Comments on the card, newest first
pub fn comments(card: &Card, index: &BoardIndex<'_>) -> Vec<Comment> {
    comment::newest_first(index.comments_for(&card.id).iter().copied())
}
