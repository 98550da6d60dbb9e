//! Story state classification
//!
//! A card's Pivotal Tracker state is derived from its labels first, then
//! from the name and closed flag of the list it sits in. Rules are checked
//! in order and the first match wins:
//!
//! | Check | State |
//! |-------|-------|
//! | label `done` | Accepted |
//! | label `started`, `on stage`, `on dev` | Started |
//! | list name contains `done` or `released` | Accepted |
//! | list is closed | Accepted |
//! | list name contains `review` | Delivered (Started for chores) |
//! | list name contains `active` or `started` | Started |
//! | list name contains `ready` | Unstarted |
//! | list name contains `backlog` or `icebox` | Unscheduled |
//! | card is closed | Accepted |
//! | otherwise | Unscheduled |

use super::board::List;
use super::story::{StoryState, StoryType};

/// Classifies a card into a story state
///
/// `label_names` are the card's rendered label names in card order. A card
/// whose list is missing from the board is treated as sitting in an open,
/// unnamed list.
pub fn classify<'l>(
    label_names: impl IntoIterator<Item = &'l str>,
    list: Option<&List>,
    card_closed: bool,
    story_type: StoryType,
) -> StoryState {
    if let Some(state) = state_from_labels(label_names) {
        return state;
    }

    let (list_name, list_closed) = match list {
        Some(list) => (list.name.to_lowercase(), list.closed),
        None => (String::new(), false),
    };

    if list_name.contains("done") || list_name.contains("released") {
        StoryState::Accepted
    } else if list_closed {
        StoryState::Accepted
    } else if list_name.contains("review") {
        // Chores cannot be delivered
        if story_type == StoryType::Chore {
            StoryState::Started
        } else {
            StoryState::Delivered
        }
    } else if list_name.contains("active") || list_name.contains("started") {
        StoryState::Started
    } else if list_name.contains("ready") {
        StoryState::Unstarted
    } else if list_name.contains("backlog") || list_name.contains("icebox") {
        StoryState::Unscheduled
    } else if card_closed {
        StoryState::Accepted
    } else {
        StoryState::Unscheduled
    }
}

fn state_from_labels<'l>(label_names: impl IntoIterator<Item = &'l str>) -> Option<StoryState> {
    label_names
        .into_iter()
        .find_map(|name| match name.to_lowercase().as_str() {
            "done" => Some(StoryState::Accepted),
            "started" | "on stage" | "on dev" => Some(StoryState::Started),
            _ => None,
        })
}
