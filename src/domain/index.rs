//! Id-keyed lookup tables over a board
//!
//! Every table is built once from the board before any row is produced and
//! is read-only afterwards. Duplicate ids overwrite earlier entries.

use std::collections::HashMap;

use tracing::debug;

use super::board::{Action, Board, Checklist, Label, List, Member};

/// Board entities that carry a Trello id
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),*) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_identified!(Checklist, Label, List, Action, Member);

/// Builds a mapping from id to entity; the last entity with a given id wins
pub fn index_by_id<T: Identified>(items: &[T]) -> HashMap<&str, &T> {
    items.iter().map(|item| (item.id(), item)).collect()
}

/// All lookup tables needed by the field extractors
#[derive(Debug)]
pub struct BoardIndex<'a> {
    pub checklists: HashMap<&'a str, &'a Checklist>,
    pub labels: HashMap<&'a str, &'a Label>,
    pub lists: HashMap<&'a str, &'a List>,
    pub actions: HashMap<&'a str, &'a Action>,
    pub members: HashMap<&'a str, &'a Member>,
    checklists_by_card: HashMap<&'a str, Vec<&'a Checklist>>,
    comments_by_card: HashMap<&'a str, Vec<&'a Action>>,
}

impl<'a> BoardIndex<'a> {
    /// Indexes every entity collection of the board
    pub fn build(board: &'a Board) -> Self {
        let checklists = index_by_id(&board.checklists);
        debug!(count = checklists.len(), "Did cache checklists");
        let labels = index_by_id(&board.labels);
        debug!(count = labels.len(), "Did cache labels");
        let lists = index_by_id(&board.lists);
        debug!(count = lists.len(), "Did cache lists");
        let actions = index_by_id(&board.actions);
        debug!(count = actions.len(), "Did cache actions");
        let members = index_by_id(&board.members);
        debug!(count = members.len(), "Did cache members");

        // Group in board order, skipping entries shadowed by a duplicate id
        let mut checklists_by_card: HashMap<&str, Vec<&Checklist>> = HashMap::new();
        for checklist in &board.checklists {
            if is_indexed(&checklists, checklist) {
                checklists_by_card
                    .entry(checklist.id_card.as_str())
                    .or_default()
                    .push(checklist);
            }
        }

        let mut comments_by_card: HashMap<&str, Vec<&Action>> = HashMap::new();
        for action in &board.actions {
            if action.kind != Action::COMMENT || !is_indexed(&actions, action) {
                continue;
            }
            if let Some(card) = &action.data.card {
                comments_by_card
                    .entry(card.id.as_str())
                    .or_default()
                    .push(action);
            }
        }

        Self {
            checklists,
            labels,
            lists,
            actions,
            members,
            checklists_by_card,
            comments_by_card,
        }
    }

    /// Returns the list a card belongs to, if it exists on the board
    pub fn list(&self, id: &str) -> Option<&'a List> {
        self.lists.get(id).copied()
    }

    /// Returns the label with this id, if any
    pub fn label(&self, id: &str) -> Option<&'a Label> {
        self.labels.get(id).copied()
    }

    /// Returns the member with this id, if any
    pub fn member(&self, id: &str) -> Option<&'a Member> {
        self.members.get(id).copied()
    }

    /// Checklists owned by a card, in board order
    pub fn checklists_for(&self, card_id: &str) -> &[&'a Checklist] {
        self.checklists_by_card
            .get(card_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Comment actions targeting a card, in board order
    pub fn comments_for(&self, card_id: &str) -> &[&'a Action] {
        self.comments_by_card
            .get(card_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn is_indexed<T: Identified>(index: &HashMap<&str, &T>, item: &T) -> bool {
    index
        .get(item.id())
        .is_some_and(|indexed| std::ptr::eq(*indexed, item))
}
