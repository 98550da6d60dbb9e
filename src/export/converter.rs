//! Row building
//!
//! Turns a board into Pivotal Tracker rows: one story row per card in board
//! order, then one epic row per list.

use std::cell::OnceCell;
use std::iter;

use serde::Serialize;
use tracing::{debug, info};

use super::layout::{pad_slots, ColumnLayout};
use crate::domain::{extract, Board, BoardIndex, Card, List, StoryType};

/// Value of the Estimate column for every row
pub const ESTIMATE: &str = "0";

/// Destination for CSV rows
///
/// The header is handed over when the sink is opened; `write_row` is then
/// called once per row in output order.
pub trait RowSink {
    type Error;

    fn write_row(&mut self, row: &[String]) -> Result<(), Self::Error>;
}

/// Counts reported after a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub card_rows: usize,
    pub epic_rows: usize,
    pub task_slots: usize,
    pub columns: usize,
}

impl ConversionSummary {
    pub fn rows_written(&self) -> usize {
        self.card_rows + self.epic_rows
    }
}

/// Converts one board into Pivotal Tracker rows
pub struct Converter<'a> {
    board: &'a Board,
    index: BoardIndex<'a>,
    max_task_slots: OnceCell<usize>,
}

impl<'a> Converter<'a> {
    /// Indexes the board; must happen before any row is built
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            index: BoardIndex::build(board),
            max_task_slots: OnceCell::new(),
        }
    }

    pub fn index(&self) -> &BoardIndex<'a> {
        &self.index
    }

    /// Largest number of checklist items owned by any single card
    ///
    /// Computed on first use and cached for the rest of the run.
    pub fn max_task_slots(&self) -> usize {
        *self.max_task_slots.get_or_init(|| {
            let max = self
                .board
                .cards
                .iter()
                .map(|card| extract::task_count(card, &self.index))
                .max()
                .unwrap_or(0);
            debug!(task_slots = max, "Will allocate Task/Status column pairs");
            max
        })
    }

    pub fn layout(&self) -> ColumnLayout {
        ColumnLayout::new(self.max_task_slots())
    }

    /// Header row for this board
    pub fn header(&self) -> Vec<String> {
        let header = self.layout().header();
        debug!(columns = header.len(), "Will allocate column names for CSV file");
        header
    }

    /// Builds the story row for a card
    pub fn card_row(&self, card: &Card) -> Vec<String> {
        let layout = self.layout();
        let index = &self.index;

        let tasks = extract::tasks(card, index);
        let comments = extract::comments(card, index);
        let owners = extract::owners(card, index);
        let labels = extract::labels(card, index);
        let story_type = extract::story_type(&labels);
        let state = extract::story_state(card, index, story_type);

        let mut row = Vec::with_capacity(layout.width());
        row.push(extract::title(card));
        row.push(story_type.to_string());
        row.push(extract::description(card));
        row.push(labels);
        row.push(state.to_string());
        row.push(extract::created_at(card, state));
        row.push(extract::accepted_at(card, state));
        row.push(ESTIMATE.to_string());

        let task_cells = tasks
            .into_iter()
            .flat_map(|task| [task.name, task.status.to_string()]);
        row.extend(pad_slots(task_cells, 2 * layout.task_slots()));
        row.extend(pad_slots(owners, layout.owner_slots()));
        row.extend(pad_slots(
            comments.iter().map(|comment| comment.render()),
            layout.comment_slots(),
        ));
        row
    }

    /// Builds the epic row for a list
    ///
    /// Epics carry no labels, state or dates and leave every slot empty.
    pub fn epic_row(&self, list: &List) -> Vec<String> {
        let layout = self.layout();

        let mut row = Vec::with_capacity(layout.width());
        row.push(list.name.clone());
        row.push(StoryType::Epic.to_string());
        row.push(list.name.clone());
        row.push(String::new());
        row.push(String::new());
        row.push(String::new());
        row.push(String::new());
        row.push(ESTIMATE.to_string());

        row.extend(pad_slots(iter::empty(), 2 * layout.task_slots()));
        row.extend(pad_slots(iter::empty(), layout.owner_slots()));
        row.extend(pad_slots(iter::empty(), layout.comment_slots()));
        row
    }

    /// All rows in output order: cards first, then epics
    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        let cards = self.board.cards.iter().map(move |card| self.card_row(card));
        let epics = self.board.lists.iter().map(move |list| self.epic_row(list));
        cards.chain(epics)
    }

    /// Writes every row to the sink and reports what was written
    pub fn write_to<S: RowSink>(&self, sink: &mut S) -> Result<ConversionSummary, S::Error> {
        for row in self.rows() {
            sink.write_row(&row)?;
        }

        let card_rows = self.board.cards.len();
        let epic_rows = self.board.lists.len();
        let summary = ConversionSummary {
            card_rows,
            epic_rows,
            task_slots: self.max_task_slots(),
            columns: self.layout().width(),
        };
        info!(
            card_rows,
            epic_rows,
            rows = summary.rows_written(),
            "Wrote rows"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn board(value: serde_json::Value) -> Board {
        serde_json::from_value(value).unwrap()
    }

    /// Collects rows in memory
    #[derive(Default)]
    struct VecSink(Vec<Vec<String>>);

    impl RowSink for VecSink {
        type Error = std::convert::Infallible;

        fn write_row(&mut self, row: &[String]) -> Result<(), Self::Error> {
            self.0.push(row.to_vec());
            Ok(())
        }
    }

    fn done_bug_board() -> Board {
        board(json!({
            "cards": [{
                "id": "c1",
                "name": "Crash on save",
                "desc": "",
                "url": "https://trello.com/c/1",
                "attachments": [],
                "idList": "l1",
                "idLabels": ["b1"],
                "idMembers": ["m1"],
                "due": null,
                "closed": false,
                "dateLastActivity": "2021-04-01T10:00:00.000Z"
            }],
            "lists": [{"id": "l1", "name": "Done", "closed": false}],
            "labels": [{"id": "b1", "name": "Bug"}],
            "checklists": [],
            "actions": [],
            "members": [{"id": "m1", "fullName": "Ann Lee"}]
        }))
    }

    #[test]
    fn accepted_bug_row() {
        let board = done_bug_board();
        let converter = Converter::new(&board);
        let row = converter.card_row(&board.cards[0]);

        assert_eq!(converter.max_task_slots(), 0);
        assert_eq!(row.len(), converter.header().len());
        assert_eq!(row[0], "Crash on save");
        assert_eq!(row[1], "Bug");
        assert_eq!(row[3], "Bug, Done");
        assert_eq!(row[4], "Accepted");
        assert_eq!(row[5], "");
        assert_eq!(row[6], "2021-04-01T10:00:00.000Z");
        assert_eq!(row[7], "0");
        assert_eq!(row[8], "Ann Lee");
        assert!(row[9..18].iter().all(String::is_empty));
        assert!(row[18..].iter().all(String::is_empty));
        assert_eq!(row[18..].len(), 51);
    }

    #[test]
    fn epics_follow_cards() {
        let board = board(json!({
            "cards": [],
            "lists": [{"id": "l1", "name": "Backlog"}, {"id": "l2", "name": "Done"}]
        }));
        let converter = Converter::new(&board);
        let mut sink = VecSink::default();

        let summary = converter.write_to(&mut sink).unwrap();

        assert_eq!(summary.card_rows, 0);
        assert_eq!(summary.epic_rows, 2);
        assert_eq!(sink.0.len(), 2);
        for (row, name) in sink.0.iter().zip(["Backlog", "Done"]) {
            assert_eq!(row[0], name);
            assert_eq!(row[1], "epic");
            assert_eq!(row[2], name);
            assert_eq!(row[7], "0");
            assert_eq!(row.len(), summary.columns);
            assert!(row[3..7].iter().all(String::is_empty));
            assert!(row[8..].iter().all(String::is_empty));
        }
    }

    #[test]
    fn task_slots_cover_largest_card() {
        let board = board(json!({
            "cards": [
                {"id": "c1", "name": "one", "idList": "l1"},
                {"id": "c2", "name": "two", "idList": "l1"}
            ],
            "lists": [{"id": "l1", "name": "Ready"}],
            "checklists": [
                {"id": "k1", "idCard": "c1", "checkItems": [{"name": "a", "state": "complete"}]},
                {"id": "k2", "idCard": "c2", "checkItems": [{"name": "b", "state": "incomplete"}]},
                {"id": "k3", "idCard": "c2", "checkItems": [{"name": "c", "state": "complete"}]}
            ]
        }));
        let converter = Converter::new(&board);

        assert_eq!(converter.max_task_slots(), 2);

        let first = converter.card_row(&board.cards[0]);
        assert_eq!(&first[8..12], ["a", "completed", "", ""]);

        let second = converter.card_row(&board.cards[1]);
        assert_eq!(&second[8..12], ["b", "Not Completed", "c", "completed"]);
        assert_eq!(second[4], "Unstarted");
        assert_eq!(second.len(), converter.layout().width());
    }

    #[test]
    fn comments_fill_slots_newest_first() {
        let board = board(json!({
            "cards": [{"id": "c1", "name": "one", "idList": "l1"}],
            "lists": [{"id": "l1", "name": "Backlog"}],
            "actions": [
                {"id": "a1", "type": "commentCard", "date": "2020-01-01T00:00:00Z",
                 "data": {"text": "T1", "card": {"id": "c1"}}, "memberCreator": {"fullName": "A"}},
                {"id": "a3", "type": "commentCard", "date": "2020-01-03T00:00:00Z",
                 "data": {"text": "T3", "card": {"id": "c1"}}, "memberCreator": {"fullName": "A"}},
                {"id": "a2", "type": "commentCard", "date": "2020-01-02T00:00:00Z",
                 "data": {"text": "T2", "card": {"id": "c1"}}, "memberCreator": {"fullName": "A"}}
            ]
        }));
        let converter = Converter::new(&board);
        let row = converter.card_row(&board.cards[0]);
        let comments = &row[18..];

        assert!(comments[0].starts_with("T3\n"));
        assert!(comments[1].starts_with("T2\n"));
        assert!(comments[2].starts_with("T1\n"));
        assert!(comments[3..].iter().all(String::is_empty));
    }

    #[test]
    fn owners_beyond_ten_are_dropped() {
        let ids: Vec<String> = (0..12).map(|n| format!("m{n}")).collect();
        let members: Vec<_> = ids
            .iter()
            .map(|id| json!({"id": id, "fullName": format!("Member {id}")}))
            .collect();
        let board = board(json!({
            "cards": [{"id": "c1", "name": "crowded", "idList": "l1", "idMembers": ids}],
            "lists": [{"id": "l1", "name": "Backlog"}],
            "members": members
        }));
        let converter = Converter::new(&board);
        let row = converter.card_row(&board.cards[0]);

        assert_eq!(row[8], "Member m0");
        assert_eq!(row[17], "Member m9");
        assert_eq!(row.len(), converter.layout().width());
    }

    #[test]
    fn rows_are_cards_then_epics() {
        let board = done_bug_board();
        let converter = Converter::new(&board);
        let titles: Vec<_> = converter.rows().map(|row| row[0].clone()).collect();

        assert_eq!(titles, ["Crash on save", "Done"]);
    }

    #[test]
    fn written_rows_match_built_rows() {
        let board = done_bug_board();
        let converter = Converter::new(&board);
        let mut sink = VecSink::default();

        let summary = converter.write_to(&mut sink).unwrap();

        assert_eq!(sink.0, converter.rows().collect::<Vec<_>>());
        assert_eq!(summary.card_rows, 1);
        assert_eq!(summary.epic_rows, 1);
        assert_eq!(summary.rows_written(), sink.0.len());
    }

    #[test]
    fn epic_rows_pad_every_slot_group() {
        let board = board(json!({
            "cards": [{"id": "c1", "name": "one", "idList": "l1"}],
            "lists": [{"id": "l1", "name": "Ready"}],
            "checklists": [
                {"id": "k1", "idCard": "c1", "checkItems": [
                    {"name": "a", "state": "complete"},
                    {"name": "b", "state": "incomplete"}
                ]}
            ]
        }));
        let converter = Converter::new(&board);
        let row = converter.epic_row(&board.lists[0]);

        assert_eq!(converter.max_task_slots(), 2);
        assert_eq!(row.len(), converter.header().len());
        assert_eq!(row.len(), 8 + 4 + 10 + 51);
        assert!(row[8..].iter().all(String::is_empty));
    }
}
