//! Trello board export model
//!
//! Only the parts of the export that feed the Pivotal Tracker import are
//! modelled; everything else in the document is ignored on deserialization.

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of a Trello board export
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub cards: Vec<Card>,
    pub lists: Vec<List>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checklists: Vec<Checklist>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<Action>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<Member>,
}

/// A Trello card, which becomes one Pivotal Tracker story
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    pub id_list: String,
    /// Label ids in board order; may repeat
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_members: Vec<String>,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub closed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_last_activity: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attachment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// A Trello list (board column)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct List {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub closed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Label {
    pub id: String,
    /// Absent names render as "unnamed"; present but empty names are skipped
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_card: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub check_items: Vec<CheckItem>,
}

/// A single task entry of a checklist
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// "complete" or "incomplete" in Trello exports
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
}

/// A logged board event
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ActionData,
    #[serde(default)]
    pub member_creator: Option<ActionMember>,
}

impl Action {
    pub const COMMENT: &'static str = "commentCard";

    /// Returns true if this is a comment on the given card
    pub fn is_comment_on(&self, card_id: &str) -> bool {
        self.kind == Self::COMMENT
            && self.data.card.as_ref().is_some_and(|card| card.id == card_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionData {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub card: Option<ActionCard>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionCard {
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionMember {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn card_deserializes_with_sparse_fields() {
        let card: Card = serde_json::from_value(json!({
            "id": "c1",
            "name": "Sparse",
            "idList": "l1",
            "due": null
        }))
        .unwrap();

        assert_eq!(card.id_list, "l1");
        assert!(card.desc.is_empty());
        assert!(card.id_labels.is_empty());
        assert!(card.due.is_none());
        assert!(!card.closed);
    }

    #[test]
    fn explicit_nulls_read_as_defaults() {
        let board: Board = serde_json::from_value(json!({
            "cards": [{
                "id": "c1",
                "name": "Nulls",
                "idList": "l1",
                "desc": null,
                "url": null,
                "attachments": [{"url": null}],
                "idLabels": null,
                "closed": null
            }],
            "lists": [{"id": "l1", "name": null, "closed": null}],
            "checklists": [{
                "id": "k1",
                "idCard": "c1",
                "checkItems": [{"name": null, "state": null}]
            }],
            "actions": [{
                "id": "a1",
                "type": "commentCard",
                "date": null,
                "data": {"text": "hi", "card": {"id": "c1"}},
                "memberCreator": {"fullName": null}
            }],
            "members": [{"id": "m1", "fullName": null}],
            "labels": null
        }))
        .unwrap();

        let card = &board.cards[0];
        assert!(card.desc.is_empty());
        assert!(card.url.is_empty());
        assert!(card.attachments[0].url.is_empty());
        assert!(card.id_labels.is_empty());
        assert!(board.lists[0].name.is_empty());
        assert!(board.checklists[0].check_items[0].state.is_empty());
        assert!(board.labels.is_empty());
        assert!(board.members[0].full_name.is_empty());

        let action = &board.actions[0];
        assert!(action.is_comment_on("c1"));
        assert_eq!(action.member_creator.as_ref().map(|m| m.full_name.as_str()), Some(""));
    }

    #[test]
    fn card_missing_list_is_rejected() {
        let result: Result<Card, _> = serde_json::from_value(json!({"id": "c1", "name": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn board_defaults_optional_collections() {
        let board: Board = serde_json::from_value(json!({"cards": [], "lists": []})).unwrap();
        assert!(board.labels.is_empty());
        assert!(board.actions.is_empty());
    }

    #[test]
    fn comment_action_matches_its_card() {
        let action: Action = serde_json::from_value(json!({
            "id": "a1",
            "type": "commentCard",
            "date": "2020-01-01T00:00:00.000Z",
            "data": {"text": "hi", "card": {"id": "c1"}},
            "memberCreator": {"fullName": "Ann"}
        }))
        .unwrap();

        assert!(action.is_comment_on("c1"));
        assert!(!action.is_comment_on("c2"));
    }

    #[test]
    fn non_comment_action_is_ignored() {
        let action: Action = serde_json::from_value(json!({
            "id": "a1",
            "type": "updateCard",
            "data": {"card": {"id": "c1"}}
        }))
        .unwrap();

        assert!(!action.is_comment_on("c1"));
    }
}
