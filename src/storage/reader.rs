//! Trello board reading
//!
//! Reads the exported board file and parses it. An empty file is rejected
//! before parsing so that the diagnostic names the real problem.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::Board;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to read Trello .JSON file: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Trello .JSON file was empty: {}", .0.display())]
    Empty(PathBuf),

    #[error("Trello board input was not valid JSON: {}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the raw bytes of a board export
pub fn read_content(path: &Path) -> Result<Vec<u8>, ReadError> {
    let content = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.is_empty() {
        return Err(ReadError::Empty(path.to_path_buf()));
    }

    debug!(bytes = content.len(), path = %path.display(), "Did read Trello .JSON file");
    Ok(content)
}

/// Parses a board export
pub fn parse_board(content: &[u8], path: &Path) -> Result<Board, ReadError> {
    let board = serde_json::from_slice(content).map_err(|source| ReadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Did parse Trello board from JSON");
    Ok(board)
}

/// A top-level attribute of a board document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardDetail {
    /// A string attribute and its value
    Text(String, String),
    /// A non-empty array attribute and its length
    Items(String, usize),
}

/// Summary of the top-level attributes of a raw board document, in document order
pub fn board_details(content: &[u8]) -> Vec<BoardDetail> {
    let Ok(serde_json::Value::Object(root)) = serde_json::from_slice::<serde_json::Value>(content)
    else {
        return Vec::new();
    };

    root.iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(s) => Some(BoardDetail::Text(key.clone(), s.clone())),
            serde_json::Value::Array(items) if !items.is_empty() => {
                Some(BoardDetail::Items(key.clone(), items.len()))
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read(path: &Path) -> Result<Board, ReadError> {
        let content = read_content(path)?;
        parse_board(&content, path)
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "").unwrap();

        let err = read(&path).unwrap_err();
        assert!(matches!(err, ReadError::Empty(_)));
        assert!(err.to_string().contains("was empty"));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read(&path).unwrap_err();
        assert!(matches!(err, ReadError::InvalidJson { .. }));
    }

    #[test]
    fn missing_cards_is_a_parse_error() {
        let err = parse_board(br#"{"lists": []}"#, Path::new("b.json")).unwrap_err();
        assert!(matches!(err, ReadError::InvalidJson { .. }));
    }

    #[test]
    fn reads_valid_board() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        let json = r#"{"cards": [{"id": "c1", "name": "x", "idList": "l1"}], "lists": []}"#;
        fs::write(&path, json).unwrap();

        let board = read(&path).unwrap();
        assert_eq!(board.cards.len(), 1);
    }

    #[test]
    fn details_list_strings_and_non_empty_arrays() {
        let details = board_details(
            br#"{"name": "Team", "closed": false, "cards": [1, 2], "lists": [], "desc": "x"}"#,
        );
        assert_eq!(
            details,
            [
                BoardDetail::Text("name".to_string(), "Team".to_string()),
                BoardDetail::Items("cards".to_string(), 2),
                BoardDetail::Text("desc".to_string(), "x".to_string())
            ]
        );
    }
}
