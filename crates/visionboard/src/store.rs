use std::path::{Path, PathBuf};

use otter::{Card, CardKind};
use serde_json::Value;

use crate::error::Result;

/// Durable storage for the card collection.
pub trait BoardStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<Card>>>;
    fn save(&self, cards: &[Card]) -> Result<()>;
}

/// Stores the board as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<Card>>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(cards_from_json_str(&text)?))
    }

    fn save(&self, cards: &[Card]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(cards)?;
        std::fs::write(&self.path, text)?;
        tracing::debug!(path = %self.path.display(), cards = cards.len(), "board saved");
        Ok(())
    }
}

/// Parses a saved board, keeping only entries that are recognizable cards.
///
/// Entries with an unknown `type` (or otherwise stale shape) are dropped rather than failing the
/// whole board; only malformed JSON or a non-array document is an error.
pub fn cards_from_json_str(text: &str) -> Result<Vec<Card>> {
    let entries: Vec<Value> = serde_json::from_str(text)?;
    let total = entries.len();

    let cards: Vec<Card> = entries
        .into_iter()
        .filter_map(|entry| {
            let kind = entry.get("type").and_then(Value::as_str);
            if kind.and_then(CardKind::parse).is_none() {
                tracing::warn!(kind = ?kind, "dropping saved entry with unknown card type");
                return None;
            }
            match serde_json::from_value::<Card>(entry) {
                Ok(card) => Some(card),
                Err(err) => {
                    tracing::warn!(%err, "dropping malformed saved card");
                    None
                }
            }
        })
        .collect();

    if cards.len() != total {
        tracing::info!(kept = cards.len(), total, "restored board with dropped entries");
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::cards_from_json_str;
    use otter::CardKind;

    #[test]
    fn unknown_kinds_and_stale_shapes_are_filtered() {
        let text = r#"[
            {"id":"1","type":"state","label":"Calm","x":1,"y":2},
            {"id":"2","type":"goal","label":"Old goal node","x":1,"y":2},
            {"id":"3","label":"No type","x":1,"y":2},
            {"id":"4","type":"identity","label":"Missing position"},
            {"id":"5","type":"identity","label":"Builder","x":3,"y":4,"connections":["1"]}
        ]"#;
        let cards = cards_from_json_str(text).expect("parse");
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
        assert_eq!(cards[1].kind, CardKind::Identity);
        assert_eq!(cards[1].connections, vec!["1".to_string()]);
    }

    #[test]
    fn non_array_document_is_an_error() {
        assert!(cards_from_json_str(r#"{"cards": []}"#).is_err());
        assert!(cards_from_json_str("not json").is_err());
    }
}
