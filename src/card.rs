//! Card entry model and card document loading.
//!
//! A card is a reference to a content entry, exposing only its identifier and
//! content type. Card documents come in two shapes: the flat form this tool
//! writes, and the host-entry form produced by exporting resolved entries
//! from a CMS, where the content type sits under nested `sys` objects.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::layout::is_yaml;

/// One entry placed into a layout slot.
///
/// Sequence position in the card list encodes the slot index; the entry
/// itself carries no position of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEntry {
    pub id: String,
    pub content_type: String,
}

impl CardEntry {
    pub fn new(id: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content_type: content_type.into(),
        }
    }
}

/// The two accepted document shapes for a card.
///
/// Flat: `{ "id": "...", "contentType": "..." }`
/// Host entry: `{ "sys": { "id": "...", "contentType": { "sys": { "id": "..." } } } }`
#[derive(Deserialize)]
#[serde(untagged)]
enum CardForm {
    Flat {
        id: String,
        #[serde(rename = "contentType")]
        content_type: String,
    },
    HostEntry {
        sys: EntrySys,
    },
}

#[derive(Deserialize)]
struct EntrySys {
    id: String,
    #[serde(rename = "contentType")]
    content_type: TypeLink,
}

#[derive(Deserialize)]
struct TypeLink {
    sys: TypeLinkSys,
}

#[derive(Deserialize)]
struct TypeLinkSys {
    id: String,
}

impl<'de> Deserialize<'de> for CardEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let form = CardForm::deserialize(deserializer)?;
        Ok(match form {
            CardForm::Flat { id, content_type } => CardEntry { id, content_type },
            CardForm::HostEntry { sys } => CardEntry {
                id: sys.id,
                content_type: sys.content_type.sys.id,
            },
        })
    }
}

/// Load an ordered card list from a JSON or YAML file.
///
/// The document must be an array; each element may use either card shape.
pub fn load_cards(path: &Path) -> Result<Vec<CardEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read card document from {}", path.display()))?;

    if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse card document {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse card document {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_form() {
        let json = r#"{ "id": "card1", "contentType": "CardTypeA" }"#;
        let card: CardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(card, CardEntry::new("card1", "CardTypeA"));
    }

    #[test]
    fn test_host_entry_form() {
        let json = r#"{
            "sys": {
                "id": "card1",
                "contentType": { "sys": { "id": "CardTypeA" } }
            }
        }"#;
        let card: CardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(card, CardEntry::new("card1", "CardTypeA"));
    }

    #[test]
    fn test_both_forms_in_one_document() {
        let json = r#"[
            { "id": "card1", "contentType": "CardTypeA" },
            { "sys": { "id": "card2", "contentType": { "sys": { "id": "CardTypeB" } } } }
        ]"#;
        let cards: Vec<CardEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(
            cards,
            vec![
                CardEntry::new("card1", "CardTypeA"),
                CardEntry::new("card2", "CardTypeB"),
            ]
        );
    }

    #[test]
    fn test_serializes_flat() {
        let card = CardEntry::new("card1", "CardTypeA");
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"id":"card1","contentType":"CardTypeA"}"#);
    }

    #[test]
    fn test_load_cards_rejects_non_array() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(&path, r#"{ "id": "card1", "contentType": "CardTypeA" }"#).unwrap();

        let err = load_cards(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse card document"));
    }

    #[test]
    fn test_load_cards_yaml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cards.yml");
        fs::write(
            &path,
            "- id: card1\n  contentType: CardTypeA\n- id: card2\n  contentType: CardTypeB\n",
        )
        .unwrap();

        let cards = load_cards(&path).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].content_type, "CardTypeB");
    }
}
