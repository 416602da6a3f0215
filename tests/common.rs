//! Common test helpers for integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Reference layout used across the integration tests: three slots expecting
/// CardTypeA / {CardTypeB, CardTypeC} / CardTypeB, limits {A:1, B:2, C:1}.
pub const REFERENCE_LAYOUT: &str = r#"{
    "layoutType": "bento-1-2",
    "targetContentType": "tabsContainer",
    "positions": {
        "leftColumnFullHeightCard": { "index": 0, "expectedTypes": ["CardTypeA"] },
        "rightColumnTopCard": { "index": 1, "expectedTypes": ["CardTypeB", "CardTypeC"] },
        "rightColumnBottomCard": { "index": 2, "expectedTypes": ["CardTypeB"] }
    },
    "limits": {
        "totalEntries": 3,
        "typeLimits": { "CardTypeA": 1, "CardTypeB": 2, "CardTypeC": 1 }
    }
}"#;

/// Write a fixture file into the test directory and return its path.
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture dir");
    }
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Serialize a list of (id, contentType) pairs as a flat card document.
pub fn card_document(entries: &[(&str, &str)]) -> String {
    let cards: Vec<serde_json::Value> = entries
        .iter()
        .map(|(id, ty)| serde_json::json!({ "id": id, "contentType": ty }))
        .collect();
    serde_json::to_string_pretty(&cards).expect("Failed to serialize cards")
}
