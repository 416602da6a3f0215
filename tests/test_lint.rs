//! Structural lint and configuration tests against fixture files.

use tempfile::TempDir;

use bento::config::Config;
use bento::schema::lint_layout_file;

mod common;
use common::{write_fixture, REFERENCE_LAYOUT};

#[test]
fn test_reference_layout_is_structurally_sound() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "layout.json", REFERENCE_LAYOUT);

    let messages = lint_layout_file(&path).unwrap();
    assert!(messages.is_empty(), "unexpected messages: {:?}", messages);
}

#[test]
fn test_missing_required_sections_are_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "layout.json",
        r#"{ "layoutType": "bento-1-2", "positions": {} }"#,
    );

    let messages = lint_layout_file(&path).unwrap();
    assert!(messages.iter().any(|m| m.contains("targetContentType")));
    assert!(messages.iter().any(|m| m.contains("limits")));
}

#[test]
fn test_rule_shape_violations_are_reported_with_paths() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "layout.json",
        r#"{
            "layoutType": "bento-1",
            "targetContentType": "tabsContainer",
            "positions": {
                "hero": { "index": 0, "expectedTypes": [] }
            },
            "limits": { "totalEntries": 1, "typeLimits": {} }
        }"#,
    );

    let messages = lint_layout_file(&path).unwrap();
    assert!(messages
        .iter()
        .any(|m| m.starts_with("at '/positions/hero/expectedTypes':")));
}

#[test]
fn test_unreadable_document_is_a_loader_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let err = lint_layout_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read layout document"));
}

#[test]
fn test_config_resolves_named_layouts() {
    let dir = TempDir::new().unwrap();
    let layout_path = write_fixture(&dir, "layouts/hero.json", REFERENCE_LAYOUT);
    let config_path = write_fixture(
        &dir,
        "config.md",
        &format!(
            "---\nlayouts:\n  hero: {}\n---\n\n# Layouts\n",
            layout_path.display()
        ),
    );

    let config = Config::load_from(&config_path).unwrap();
    let resolved = config.resolve_layout("hero");
    assert_eq!(resolved, layout_path);
    assert!(lint_layout_file(&resolved).unwrap().is_empty());

    // Anything that is not a configured name resolves as a path
    assert_eq!(
        config.resolve_layout("other.json"),
        std::path::PathBuf::from("other.json")
    );
}

#[test]
fn test_config_fail_on_warnings_round_trip() {
    let dir = TempDir::new().unwrap();
    let config_path = write_fixture(
        &dir,
        "config.md",
        "---\nvalidation:\n  fail_on_warnings: true\n---\n",
    );

    let config = Config::load_from(&config_path).unwrap();
    assert!(config.validation.fail_on_warnings);
}
