//! Structural linting of raw layout documents.
//!
//! The validation core assumes a structurally well-formed layout; checking
//! the document itself is the calling layer's job. This module validates a
//! raw document against the embedded layout JSON Schema before the typed
//! model is built, so a missing `limits` block or an empty `expectedTypes`
//! array surfaces as a readable message instead of a parse error.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::layout::is_yaml;

/// The layout document schema, embedded at compile time.
const LAYOUT_SCHEMA: &str = include_str!("../schemas/layout.schema.json");

/// Compile the embedded layout schema.
pub fn layout_schema_validator() -> Result<jsonschema::Validator> {
    let schema: serde_json::Value =
        serde_json::from_str(LAYOUT_SCHEMA).context("Failed to parse embedded layout schema")?;

    jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile layout schema: {}", e))
}

/// Read a layout document as an untyped JSON value (JSON or YAML by
/// extension). Used for linting; typed loading goes through
/// [`crate::layout::BentoLayout::load`] to keep document order.
pub fn load_document(path: &Path) -> Result<serde_json::Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout document from {}", path.display()))?;

    if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse layout document {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse layout document {}", path.display()))
    }
}

/// Validate a raw layout document against the embedded schema.
///
/// Returns one message per schema violation; an empty list means the
/// document is structurally sound. Messages carry the instance path when the
/// violation is below the document root.
pub fn lint_layout(document: &serde_json::Value) -> Result<Vec<String>> {
    let validator = layout_schema_validator()?;

    let messages: Vec<String> = validator
        .iter_errors(document)
        .map(|e| {
            let path = e.instance_path.to_string();
            if path.is_empty() {
                e.to_string()
            } else {
                format!("at '{}': {}", path, e)
            }
        })
        .collect();

    Ok(messages)
}

/// Lint a layout document straight from a file.
pub fn lint_layout_file(path: &Path) -> Result<Vec<String>> {
    let document = load_document(path)?;
    lint_layout(&document)
}
