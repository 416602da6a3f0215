//! Layout document model: position rules, entry limits, and loading.
//!
//! A bento layout maps slot names to position rules and carries entry-count
//! and per-type limits. The stored form (JSON, or YAML for hand-authored
//! documents) uses mappings for `positions` and `typeLimits`; the model keeps
//! both as explicitly ordered sequences so that every iteration the validator
//! performs is deterministic and follows document order rather than the
//! incidental iteration order of a map container.

use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// A bento layout: slot declarations plus limits.
///
/// `layout_type` and `target_content_type` are informational. They identify
/// the layout variant and the container entry type in the host system; the
/// validation rules never read them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BentoLayout {
    pub layout_type: String,
    pub target_content_type: String,
    pub positions: Positions,
    pub limits: Limits,
}

/// One slot declaration: a sequence index and its acceptable content types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRule {
    pub index: usize,
    pub expected_types: Vec<String>,
}

/// Entry-count and per-type limits for a layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub total_entries: usize,
    pub type_limits: TypeLimits,
}

/// Slot declarations in document order.
///
/// Deserializes from a mapping of slot name to rule. The order in which slot
/// names appear in the document is preserved; a slot name repeated later in
/// the document replaces the earlier declaration (last one wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positions(Vec<(String, PositionRule)>);

impl Positions {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(slot name, rule)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PositionRule)> {
        self.0.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Iterate over the rules alone, in document order.
    pub fn rules(&self) -> impl Iterator<Item = &PositionRule> {
        self.0.iter().map(|(_, rule)| rule)
    }

    /// Look up a rule by slot name.
    pub fn get(&self, slot: &str) -> Option<&PositionRule> {
        self.0
            .iter()
            .find(|(name, _)| name == slot)
            .map(|(_, rule)| rule)
    }
}

impl FromIterator<(String, PositionRule)> for Positions {
    fn from_iter<I: IntoIterator<Item = (String, PositionRule)>>(iter: I) -> Self {
        Positions(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Positions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PositionsVisitor;

        impl<'de> Visitor<'de> for PositionsVisitor {
            type Value = Positions;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of slot names to position rules")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Positions, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, PositionRule)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((slot, rule)) = map.next_entry::<String, PositionRule>()? {
                    entries.retain(|(name, _)| *name != slot);
                    entries.push((slot, rule));
                }
                Ok(Positions(entries))
            }
        }

        deserializer.deserialize_map(PositionsVisitor)
    }
}

impl Serialize for Positions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (slot, rule) in &self.0 {
            map.serialize_entry(slot, rule)?;
        }
        map.end()
    }
}

/// Per-type maximum occurrence counts, in document order.
///
/// Deserializes from a mapping of content type to limit. Types absent from
/// the mapping carry no limit at all; the validator never applies an implicit
/// default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeLimits(Vec<(String, usize)>);

impl TypeLimits {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(content type, limit)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(ty, limit)| (ty.as_str(), *limit))
    }

    /// Look up the limit configured for a content type.
    pub fn get(&self, content_type: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(ty, _)| ty == content_type)
            .map(|(_, limit)| *limit)
    }
}

impl FromIterator<(String, usize)> for TypeLimits {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        TypeLimits(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for TypeLimits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TypeLimitsVisitor;

        impl<'de> Visitor<'de> for TypeLimitsVisitor {
            type Value = TypeLimits;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of content types to maximum counts")
            }

            fn visit_map<A>(self, mut map: A) -> Result<TypeLimits, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, usize)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((ty, limit)) = map.next_entry::<String, usize>()? {
                    entries.retain(|(name, _)| *name != ty);
                    entries.push((ty, limit));
                }
                Ok(TypeLimits(entries))
            }
        }

        deserializer.deserialize_map(TypeLimitsVisitor)
    }
}

impl Serialize for TypeLimits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (ty, limit) in &self.0 {
            map.serialize_entry(ty, limit)?;
        }
        map.end()
    }
}

impl BentoLayout {
    /// Load a layout document from a JSON or YAML file.
    ///
    /// The format is chosen by extension: `.yml`/`.yaml` parse as YAML,
    /// anything else as JSON. Parsing goes straight into the typed model so
    /// the document order of `positions` and `typeLimits` survives.
    pub fn load(path: &Path) -> Result<Self> {
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
}

/// Whether a path should be parsed as YAML based on its extension.
pub(crate) fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}
