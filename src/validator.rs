//! The pure validation core.
//!
//! `validate` consumes a layout and an ordered card list and returns the
//! findings for that run. It holds no state, performs no I/O, and never
//! fails; every anomaly becomes a finding. An empty result is the success
//! signal.
//!
//! The finding message strings are a compatibility contract: downstream
//! consumers match on them literally, so the exact wording, punctuation, and
//! separators must not change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::card::CardEntry;
use crate::layout::{BentoLayout, PositionRule};

/// Severity level for findings.
///
/// No current rule emits `Warning`; it is reserved for future rule
/// categories and honored by the CLI's `fail_on_warnings` policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Finding {
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Whether a finding list contains any error-severity finding.
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(Finding::is_error)
}

/// Whether a finding list contains any warning-severity finding.
pub fn has_warnings(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Warning)
}

/// Validate an ordered card list against a bento layout.
///
/// Four checks run unconditionally, in order, and their findings are
/// concatenated without deduplication:
///
/// 1. the card count must equal `limits.totalEntries`;
/// 2. each card must sit at a sequence index with a matching position rule
///    and carry one of that rule's expected types (a card with no matching
///    rule skips the type check);
/// 3. no content type may exceed its configured limit, tallied across the
///    whole list independent of slot assignment;
/// 4. the card count must not exceed the number of defined positions.
pub fn validate(layout: &BentoLayout, cards: &[CardEntry]) -> Vec<Finding> {
    let mut findings = Vec::new();

    // 1. Check total number of entries
    if cards.len() != layout.limits.total_entries {
        findings.push(Finding::error(format!(
            "Expected {} cards, but found {}.",
            layout.limits.total_entries,
            cards.len()
        )));
    }

    // 2. Check each card's position and type. The stable sort keeps document
    // order for rules sharing an index, and the lookup is an equality match
    // on the rule's own index, not positional.
    let mut rules: Vec<&PositionRule> = layout.positions.rules().collect();
    rules.sort_by_key(|rule| rule.index);

    for (index, card) in cards.iter().enumerate() {
        let rule = match rules.iter().find(|rule| rule.index == index) {
            Some(rule) => rule,
            None => {
                findings.push(Finding::error(format!(
                    "Card at index {} does not have a corresponding position rule in bentoLayout.",
                    index
                )));
                continue;
            }
        };

        if !rule.expected_types.iter().any(|ty| ty == &card.content_type) {
            findings.push(Finding::error(format!(
                "Card at index {} has type '{}', but expected one of: {}.",
                index,
                card.content_type,
                rule.expected_types.join(", ")
            )));
        }
    }

    // 3. Check type limits, tallied over the whole card list
    let mut type_counts: HashMap<&str, usize> = HashMap::new();
    for card in cards {
        *type_counts.entry(card.content_type.as_str()).or_insert(0) += 1;
    }

    for (content_type, limit) in layout.limits.type_limits.iter() {
        let count = type_counts.get(content_type).copied().unwrap_or(0);
        if count > limit {
            findings.push(Finding::error(format!(
                "Content type '{}' exceeds its limit. Expected maximum {}, but found {}.",
                content_type, limit, count
            )));
        }
    }

    // 4. More cards than defined positions, regardless of per-card findings
    if cards.len() > rules.len() {
        findings.push(Finding::error(format!(
            "There are {} cards, but only {} positions are defined in the layout.",
            cards.len(),
            rules.len()
        )));
    }

    findings
}
