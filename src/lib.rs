//! # Bento - Layout Validation for Structured Content
//!
//! Bento validates that a set of linked content entries ("cards") placed into
//! a fixed-slot layout ("bento layout") conforms to a declared schema: the
//! right number of entries, the right content type per slot, and per-type
//! quantity ceilings.
//!
//! ## Overview
//!
//! A layout document declares named slots, each with a sequence index and a
//! set of acceptable content types, plus an expected entry count and per-type
//! limits. A card document supplies the ordered entries. The validator is a
//! pure function over both: it reports findings and never fails.
//!
//! ## Core Concepts
//!
//! - **Layout**: named position rules plus entry-count and per-type limits
//! - **Cards**: the ordered entries placed into the layout's slots
//! - **Findings**: validation issues (message + severity) from a single run
//!
//! ## Modules
//!
//! - [`layout`] - Layout document model and loading
//! - [`card`] - Card entry model and card document loading
//! - [`validator`] - The pure validation core
//! - [`schema`] - Structural linting of raw layout documents
//! - [`config`] - Project configuration (`.bento/config.md`)
//! - [`ui`] - Terminal formatting helpers
//!
//! ## Example
//!
//! ```
//! use bento::layout::BentoLayout;
//! use bento::card::CardEntry;
//! use bento::validator::validate;
//!
//! let layout: BentoLayout = serde_json::from_str(
//!     r#"{
//!         "layoutType": "bento-1-2",
//!         "targetContentType": "tabsContainer",
//!         "positions": {
//!             "hero": { "index": 0, "expectedTypes": ["CardTypeA"] }
//!         },
//!         "limits": { "totalEntries": 1, "typeLimits": { "CardTypeA": 1 } }
//!     }"#,
//! ).unwrap();
//!
//! let cards = vec![CardEntry::new("card1", "CardTypeA")];
//! assert!(validate(&layout, &cards).is_empty());
//! ```

// Re-export all public modules
pub mod card;
pub mod config;
pub mod layout;
pub mod schema;
pub mod ui;
pub mod validator;

/// Default path constants for the bento project structure.
pub mod paths {
    /// Project configuration file: `.bento/config.md`
    pub const CONFIG_FILE: &str = ".bento/config.md";
    /// Directory containing layout documents: `.bento/layouts`
    pub const LAYOUTS_DIR: &str = ".bento/layouts";
}

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
///
/// Uses `chrono::Utc::now()` so the timestamp is truly in UTC, not local
/// time with a misleading `Z` suffix.
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
