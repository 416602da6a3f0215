//! Centralized UI formatting and color utilities
//!
//! This module provides the status icons and color helpers used by the bento
//! CLI output.

use colored::{ColoredString, Colorize};

use crate::validator::Severity;

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("BENTO_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for a finding severity.
///
/// Icons:
/// - Error: ✗ (red)
/// - Warning: ⚠ (yellow)
pub fn severity_icon(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "✗".red(),
        Severity::Warning => "⚠".yellow(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (layout names, paths)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}
