//! Project configuration for bento.
//!
//! Configuration lives in `.bento/config.md`: a markdown file whose YAML
//! frontmatter carries the settings, so the file doubles as project
//! documentation. A missing file means defaults; a present but malformed
//! file is an error.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::CONFIG_FILE;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Named layout documents, so commands can say `--layout hero` instead
    /// of a path.
    #[serde(default)]
    pub layouts: HashMap<String, PathBuf>,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ValidationConfig {
    /// When true, warning findings also fail a validation run.
    #[serde(default)]
    pub fail_on_warnings: bool,
}

impl Config {
    /// Load configuration from `.bento/config.md` in the current directory.
    /// A missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let config: Config =
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?;

        Ok(config)
    }

    /// Resolve a `--layout` argument: a configured layout name takes
    /// precedence, anything else is treated as a path.
    pub fn resolve_layout(&self, arg: &str) -> PathBuf {
        match self.layouts.get(arg) {
            Some(path) => path.clone(),
            None => PathBuf::from(arg),
        }
    }
}

/// Split a markdown document into YAML frontmatter and body.
///
/// Returns `(None, content)` when the document carries no frontmatter.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 3..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
