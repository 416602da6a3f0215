//! The `bento lint` command: structural check of a layout document.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use bento::{schema, ui, utc_now_iso};

#[derive(Serialize)]
struct LintReport<'a> {
    valid: bool,
    checked_at: String,
    layout: String,
    structural_errors: &'a [String],
}

pub fn cmd_lint(path: &Path, json: bool) -> Result<()> {
    let messages = schema::lint_layout_file(path)?;

    if json {
        let report = LintReport {
            valid: messages.is_empty(),
            checked_at: utc_now_iso(),
            layout: path.display().to_string(),
            structural_errors: &messages,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if messages.is_empty() {
        if !ui::is_quiet() {
            println!(
                "{} {} is a valid layout document.",
                "✓".green(),
                ui::colors::identifier(&path.display().to_string())
            );
        }
    } else {
        for message in &messages {
            println!("{} {}", "✗".red(), message);
        }
        println!(
            "\nFound {} {}.",
            messages.len(),
            if messages.len() == 1 { "issue" } else { "issues" }
        );
    }

    if !messages.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
