//! The `bento validate` command: run a card document against a layout.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use bento::card::{self, CardEntry};
use bento::config::Config;
use bento::layout::BentoLayout;
use bento::validator::{self, Finding};
use bento::{schema, ui, utc_now_iso};

/// Machine-readable report emitted by `--json`.
#[derive(Serialize)]
struct ValidationReport<'a> {
    valid: bool,
    checked_at: String,
    layout: String,
    findings: &'a [Finding],
}

/// Machine-readable report for a layout document that failed the
/// structural lint.
#[derive(Serialize)]
struct StructuralReport<'a> {
    valid: bool,
    checked_at: String,
    layout: String,
    structural_errors: &'a [String],
}

pub fn cmd_validate(layout_arg: &str, cards_path: &Path, json: bool) -> Result<()> {
    let config = Config::load()?;
    let layout_path = config.resolve_layout(layout_arg);

    // Structural lint before the typed model is built; a malformed document
    // is a loader-layer failure, not a validation finding
    let document = schema::load_document(&layout_path)?;
    let structural = schema::lint_layout(&document)?;
    if !structural.is_empty() {
        if json {
            let report = StructuralReport {
                valid: false,
                checked_at: utc_now_iso(),
                layout: layout_path.display().to_string(),
                structural_errors: &structural,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "{} {} is not a valid layout document:",
                "✗".red(),
                ui::colors::identifier(&layout_path.display().to_string())
            );
            for message in &structural {
                println!("  {} {}", "✗".red(), message);
            }
        }
        std::process::exit(1);
    }

    let layout = BentoLayout::load(&layout_path)?;
    let cards = card::load_cards(cards_path)?;

    let findings = validator::validate(&layout, &cards);

    if json {
        let report = ValidationReport {
            valid: findings.is_empty(),
            checked_at: utc_now_iso(),
            layout: layout_path.display().to_string(),
            findings: &findings,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_findings(&layout, &cards, &findings);
    }

    let failed = validator::has_errors(&findings)
        || (config.validation.fail_on_warnings && validator::has_warnings(&findings));
    if failed {
        std::process::exit(1);
    }

    Ok(())
}

fn render_findings(layout: &BentoLayout, cards: &[CardEntry], findings: &[Finding]) {
    if findings.is_empty() {
        if !ui::is_quiet() {
            println!(
                "{} {} cards satisfy layout '{}'.",
                "✓".green(),
                cards.len(),
                ui::colors::identifier(&layout.layout_type)
            );
        }
        return;
    }

    for finding in findings {
        println!("{} {}", ui::severity_icon(finding.severity), finding.message);
    }

    println!(
        "\nFound {} {}.",
        findings.len(),
        if findings.len() == 1 { "issue" } else { "issues" }
    );
}
