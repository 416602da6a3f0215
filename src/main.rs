//! CLI entry point and command dispatch for bento.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bento")]
#[command(version)]
#[command(about = "Bento layout validation for structured content", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    bento validate --layout layout.json --cards cards.json\n    bento lint layout.json\n\n    Layout names from .bento/config.md can be used in place of paths."
)]
struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card document against a bento layout
    Validate {
        /// Layout name from .bento/config.md, or path to a layout document
        #[arg(long)]
        layout: String,
        /// Path to the card document (a JSON or YAML array)
        #[arg(long)]
        cards: PathBuf,
        /// Output a machine-readable JSON report
        #[arg(long)]
        json: bool,
    },
    /// Check a layout document for structural problems
    Lint {
        /// Path to the layout document
        path: PathBuf,
        /// Output a machine-readable JSON report
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version and build information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("BENTO_QUIET", "1");
    }
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Validate {
            layout,
            cards,
            json,
        } => cmd::validate::cmd_validate(&layout, &cards, json),
        Commands::Lint { path, json } => cmd::lint::cmd_lint(&path, json),
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "bento", &mut io::stdout());
            Ok(())
        }
        Commands::Version => cmd::version(),
    }
}
