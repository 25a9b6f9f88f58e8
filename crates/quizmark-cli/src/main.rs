//! Command-line importer for GIFT question files.
//!
//! Usage:
//!   quizmark <path> [--format <format>] [--json] [--config <path>]
//!
//! Parses every question block in the file and prints the resulting
//! records, as JSON with `--json` or as one summary line each otherwise.
//! Block errors go to stderr with their starting line number; any error
//! makes the exit status nonzero.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use quizmark_config::Config;
use quizmark_engine::{ImportSession, ParseOptions, QType, QuestionRecord, TextFormat, io};

#[derive(Parser)]
#[command(name = "quizmark", version, about = "Import GIFT question files")]
struct Args {
    /// Path to the question file (.txt or .gift)
    path: PathBuf,

    /// Default text format: moodle, html, plain or markdown
    #[arg(long, short)]
    format: Option<String>,

    /// Print full records as JSON instead of summary lines
    #[arg(long)]
    json: bool,

    /// Config file to read defaults from (default: ~/.config/quizmark/config.toml)
    #[arg(long, short)]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(failed_blocks) if failed_blocks > 0 => process::exit(1),
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

/// Run one import; returns how many blocks failed to parse.
fn run(args: &Args) -> Result<usize> {
    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .unwrap_or_default();

    let default_format = match &args.format {
        Some(name) => match TextFormat::from_name(name) {
            Some(format) => format,
            None => bail!("unknown format '{name}' (expected moodle, html, plain or markdown)"),
        },
        None => config.default_format,
    };

    let text = io::read_file(&args.path)
        .with_context(|| format!("cannot import {}", args.path.display()))?;

    let options = ParseOptions {
        default_format,
        numbering: config.answer_numbering,
        hook: None,
    };
    let mut session = ImportSession::new(options);
    let outcome = session.run(&text);

    for block_error in &outcome.errors {
        eprintln!(
            "line {}: {} [{}]",
            block_error.line,
            block_error.error,
            block_error.error.key()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.records)?);
    } else {
        for record in &outcome.records {
            println!("{}", summary(record));
        }
        eprintln!(
            "{} record(s), {} failed block(s)",
            outcome.records.len(),
            outcome.errors.len()
        );
    }

    Ok(outcome.errors.len())
}

/// One-line human summary of a record.
fn summary(record: &QuestionRecord) -> String {
    match record.qtype {
        QType::Category => format!(
            "category: {}",
            record.category.as_deref().unwrap_or_default()
        ),
        QType::SelectableAnswer => format!(
            "{:?}: {} ({} answers)",
            record.qtype,
            record.name.as_deref().unwrap_or_default(),
            record.answers.len()
        ),
        _ => format!(
            "{:?}: {}",
            record.qtype,
            record.name.as_deref().unwrap_or_default()
        ),
    }
}
