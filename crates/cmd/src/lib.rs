//! drill — build and inspect the question bank of a markdown docs site.
//!
//! ```bash
//! drill --config site.yaml build ./dist
//! drill --config site.yaml list --tag graph --difficulty easy
//! drill --config site.yaml check
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use content::{RawDocument, SiteConfig};
use qbank::{Difficulty, Filter, Severity, Tag};

#[derive(Debug, Parser)]
#[command(name = "drill", version, about = "Question-bank toolkit for markdown docs sites")]
pub struct Cli {
    /// Path to the site configuration file
    #[arg(long, default_value = "site.yaml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the question data file consumed by the rendering layer
    Build {
        /// Output directory for generated files
        output_dir: PathBuf,
    },
    /// Print the (optionally filtered) question bank
    List {
        /// Keep questions carrying at least one of these tags
        #[arg(long = "tag")]
        tags: Vec<Tag>,
        /// Keep questions of exactly this difficulty
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Keep questions whose title contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Validate question documents and report authoring defects
    Check,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = SiteConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    let documents = content::discover(&config)?;

    match cli.command {
        Command::Build { output_dir } => build(&documents, &output_dir),
        Command::List {
            tags,
            difficulty,
            search,
        } => list(
            &documents,
            &Filter {
                tags,
                difficulty,
                query: search,
            },
        ),
        Command::Check => check(&documents),
    }
}

/// Write the ordered bank as `questions.json` under the output directory.
pub fn build(documents: &[RawDocument], output_dir: &Path) -> Result<()> {
    let questions = qbank::load(documents)?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let out_path = output_dir.join("questions.json");
    let json = serde_json::to_string_pretty(&questions)?;
    std::fs::write(&out_path, json).with_context(|| format!("writing {}", out_path.display()))?;

    log::info!(
        "wrote {} questions to {}",
        questions.len(),
        out_path.display()
    );
    Ok(())
}

#[allow(clippy::print_stdout)]
fn list(documents: &[RawDocument], filter: &Filter) -> Result<()> {
    let questions = qbank::load(documents)?;
    let matched = qbank::apply(&questions, filter);

    for question in &matched {
        let tags = question
            .tags
            .iter()
            .map(Tag::label)
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<8} {:<48} {}",
            question.difficulty,
            truncate(&question.title, 48),
            tags
        );
    }
    println!("{} of {} questions", matched.len(), questions.len());
    Ok(())
}

#[allow(clippy::print_stderr)]
fn check(documents: &[RawDocument]) -> Result<()> {
    let findings = qbank::lint(documents);
    for finding in &findings {
        let level = match finding.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        eprintln!("{}: {}: {}", level, finding.url, finding.message);
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    if errors > 0 {
        bail!("{} of {} documents failed validation", errors, documents.len());
    }

    log::info!(
        "checked {} documents: {} warnings",
        documents.len(),
        findings.len()
    );
    Ok(())
}

/// Truncate a string for single-line display.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
