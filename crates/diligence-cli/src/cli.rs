//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Diligence CLI - Score and inspect due-diligence claim confidence.
#[derive(Debug, Parser)]
#[command(name = "diligence")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (scores only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a single claim's evidence
    Score(ScoreArgs),

    /// Attach confidence scores to an analysis document
    Enrich(EnrichArgs),

    /// List the scored claims of an enriched analysis document
    Claims(ClaimsArgs),
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Source label backing the claim (repeatable)
    #[arg(short, long = "source")]
    pub sources: Vec<String>,

    /// Age of the underlying data in months (omit when unknown)
    #[arg(short = 'a', long)]
    pub data_age_months: Option<u32>,

    /// Multiple independent sources corroborate the claim
    #[arg(long)]
    pub sources_agree: bool,

    /// The claim is backed by concrete quantitative figures
    #[arg(long)]
    pub has_numbers: bool,
}

/// Arguments for the enrich command.
#[derive(Debug, Parser)]
pub struct EnrichArgs {
    /// Analysis JSON file to enrich ("-" for stdin)
    pub input: String,

    /// Write the enriched document here (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the enriched document
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the claims command.
#[derive(Debug, Parser)]
pub struct ClaimsArgs {
    /// Enriched analysis JSON file ("-" for stdin)
    pub input: String,
}
