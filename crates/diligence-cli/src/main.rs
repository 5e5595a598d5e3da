//! Diligence CLI - Command-line interface for due-diligence confidence
//! scoring and report enrichment.

use clap::Parser;
use diligence_cli::commands;
use diligence_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> diligence_cli::Result<()> {
    // Log to stderr so enriched documents on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Score(args) => commands::execute_score(args, &formatter),
        Command::Enrich(args) => commands::execute_enrich(args, &formatter),
        Command::Claims(args) => commands::execute_claims(args, &formatter),
    }
}
