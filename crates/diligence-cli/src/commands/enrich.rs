//! Enrich command implementation.

use crate::cli::EnrichArgs;
use crate::error::Result;
use crate::output::Formatter;
use diligence_enricher::Enricher;
use std::fs;

/// Execute the enrich command.
pub fn execute_enrich(args: EnrichArgs, formatter: &Formatter) -> Result<()> {
    let mut analysis = super::read_document(&args.input)?;

    let enricher = Enricher::with_defaults();
    let summary = enricher.enrich(&mut analysis)?;

    let serialized = if args.pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };

    match args.output {
        Some(path) => {
            fs::write(&path, serialized)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Scored {} claim(s) across {} section(s) → {}",
                    summary.claims_scored,
                    summary.sections_visited,
                    path.display()
                ))
            );
        }
        None => {
            // Keep stdout clean for piping; the summary goes to stderr.
            println!("{}", serialized);
            eprintln!(
                "{}",
                formatter.success(&format!(
                    "Scored {} claim(s) across {} section(s)",
                    summary.claims_scored, summary.sections_visited
                ))
            );
        }
    }

    if summary.records_skipped > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "{} malformed claim record(s) skipped",
                summary.records_skipped
            ))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use diligence_enricher::{SCORE_KEY, STARS_KEY};
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_enrich_file_roundtrip() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        let analysis = json!({
            "technology_claims": [
                { "claim": "10x cheaper", "sources": ["Reuters"], "data_age_months": 3 }
            ]
        });
        write!(input, "{}", analysis).unwrap();

        let output = tempfile::NamedTempFile::new().unwrap();
        let args = EnrichArgs {
            input: input.path().to_string_lossy().into_owned(),
            output: Some(output.path().to_path_buf()),
            pretty: true,
        };
        let formatter = Formatter::new(OutputFormat::Table, false);
        execute_enrich(args, &formatter).unwrap();

        let enriched: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.path()).unwrap()).unwrap();
        let claim = &enriched["technology_claims"][0];
        assert!(claim[SCORE_KEY].is_number());
        assert!(claim[STARS_KEY].is_string());
    }

    #[test]
    fn test_enrich_rejects_invalid_json() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(input, "not json").unwrap();

        let args = EnrichArgs {
            input: input.path().to_string_lossy().into_owned(),
            output: None,
            pretty: false,
        };
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(execute_enrich(args, &formatter).is_err());
    }
}
