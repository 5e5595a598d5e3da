//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::error::Result;
use crate::output::Formatter;
use diligence_domain::{ClaimEvidence, ConfidenceScorer};

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, formatter: &Formatter) -> Result<()> {
    let mut evidence = ClaimEvidence::new().with_sources(args.sources);
    if let Some(months) = args.data_age_months {
        evidence = evidence.with_data_age_months(months);
    }
    if args.sources_agree {
        evidence = evidence.with_agreement();
    }
    if args.has_numbers {
        evidence = evidence.with_numbers();
    }

    let scorer = ConfidenceScorer::with_defaults();
    let breakdown = scorer.breakdown(&evidence);

    println!("{}", formatter.format_breakdown(&breakdown)?);

    Ok(())
}
