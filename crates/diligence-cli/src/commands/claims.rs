//! Claims command implementation.

use crate::cli::ClaimsArgs;
use crate::error::{CliError, Result};
use crate::output::{ClaimRow, Formatter};
use diligence_enricher::{
    EnricherConfig, BANKRUPTCY_KEY, FINANCIAL_STATUS_KEY, SCORE_KEY, STARS_KEY,
};
use serde_json::{Map, Value};

/// Execute the claims command.
pub fn execute_claims(args: ClaimsArgs, formatter: &Formatter) -> Result<()> {
    let analysis = super::read_document(&args.input)?;
    let root = analysis
        .as_object()
        .ok_or_else(|| CliError::InvalidInput("analysis root must be a JSON object".into()))?;

    let rows = collect_rows(root, &EnricherConfig::default());
    println!("{}", formatter.format_claim_rows(&rows)?);

    Ok(())
}

/// Pull one row per claim record out of the document, in section order.
fn collect_rows(root: &Map<String, Value>, config: &EnricherConfig) -> Vec<ClaimRow> {
    let mut rows = Vec::new();

    let sections = config
        .sourced_sections
        .iter()
        .chain(&config.numeric_sections)
        .chain(&config.unsourced_sections);

    for section in sections {
        let Some(entries) = root.get(section).and_then(Value::as_array) else {
            continue;
        };
        for entry in entries {
            if let Some(record) = entry.as_object() {
                rows.push(row_from_record(section, record));
            }
        }
    }

    if config.score_financial_status {
        if let Some(record) = root
            .get(FINANCIAL_STATUS_KEY)
            .and_then(Value::as_object)
            .and_then(|status| status.get(BANKRUPTCY_KEY))
            .and_then(Value::as_object)
        {
            rows.push(row_from_record(FINANCIAL_STATUS_KEY, record));
        }
    }

    rows
}

fn row_from_record(section: &str, record: &Map<String, Value>) -> ClaimRow {
    let claim = record
        .get("claim")
        .or_else(|| record.get("status"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    ClaimRow {
        section: section.to_string(),
        claim,
        score: record.get(SCORE_KEY).and_then(Value::as_f64),
        stars: record
            .get(STARS_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned),
    }
}
