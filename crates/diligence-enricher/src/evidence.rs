//! Evidence normalization at the document boundary
//!
//! Claim records arrive from an LLM and any evidence field may be
//! absent, null, or loosely typed (ages sometimes come back as floats).
//! Defaults are applied here, before any arithmetic, so the scorer
//! never sees a missing field.

use diligence_domain::{ClaimEvidence, UNKNOWN_AGE_MONTHS};
use serde_json::{Map, Value};

/// Read a claim record's evidence fields, substituting the documented
/// defaults for anything absent or malformed.
pub(crate) fn evidence_from_record(record: &Map<String, Value>) -> ClaimEvidence {
    let sources = record
        .get("sources")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let data_age_months = record
        .get("data_age_months")
        .and_then(age_months)
        .unwrap_or(UNKNOWN_AGE_MONTHS);

    let sources_agree = record
        .get("sources_agree")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let has_numbers = record
        .get("has_numbers")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut evidence = ClaimEvidence::new()
        .with_sources(sources)
        .with_data_age_months(data_age_months);
    if sources_agree {
        evidence = evidence.with_agreement();
    }
    if has_numbers {
        evidence = evidence.with_numbers();
    }
    evidence
}

/// Accept integer or float ages; anything negative or non-numeric is
/// treated as unknown.
fn age_months(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return Some(n.min(u64::from(u32::MAX)) as u32);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f.min(f64::from(u32::MAX)) as u32)
}
