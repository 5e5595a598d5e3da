//! Core Enricher implementation

use crate::config::EnricherConfig;
use crate::error::EnricherError;
use crate::evidence::evidence_from_record;
use diligence_domain::{ClaimEvidence, ConfidenceScorer};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Key under which the numeric confidence score is written.
pub const SCORE_KEY: &str = "ai_confidence_score";

/// Key under which the star-symbol string is written.
pub const STARS_KEY: &str = "ai_confidence_stars";

/// Section containing the company financial and legal status.
pub const FINANCIAL_STATUS_KEY: &str = "company_financial_legal_status";

/// Record nested under the financial status that receives a score.
pub const BANKRUPTCY_KEY: &str = "bankruptcy_insolvency";

/// How a section's evidence is interpreted when scoring its claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionMode {
    /// Score from the record's own evidence fields
    Sourced,
    /// Quantitative by nature; numeric backing is implied
    NumericImplied,
    /// Scored with no sources regardless of the record's fields
    Unsourced,
}

/// Counts describing one enrichment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    /// Claim records that received a score and star rating
    pub claims_scored: usize,
    /// Sections found and walked
    pub sections_visited: usize,
    /// Array entries skipped because they were not objects
    pub records_skipped: usize,
}

/// Walks an analysis document and attaches confidence scores.
///
/// The walk mutates the document in place: each scored record gains
/// [`SCORE_KEY`] and [`STARS_KEY`] entries (overwriting stale ones from
/// a previous pass). Claims are scored independently, so the walk has
/// no ordering dependency between records.
pub struct Enricher {
    scorer: ConfidenceScorer,
    config: EnricherConfig,
}

impl Enricher {
    /// Create an enricher with a validated configuration.
    pub fn new(scorer: ConfidenceScorer, config: EnricherConfig) -> Result<Self, EnricherError> {
        config.validate().map_err(EnricherError::Config)?;
        Ok(Self { scorer, config })
    }

    /// Create an enricher with the default scorer and section layout.
    pub fn with_defaults() -> Self {
        Self {
            scorer: ConfidenceScorer::with_defaults(),
            config: EnricherConfig::default(),
        }
    }

    /// Attach confidence scores to every claim the document contains.
    ///
    /// Fails only when the document root is not a JSON object. Missing
    /// sections are fine; malformed records inside a section are
    /// skipped with a warning.
    pub fn enrich(&self, analysis: &mut Value) -> Result<EnrichmentSummary, EnricherError> {
        let root = analysis.as_object_mut().ok_or_else(|| {
            EnricherError::InvalidDocument("analysis root must be a JSON object".to_string())
        })?;

        let mut summary = EnrichmentSummary::default();

        for section in &self.config.sourced_sections {
            self.enrich_section(root, section, SectionMode::Sourced, &mut summary);
        }
        for section in &self.config.numeric_sections {
            self.enrich_section(root, section, SectionMode::NumericImplied, &mut summary);
        }
        for section in &self.config.unsourced_sections {
            self.enrich_section(root, section, SectionMode::Unsourced, &mut summary);
        }

        if self.config.score_financial_status {
            self.enrich_financial_status(root, &mut summary);
        }

        info!(
            claims_scored = summary.claims_scored,
            sections_visited = summary.sections_visited,
            records_skipped = summary.records_skipped,
            "analysis enriched"
        );
        Ok(summary)
    }

    /// Walk one claim-list section, scoring each object entry.
    fn enrich_section(
        &self,
        root: &mut Map<String, Value>,
        section: &str,
        mode: SectionMode,
        summary: &mut EnrichmentSummary,
    ) {
        let Some(entries) = root.get_mut(section).and_then(Value::as_array_mut) else {
            debug!(section, "section absent or not an array, skipping");
            return;
        };
        summary.sections_visited += 1;

        for (index, entry) in entries.iter_mut().enumerate() {
            match entry.as_object_mut() {
                Some(record) => {
                    self.score_record(record, mode);
                    summary.claims_scored += 1;
                }
                None => {
                    warn!(section, index, "claim entry is not an object, skipping");
                    summary.records_skipped += 1;
                }
            }
        }
    }

    /// Score the bankruptcy/insolvency record nested under the
    /// financial-legal status section.
    fn enrich_financial_status(
        &self,
        root: &mut Map<String, Value>,
        summary: &mut EnrichmentSummary,
    ) {
        let Some(record) = root
            .get_mut(FINANCIAL_STATUS_KEY)
            .and_then(Value::as_object_mut)
            .and_then(|status| status.get_mut(BANKRUPTCY_KEY))
            .and_then(Value::as_object_mut)
        else {
            debug!("financial status record absent, skipping");
            return;
        };
        summary.sections_visited += 1;
        // Financial status draws on filings and court records; treat it
        // as numerically backed like the market claims.
        self.score_record(record, SectionMode::NumericImplied);
        summary.claims_scored += 1;
    }

    /// Score one record and write the enrichment keys back onto it.
    fn score_record(&self, record: &mut Map<String, Value>, mode: SectionMode) {
        let evidence = match mode {
            SectionMode::Sourced => evidence_from_record(record),
            SectionMode::NumericImplied => evidence_from_record(record).with_numbers(),
            // Unverified by definition: whatever sources the record
            // names have not corroborated the claim.
            SectionMode::Unsourced => ClaimEvidence::new(),
        };

        let score = self.scorer.score(&evidence);
        record.insert(SCORE_KEY.to_string(), score.value().into());
        record.insert(STARS_KEY.to_string(), score.stars().symbols().into());
    }
}
