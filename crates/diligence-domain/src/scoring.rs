//! Deterministic confidence scoring
//!
//! Implements the additive point system that converts claim evidence
//! into a bounded, explainable confidence score. Every point in the
//! final number traces to one named, inspectable signal, so a reader
//! shown the score can audit or challenge it.

use crate::confidence::Confidence;
use crate::credibility::CredibilityTable;
use crate::evidence::ClaimEvidence;

/// Baseline confidence: "some claim exists, nothing else known".
///
/// Deliberately non-zero - an unsourced claim is genuinely unknown, and
/// a zero score would imply certainty the claim is false.
pub const BASELINE_CONFIDENCE: f64 = 0.30;

/// Weight applied to the mean source credibility.
pub const CREDIBILITY_WEIGHT: f64 = 0.30;

/// Flat bonus when multiple independent sources corroborate the fact.
pub const AGREEMENT_BONUS: f64 = 0.15;

/// Flat bonus when the claim is backed by concrete figures.
pub const NUMERIC_BONUS: f64 = 0.10;

/// Tunable constants for confidence scoring.
///
/// The defaults are the empirically tuned production values; changing
/// them changes the semantics of every rendered report.
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// Starting confidence before any bonus is applied
    pub baseline: f64,
    /// Multiplier on the mean source credibility
    pub credibility_weight: f64,
    /// Bonus for corroboration across independent sources
    pub agreement_bonus: f64,
    /// Bonus for quantitative backing
    pub numeric_bonus: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            baseline: BASELINE_CONFIDENCE,
            credibility_weight: CREDIBILITY_WEIGHT,
            agreement_bonus: AGREEMENT_BONUS,
            numeric_bonus: NUMERIC_BONUS,
        }
    }
}

/// Per-signal decomposition of a confidence score.
///
/// `total()` is the score itself; the individual terms let a consumer
/// display where every point came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Fixed starting point
    pub baseline: f64,
    /// Tiered bonus from the source count
    pub volume_bonus: f64,
    /// Mean source credibility times its weight
    pub credibility_bonus: f64,
    /// Tiered bonus from data recency
    pub recency_bonus: f64,
    /// Flat corroboration bonus (0 when sources do not agree)
    pub agreement_bonus: f64,
    /// Flat quantitative-backing bonus (0 without numbers)
    pub numeric_bonus: f64,
}

impl ScoreBreakdown {
    /// Sum of all terms before the ceiling is applied.
    pub fn raw_total(&self) -> f64 {
        self.baseline
            + self.volume_bonus
            + self.credibility_bonus
            + self.recency_bonus
            + self.agreement_bonus
            + self.numeric_bonus
    }

    /// The final confidence score, clamped to [0.0, 1.0].
    pub fn total(&self) -> Confidence {
        Confidence::new(self.raw_total())
    }
}

/// Converts claim evidence into a confidence score and star rating.
///
/// Pure and deterministic: reads only its immutable credibility table,
/// completes in O(number of sources) time, and is safe to call from any
/// number of threads concurrently.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceScorer {
    table: CredibilityTable,
    config: ScorerConfig,
}

impl ConfidenceScorer {
    /// Create a scorer over a credibility table with explicit constants.
    pub fn new(table: CredibilityTable, config: ScorerConfig) -> Self {
        Self { table, config }
    }

    /// Create a scorer with the built-in table and production constants.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The credibility table this scorer consults.
    pub fn table(&self) -> &CredibilityTable {
        &self.table
    }

    /// Score a claim's evidence.
    ///
    /// Total over all inputs: empty source lists, sentinel ages, and
    /// false flags all contribute zero bonus rather than failing.
    pub fn score(&self, evidence: &ClaimEvidence) -> Confidence {
        self.breakdown(evidence).total()
    }

    /// Score a claim's evidence, keeping the per-signal terms.
    pub fn breakdown(&self, evidence: &ClaimEvidence) -> ScoreBreakdown {
        let credibility_bonus = if evidence.sources.is_empty() {
            0.0
        } else {
            let mean = evidence
                .sources
                .iter()
                .map(|s| self.table.weight_for(s))
                .sum::<f64>()
                / evidence.sources.len() as f64;
            mean * self.config.credibility_weight
        };

        ScoreBreakdown {
            baseline: self.config.baseline,
            volume_bonus: volume_bonus(evidence.sources.len()),
            credibility_bonus,
            recency_bonus: recency_bonus(evidence.data_age_months),
            agreement_bonus: if evidence.sources_agree {
                self.config.agreement_bonus
            } else {
                0.0
            },
            numeric_bonus: if evidence.has_numbers {
                self.config.numeric_bonus
            } else {
                0.0
            },
        }
    }
}

/// Tiered bonus from the number of cited sources.
///
/// Non-linear on purpose: the first few corroborating sources matter
/// far more than additional ones beyond five. Only the highest
/// satisfied tier applies.
fn volume_bonus(source_count: usize) -> f64 {
    match source_count {
        0 => 0.0,
        1 => 0.03,
        2 => 0.08,
        3..=4 => 0.15,
        _ => 0.25,
    }
}

/// Tiered bonus from data recency. Unknown age carries the sentinel
/// value and lands in the zero tier.
fn recency_bonus(data_age_months: u32) -> f64 {
    if data_age_months <= 6 {
        0.15
    } else if data_age_months <= 12 {
        0.08
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::StarRating;
    use crate::evidence::UNKNOWN_AGE_MONTHS;

    const EPSILON: f64 = 1e-9;

    fn scorer() -> ConfidenceScorer {
        ConfidenceScorer::with_defaults()
    }

    #[test]
    fn test_bare_claim_scores_baseline() {
        let evidence = ClaimEvidence::new();
        let score = scorer().score(&evidence);
        assert!((score.value() - 0.30).abs() < EPSILON);
        assert_eq!(score.stars(), StarRating::Two);
    }

    #[test]
    fn test_single_fresh_numeric_source_hits_five_star_boundary() {
        // 0.30 base + 0.03 volume + 0.90*0.30 credibility + 0.15 recency
        // + 0.10 numbers = 0.85, the inclusive five-star boundary.
        let evidence = ClaimEvidence::new()
            .with_source("Reuters")
            .with_data_age_months(3)
            .with_numbers();
        let score = scorer().score(&evidence);
        assert!((score.value() - 0.85).abs() < EPSILON);
        assert_eq!(score.stars(), StarRating::Five);
    }

    #[test]
    fn test_everything_clamps_at_ceiling() {
        let evidence = ClaimEvidence::new()
            .with_sources(
                ["Bloomberg", "Reuters", "SEC", "Crunchbase", "PitchBook"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            )
            .with_data_age_months(2)
            .with_agreement()
            .with_numbers();
        let breakdown = scorer().breakdown(&evidence);
        assert!(breakdown.raw_total() > 1.0);
        assert_eq!(breakdown.total().value(), 1.0);
        assert_eq!(breakdown.total().stars(), StarRating::Five);
    }

    #[test]
    fn test_unknown_single_source_stale() {
        // 0.30 + 0.03 + 0.20*0.30 = 0.39
        let evidence = ClaimEvidence::new().with_source("unknown_blog");
        let score = scorer().score(&evidence);
        assert!((score.value() - 0.39).abs() < EPSILON);
        assert_eq!(score.stars(), StarRating::Two);
    }

    #[test]
    fn test_volume_tiers() {
        assert_eq!(volume_bonus(0), 0.0);
        assert_eq!(volume_bonus(1), 0.03);
        assert_eq!(volume_bonus(2), 0.08);
        assert_eq!(volume_bonus(3), 0.15);
        assert_eq!(volume_bonus(4), 0.15);
        assert_eq!(volume_bonus(5), 0.25);
        assert_eq!(volume_bonus(50), 0.25);
    }

    #[test]
    fn test_recency_tiers() {
        assert_eq!(recency_bonus(0), 0.15);
        assert_eq!(recency_bonus(6), 0.15);
        assert_eq!(recency_bonus(7), 0.08);
        assert_eq!(recency_bonus(12), 0.08);
        assert_eq!(recency_bonus(13), 0.0);
        assert_eq!(recency_bonus(UNKNOWN_AGE_MONTHS), 0.0);
    }

    #[test]
    fn test_strict_increase_at_volume_tier_boundaries() {
        let scorer = scorer();
        let score_for = |n: usize| {
            let sources = vec!["plain source".to_string(); n];
            scorer
                .score(&ClaimEvidence::new().with_sources(sources))
                .value()
        };
        assert!(score_for(1) > score_for(0));
        assert!(score_for(2) > score_for(1));
        assert!(score_for(3) > score_for(2));
        assert_eq!(score_for(4), score_for(3));
        assert!(score_for(5) > score_for(4));
        assert_eq!(score_for(9), score_for(5));
    }

    #[test]
    fn test_recency_ordering() {
        let scorer = scorer();
        let score_at = |age: u32| {
            scorer
                .score(&ClaimEvidence::new().with_data_age_months(age))
                .value()
        };
        assert!(score_at(3) >= score_at(9));
        assert!(score_at(9) >= score_at(24));
        assert!(score_at(3) > score_at(24));
    }

    #[test]
    fn test_flag_bonuses_are_exact_and_independent() {
        let scorer = scorer();
        let base = ClaimEvidence::new();
        let plain = scorer.breakdown(&base).raw_total();
        let agree = scorer.breakdown(&base.clone().with_agreement()).raw_total();
        let numbers = scorer.breakdown(&base.clone().with_numbers()).raw_total();
        let both = scorer
            .breakdown(&base.with_agreement().with_numbers())
            .raw_total();

        assert!((agree - plain - AGREEMENT_BONUS).abs() < EPSILON);
        assert!((numbers - plain - NUMERIC_BONUS).abs() < EPSILON);
        assert!((both - plain - AGREEMENT_BONUS - NUMERIC_BONUS).abs() < EPSILON);
    }

    #[test]
    fn test_duplicates_count_toward_volume() {
        let scorer = scorer();
        let once = scorer.score(&ClaimEvidence::new().with_source("Reuters"));
        let twice = scorer.score(
            &ClaimEvidence::new()
                .with_source("Reuters")
                .with_source("Reuters"),
        );
        assert!(twice.value() > once.value());
    }

    #[test]
    fn test_breakdown_sums_to_score() {
        let evidence = ClaimEvidence::new()
            .with_source("McKinsey")
            .with_source("some blog")
            .with_data_age_months(10)
            .with_numbers();
        let breakdown = scorer().breakdown(&evidence);
        let score = scorer().score(&evidence);
        assert_eq!(breakdown.total(), score);
        // mean(0.85, 0.20) * 0.30 = 0.1575
        assert!((breakdown.credibility_bonus - 0.1575).abs() < EPSILON);
        assert_eq!(breakdown.volume_bonus, 0.08);
        assert_eq!(breakdown.recency_bonus, 0.08);
    }
}
