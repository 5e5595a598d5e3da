//! Claim evidence - the input to confidence scoring

/// Sentinel age for claims whose data recency is unknown.
///
/// Absent recency must behave identically to very old data (no recency
/// bonus), so "unknown" is a large age rather than an optional field.
/// This keeps the scorer total: missing metadata never boosts confidence
/// and never threads a null into arithmetic.
pub const UNKNOWN_AGE_MONTHS: u32 = 999;

/// Evidence metadata describing how well-supported a single claim is.
///
/// Evidence is transient: it is built fresh from whatever upstream
/// document supplied it, scored once, and discarded. Every field has a
/// safe default, so a claim with no metadata at all still scores.
///
/// # Examples
///
/// ```
/// use diligence_domain::ClaimEvidence;
///
/// let evidence = ClaimEvidence::new()
///     .with_sources(vec!["Reuters".to_string()])
///     .with_data_age_months(3)
///     .with_numbers();
///
/// assert_eq!(evidence.sources.len(), 1);
/// assert!(evidence.has_numbers);
/// assert!(!evidence.sources_agree);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimEvidence {
    /// Free-text source labels (e.g., "Bloomberg", "Crunchbase 2024").
    ///
    /// Duplicates are deliberately not deduplicated: "mentioned by N
    /// reports" is treated as a coarse proxy for corroboration strength.
    pub sources: Vec<String>,

    /// Age of the underlying data in months.
    ///
    /// [`UNKNOWN_AGE_MONTHS`] when recency was not supplied.
    pub data_age_months: u32,

    /// True only when multiple independent sources corroborate the fact.
    pub sources_agree: bool,

    /// True when the claim is backed by at least one concrete figure.
    pub has_numbers: bool,
}

impl ClaimEvidence {
    /// Create evidence with all fields at their safe defaults:
    /// no sources, unknown recency, no corroboration, no numbers.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            data_age_months: UNKNOWN_AGE_MONTHS,
            sources_agree: false,
            has_numbers: false,
        }
    }

    /// Set the source labels.
    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    /// Add a single source label.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Set the data age in months.
    pub fn with_data_age_months(mut self, months: u32) -> Self {
        self.data_age_months = months;
        self
    }

    /// Mark the claim as corroborated by multiple independent sources.
    pub fn with_agreement(mut self) -> Self {
        self.sources_agree = true;
        self
    }

    /// Mark the claim as backed by concrete quantitative figures.
    pub fn with_numbers(mut self) -> Self {
        self.has_numbers = true;
        self
    }
}

impl Default for ClaimEvidence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_safe() {
        let evidence = ClaimEvidence::new();
        assert!(evidence.sources.is_empty());
        assert_eq!(evidence.data_age_months, UNKNOWN_AGE_MONTHS);
        assert!(!evidence.sources_agree);
        assert!(!evidence.has_numbers);
    }

    #[test]
    fn test_builder_chain() {
        let evidence = ClaimEvidence::new()
            .with_source("Bloomberg")
            .with_source("Reuters")
            .with_data_age_months(4)
            .with_agreement()
            .with_numbers();

        assert_eq!(evidence.sources, vec!["Bloomberg", "Reuters"]);
        assert_eq!(evidence.data_age_months, 4);
        assert!(evidence.sources_agree);
        assert!(evidence.has_numbers);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let evidence = ClaimEvidence::new()
            .with_source("Reuters")
            .with_source("Reuters");
        assert_eq!(evidence.sources.len(), 2);
    }
}
