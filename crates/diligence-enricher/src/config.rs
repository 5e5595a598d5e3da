//! Configuration for the Enricher

use serde::{Deserialize, Serialize};

/// Configuration for the Enricher
///
/// Selects which top-level sections of the analysis document receive
/// confidence scores and how their evidence is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnricherConfig {
    /// Claim-list sections scored from their own evidence fields
    pub sourced_sections: Vec<String>,

    /// Claim-list sections whose claims are quantitative by nature;
    /// numeric backing is implied even when the record omits the flag
    pub numeric_sections: Vec<String>,

    /// Claim-list sections scored with an empty source list regardless
    /// of their fields (unverified by definition)
    pub unsourced_sections: Vec<String>,

    /// Score the bankruptcy/insolvency record nested under the
    /// company financial-legal status section
    pub score_financial_status: bool,
}

impl EnricherConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let mut seen: Vec<&str> = Vec::new();
        let all = self
            .sourced_sections
            .iter()
            .chain(&self.numeric_sections)
            .chain(&self.unsourced_sections);
        for section in all {
            if section.is_empty() {
                return Err("section names must not be empty".to_string());
            }
            if seen.contains(&section.as_str()) {
                return Err(format!("section '{}' listed more than once", section));
            }
            seen.push(section);
        }
        Ok(())
    }
}

impl Default for EnricherConfig {
    /// Default section layout matching the analysis schema the LLM
    /// collaborator is prompted to produce.
    fn default() -> Self {
        Self {
            sourced_sections: vec!["technology_claims".to_string()],
            numeric_sections: vec!["market_claims".to_string()],
            unsourced_sections: vec!["unverified_claims".to_string()],
            score_financial_status: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EnricherConfig::default().validate().is_ok());
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let config = EnricherConfig {
            sourced_sections: vec!["claims".to_string()],
            numeric_sections: vec!["claims".to_string()],
            unsourced_sections: vec![],
            score_financial_status: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_section_name_rejected() {
        let config = EnricherConfig {
            sourced_sections: vec![String::new()],
            ..EnricherConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
