//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use diligence_domain::ScoreBreakdown;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// One scored claim pulled out of an enriched analysis document.
#[derive(Debug, Clone)]
pub struct ClaimRow {
    /// Section the claim was found under
    pub section: String,
    /// Claim text (may be empty when the record has none)
    pub claim: String,
    /// Attached confidence score, if present
    pub score: Option<f64>,
    /// Attached star string, if present
    pub stars: Option<String>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single score with its per-signal breakdown.
    pub fn format_breakdown(&self, breakdown: &ScoreBreakdown) -> Result<String> {
        let score = breakdown.total();
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "score": score.value(),
                    "stars": score.stars().count(),
                    "breakdown": {
                        "baseline": breakdown.baseline,
                        "volume_bonus": breakdown.volume_bonus,
                        "credibility_bonus": breakdown.credibility_bonus,
                        "recency_bonus": breakdown.recency_bonus,
                        "agreement_bonus": breakdown.agreement_bonus,
                        "numeric_bonus": breakdown.numeric_bonus,
                    }
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(format!("{:.4}", score.value())),
            OutputFormat::Table => {
                let signals = [
                    ("Baseline", breakdown.baseline),
                    ("Source volume", breakdown.volume_bonus),
                    ("Source credibility", breakdown.credibility_bonus),
                    ("Data recency", breakdown.recency_bonus),
                    ("Corroboration", breakdown.agreement_bonus),
                    ("Numeric backing", breakdown.numeric_bonus),
                ];

                let mut builder = Builder::default();
                builder.push_record(["Signal", "Points"]);
                for (signal, points) in signals {
                    builder.push_record([signal.to_string(), format!("{:.3}", points)]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(format!(
                    "{}\nConfidence: {} {}",
                    table,
                    self.colorize(&format!("{:.0}%", score.as_percent()), "green"),
                    score.stars().symbols()
                ))
            }
        }
    }

    /// Format scored claims pulled from an enriched document.
    pub fn format_claim_rows(&self, rows: &[ClaimRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|row| {
                        serde_json::json!({
                            "section": row.section,
                            "claim": row.claim,
                            "score": row.score,
                            "stars": row.stars,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = rows
                    .iter()
                    .map(|row| match row.score {
                        Some(score) => format!("{:.4}", score),
                        None => "-".to_string(),
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No scored claims found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Section", "Claim", "Confidence", "Stars"]);

                for row in rows {
                    let confidence = match row.score {
                        Some(score) => format!("{:.0}%", score * 100.0),
                        None => "-".to_string(),
                    };
                    builder.push_record([
                        row.section.clone(),
                        truncate(&row.claim, 60),
                        confidence,
                        row.stars.clone().unwrap_or_else(|| "-".to_string()),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Truncate a string to a maximum number of characters, appending an
/// ellipsis when anything was cut.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diligence_domain::{ClaimEvidence, ConfidenceScorer};

    fn sample_rows() -> Vec<ClaimRow> {
        vec![
            ClaimRow {
                section: "technology_claims".to_string(),
                claim: "10x cheaper than incumbents".to_string(),
                score: Some(0.85),
                stars: Some("⭐⭐⭐⭐⭐".to_string()),
            },
            ClaimRow {
                section: "market_claims".to_string(),
                claim: "$5B TAM".to_string(),
                score: None,
                stars: None,
            },
        ]
    }

    #[test]
    fn test_breakdown_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let breakdown = ConfidenceScorer::with_defaults()
            .breakdown(&ClaimEvidence::new().with_source("Reuters"));
        let output = formatter.format_breakdown(&breakdown).unwrap();
        assert!(output.contains("\"score\""));
        assert!(output.contains("credibility_bonus"));
    }

    #[test]
    fn test_breakdown_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let breakdown = ConfidenceScorer::with_defaults().breakdown(&ClaimEvidence::new());
        assert_eq!(formatter.format_breakdown(&breakdown).unwrap(), "0.3000");
    }

    #[test]
    fn test_rows_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_claim_rows(&sample_rows()).unwrap();
        assert!(output.contains("technology_claims"));
        assert!(output.contains("85%"));
        assert!(output.contains('-'));
    }

    #[test]
    fn test_rows_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_claim_rows(&sample_rows()).unwrap();
        assert_eq!(output, "0.8500\n-");
    }

    #[test]
    fn test_empty_rows_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_claim_rows(&[]).unwrap();
        assert!(output.contains("No scored claims"));
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        assert_eq!(truncate("short", 60), "short");
        let long = "é".repeat(80);
        let cut = truncate(&long, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
    }
}
