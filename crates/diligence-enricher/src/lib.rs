//! Diligence Enricher
//!
//! Attaches confidence scores and star ratings to an LLM-produced
//! due-diligence analysis document.
//!
//! # Overview
//!
//! The analysis document arrives as nested JSON from the upstream LLM
//! collaborator. Each claim record may carry evidence metadata
//! (`sources`, `data_age_months`, `sources_agree`, `has_numbers`), any
//! of which may be absent. The enricher walks the claim sections,
//! normalizes each record's evidence to safe defaults, scores it with
//! the deterministic scorer, and writes `ai_confidence_score` and
//! `ai_confidence_stars` back onto the record for the downstream
//! renderer.
//!
//! # Architecture
//!
//! ```text
//! LLM analysis JSON → Enricher → ConfidenceScorer → enriched JSON → renderer
//! ```
//!
//! # Example
//!
//! ```
//! use diligence_enricher::Enricher;
//! use serde_json::json;
//!
//! let mut analysis = json!({
//!     "company_name": "Acme Fusion",
//!     "technology_claims": [
//!         { "claim": "10x cheaper than competitors", "sources": ["Reuters"] }
//!     ]
//! });
//!
//! let enricher = Enricher::with_defaults();
//! let summary = enricher.enrich(&mut analysis).unwrap();
//!
//! assert_eq!(summary.claims_scored, 1);
//! let claim = &analysis["technology_claims"][0];
//! assert!(claim["ai_confidence_score"].is_number());
//! assert!(claim["ai_confidence_stars"].is_string());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod enricher;
pub mod error;
mod evidence;

pub use config::EnricherConfig;
pub use enricher::{
    Enricher, EnrichmentSummary, BANKRUPTCY_KEY, FINANCIAL_STATUS_KEY, SCORE_KEY, STARS_KEY,
};
pub use error::EnricherError;
