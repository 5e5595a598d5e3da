//! Diligence Domain Layer
//!
//! This crate contains the core business logic of the due-diligence
//! pipeline: deterministic confidence scoring for claim evidence. It has
//! ZERO external dependencies and defines the value objects that all
//! other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Claim Evidence**: sources, recency, corroboration, and numeric
//!   backing describing how well-supported a claim is
//! - **Confidence**: a [0.0, 1.0] score summarizing evidence strength
//! - **Star Rating**: the five-band discretization of confidence used
//!   for at-a-glance display
//! - **Credibility Table**: per-organization trust weights used to
//!   weight the credibility bonus
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure, total, side-effect-free functions only
//! - Document walking and presentation live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod credibility;
pub mod evidence;
pub mod scoring;

// Re-exports for convenience
pub use confidence::{Confidence, StarRating};
pub use credibility::CredibilityTable;
pub use evidence::{ClaimEvidence, UNKNOWN_AGE_MONTHS};
pub use scoring::{ConfidenceScorer, ScoreBreakdown, ScorerConfig};
