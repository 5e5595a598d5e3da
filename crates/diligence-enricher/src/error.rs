//! Error types for the Enricher

use thiserror::Error;

/// Errors that can occur during enrichment
///
/// Scoring itself is total; only malformed documents and invalid
/// configuration can fail. Odd individual claim records are skipped
/// with a warning, never fatal.
#[derive(Error, Debug)]
pub enum EnricherError {
    /// The analysis document root is not a JSON object
    #[error("Invalid analysis document: {0}")]
    InvalidDocument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
