//! Command implementations.

pub mod claims;
pub mod enrich;
pub mod score;

pub use self::claims::execute_claims;
pub use self::enrich::execute_enrich;
pub use self::score::execute_score;

use crate::error::Result;
use serde_json::Value;
use std::fs;
use std::io::Read;

/// Read an analysis document from a file path, or stdin when the path
/// is "-".
pub(crate) fn read_document(input: &str) -> Result<Value> {
    let contents = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };
    Ok(serde_json::from_str(&contents)?)
}
