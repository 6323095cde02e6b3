//! JSON rendering for passages.

use crate::error::{Error, Result};
use crate::model::Passage;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a passage to JSON.
pub fn to_json(passage: &Passage, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(passage),
        JsonFormat::Compact => serde_json::to_string(passage),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
