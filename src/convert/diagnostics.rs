//! Diagnostics and statistics collected during conversion.

use crate::error::ObjectError;
use serde::Serialize;
use std::fmt;

/// A non-fatal failure: one layer or object that was skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Page index (0-based)
    pub page: usize,

    /// Layer index within the page (0-based)
    pub layer: usize,

    /// Indices from the layer down through nested page blocks to the
    /// object; empty when the whole layer was skipped
    pub object_path: Vec<usize>,

    /// Source object id, when the object carries one
    pub object_id: Option<u32>,

    /// What went wrong
    pub error: ObjectError,
}

impl Diagnostic {
    /// Check whether this diagnostic concerns a whole layer.
    pub fn is_layer_level(&self) -> bool {
        self.object_path.is_empty()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}, layer {}", self.page + 1, self.layer)?;
        if !self.object_path.is_empty() {
            let path = self
                .object_path
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(".");
            write!(f, ", object {}", path)?;
        }
        if let Some(id) = self.object_id {
            write!(f, " (id {})", id)?;
        }
        write!(f, ": {}", self.error)
    }
}

/// Counters collected while converting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Pages converted
    pub page_count: u32,

    /// Layers visited (including skipped ones)
    pub layer_count: u32,

    /// Text blocks produced
    pub text_block_count: u32,

    /// Path objects seen but not converted
    pub skipped_path_count: u32,

    /// Image objects seen but not converted
    pub skipped_image_count: u32,

    /// Layers skipped because of an error
    pub failed_layer_count: u32,

    /// Objects skipped because of an error
    pub failed_object_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add another set of counters to this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.page_count += other.page_count;
        self.layer_count += other.layer_count;
        self.text_block_count += other.text_block_count;
        self.skipped_path_count += other.skipped_path_count;
        self.skipped_image_count += other.skipped_image_count;
        self.failed_layer_count += other.failed_layer_count;
        self.failed_object_count += other.failed_object_count;
    }
}
