//! Passage-level types.

use super::Page;
use crate::ofd::DocInfo;
use serde::{Deserialize, Serialize};

/// The top-level editable document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    /// Source format version
    pub version: String,

    /// Source document type tag
    pub doc_type: String,

    /// Document metadata, copied from the source
    pub doc_info: DocInfo,

    /// Pages in source order
    pub pages: Vec<Page>,
}

impl Passage {
    /// Create an empty passage.
    pub fn new(version: impl Into<String>, doc_type: impl Into<String>, doc_info: DocInfo) -> Self {
        Self {
            version: version.into(),
            doc_type: doc_type.into(),
            doc_info,
            pages: Vec::new(),
        }
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by index (0-based).
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Append a page.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the passage has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get the total number of blocks on all pages.
    pub fn block_count(&self) -> usize {
        self.pages.iter().map(Page::block_count).sum()
    }

    /// Get plain text content of the entire passage.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(Page::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
