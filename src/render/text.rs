//! Plain text rendering for passages.

use crate::model::Passage;

/// Convert a passage to plain text.
///
/// Pages are separated by a blank line; within a page, text blocks are
/// listed bottom layer first, each layer in insertion order.
pub fn to_text(passage: &Passage) -> String {
    passage.plain_text().trim().to_string()
}
