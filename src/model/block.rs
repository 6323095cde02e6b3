//! Positioned blocks.

use super::{LayerKind, TextContent};
use crate::units::pixel_to_mm;
use serde::{Deserialize, Serialize};

/// A positioned, editable block on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Layer category the block belongs to
    pub layer: LayerKind,

    /// Left edge in pixels
    pub x: f64,

    /// Top edge in pixels
    pub y: f64,

    /// Width in pixels
    pub width: f64,

    /// Height in pixels
    pub height: f64,

    /// Block payload
    pub content: BlockContent,
}

impl Block {
    /// Create a block; all geometry in pixels.
    pub fn new(
        layer: LayerKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        content: impl Into<BlockContent>,
    ) -> Self {
        Self {
            layer,
            x,
            y,
            width,
            height,
            content: content.into(),
        }
    }

    /// Get the position as (x, y).
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Get the size as (width, height).
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Get the text payload, if this is a text block.
    pub fn as_text(&self) -> Option<&TextContent> {
        match &self.content {
            BlockContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Check if this block is a text block.
    pub fn is_text(&self) -> bool {
        matches!(self.content, BlockContent::Text(_))
    }
}

/// Payload of a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    /// Editable text
    Text(TextContent),

    /// Vector path
    Path(PathContent),

    /// Raster image
    Image(ImageContent),
}

impl From<TextContent> for BlockContent {
    fn from(text: TextContent) -> Self {
        BlockContent::Text(text)
    }
}

impl From<PathContent> for BlockContent {
    fn from(path: PathContent) -> Self {
        BlockContent::Path(path)
    }
}

impl From<ImageContent> for BlockContent {
    fn from(image: ImageContent) -> Self {
        BlockContent::Image(image)
    }
}

/// Vector path payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathContent {
    /// Path data in OFD abbreviated syntax
    pub data: String,
}

/// Raster image payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    /// Source multimedia resource id
    pub resource_id: Option<u32>,

    /// Intrinsic width in millimeters
    pub real_width: f64,

    /// Intrinsic height in millimeters
    pub real_height: f64,
}

impl ImageContent {
    /// Describe an image from its pixel dimensions.
    pub fn from_pixels(width_px: f64, height_px: f64) -> Self {
        Self {
            resource_id: None,
            real_width: pixel_to_mm(width_px),
            real_height: pixel_to_mm(height_px),
        }
    }
}
