//! Page-level types.

use super::{Block, BlockContent};
use crate::units::mm_to_pixel;
use serde::{Deserialize, Serialize};

/// Layer category of the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Drawn above the body
    Foreground,
    /// Main content
    Body,
    /// Drawn beneath the body
    Background,
}

impl LayerKind {
    /// All categories, bottom to top.
    pub const STACKING_ORDER: [LayerKind; 3] =
        [LayerKind::Background, LayerKind::Body, LayerKind::Foreground];

    fn slot(self) -> usize {
        match self {
            LayerKind::Background => 0,
            LayerKind::Body => 1,
            LayerKind::Foreground => 2,
        }
    }
}

/// Paper size in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Width (mm)
    pub width_mm: f64,
    /// Height (mm)
    pub height_mm: f64,
}

impl PageSize {
    /// ISO A4, 210 x 297 mm.
    pub const A4: PageSize = PageSize {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    /// Create a page size.
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Check that both sides are finite and greater than zero.
    pub fn is_valid(&self) -> bool {
        self.width_mm.is_finite()
            && self.height_mm.is_finite()
            && self.width_mm > 0.0
            && self.height_mm > 0.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// The blocks of one layer category on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocLayer {
    /// Category of every block in this layer
    pub kind: LayerKind,

    /// Blocks in insertion order
    pub blocks: Vec<Block>,
}

impl DocLayer {
    fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            blocks: Vec::new(),
        }
    }
}

/// A single editable page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page width in pixels
    pub width: f64,

    /// Page height in pixels
    pub height: f64,

    /// Logical zoom the page was created at
    pub scale: f64,

    /// Whether the editing surface should show the page
    visible: bool,

    /// One entry per layer category, in stacking order
    layers: [DocLayer; 3],
}

impl Page {
    /// Create a hidden, empty page with the given pixel size.
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            visible: false,
            layers: LayerKind::STACKING_ORDER.map(DocLayer::new),
        }
    }

    /// Create a hidden, empty page from a paper size in millimeters.
    pub fn from_size(size: PageSize, scale: f64) -> Self {
        Self::new(mm_to_pixel(size.width_mm), mm_to_pixel(size.height_mm), scale)
    }

    /// Attach a block under the layer named by its `layer` tag.
    pub fn add_block(&mut self, block: Block) {
        self.layers[block.layer.slot()].blocks.push(block);
    }

    /// Get the blocks of one layer category.
    pub fn layer(&self, kind: LayerKind) -> &DocLayer {
        &self.layers[kind.slot()]
    }

    /// Iterate over all layers, bottom to top.
    pub fn layers(&self) -> impl Iterator<Item = &DocLayer> {
        self.layers.iter()
    }

    /// Iterate over all blocks, bottom layer first.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.layers.iter().flat_map(|layer| layer.blocks.iter())
    }

    /// Check whether the page has been revealed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Reveal the page. Returns `true` only on the first call.
    pub fn show(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.blocks.len()).sum()
    }

    /// Check if the page is empty (no blocks).
    pub fn is_empty(&self) -> bool {
        self.block_count() == 0
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Get plain text content of the page, bottom layer first.
    pub fn plain_text(&self) -> String {
        self.blocks()
            .filter_map(|block| match &block.content {
                BlockContent::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::from_size(PageSize::default(), 1.0)
    }
}
