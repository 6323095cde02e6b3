//! Text payload and its normalized style.

use serde::{Deserialize, Serialize};

/// Text payload of a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// Plain text, a single run
    pub text: String,

    /// Fully resolved style
    pub style: TextStyle,
}

impl TextContent {
    /// Create a text payload with normalized style at the given pixel font size.
    pub fn new(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::normalized(font_size),
        }
    }
}

/// Resolved style of a text block.
///
/// Blocks produced by the converter always carry a style built by
/// [`TextStyle::normalized`]; nothing downstream needs to fill in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f64,

    /// Margin between the text frame and the block edge
    pub document_margin: f64,

    /// Root frame format
    pub frame: FrameFormat,

    /// Paragraph format
    pub paragraph: ParagraphFormat,
}

impl TextStyle {
    /// Style with every margin and padding zeroed and minimum line height.
    pub fn normalized(font_size: f64) -> Self {
        Self {
            font_size,
            document_margin: 0.0,
            frame: FrameFormat {
                margins: Margins::zero(),
                padding: 0.0,
            },
            paragraph: ParagraphFormat {
                margins: Margins::zero(),
                line_height: LineHeight::Minimum(0.0),
            },
        }
    }

    /// Check whether this style matches [`TextStyle::normalized`] for its font size.
    pub fn is_normalized(&self) -> bool {
        *self == Self::normalized(self.font_size)
    }
}

/// Four-sided margins in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f64,
    /// Bottom margin
    pub bottom: f64,
    /// Left margin
    pub left: f64,
    /// Right margin
    pub right: f64,
}

impl Margins {
    /// All four margins zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Check if every side is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Format of the frame enclosing all paragraphs of a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameFormat {
    /// Outer margins
    pub margins: Margins,
    /// Inner padding
    pub padding: f64,
}

/// Format applied to the paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    /// Paragraph margins
    pub margins: Margins,
    /// Line height rule
    pub line_height: LineHeight,
}

/// Line height rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum LineHeight {
    /// At least this many pixels; `Minimum(0.0)` lets lines shrink to the font height
    Minimum(f64),
    /// Exactly this many pixels
    Fixed(f64),
}
