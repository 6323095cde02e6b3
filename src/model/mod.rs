//! Editable document model.
//!
//! This is the tree the converter produces and hands to an editing surface:
//! a [`Passage`] of [`Page`]s, each holding positioned [`Block`]s grouped
//! into three fixed layers. All geometry is in pixels.

mod block;
mod page;
mod passage;
mod text;

pub use block::{Block, BlockContent, ImageContent, PathContent};
pub use page::{DocLayer, LayerKind, Page, PageSize};
pub use passage::Passage;
pub use text::{FrameFormat, LineHeight, Margins, ParagraphFormat, TextContent, TextStyle};
