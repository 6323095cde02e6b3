//! Per-kind content object converters.
//!
//! Each converter turns one source object into at most one block on the
//! given layer. Text is fully supported. Path and image objects are
//! recognized but not converted yet; their converters return `Ok(None)`.
//! All three share one signature so the page builder treats them alike.

use crate::error::ObjectError;
use crate::model::{Block, LayerKind, TextContent};
use crate::ofd::{ImageObject, PathObject, TextObject};
use crate::units::mm_to_pixel;

/// Convert a text object into a text block.
///
/// Position, size and font size all go through [`mm_to_pixel`]; the style
/// is always [`TextStyle::normalized`](crate::model::TextStyle::normalized).
/// A text object always yields a block unless it is rejected.
pub fn convert_text(text: &TextObject, layer: LayerKind) -> Result<Option<Block>, ObjectError> {
    let boundary = text.boundary.ok_or(ObjectError::MissingField("boundary"))?;
    let size = text.size.ok_or(ObjectError::MissingField("size"))?;

    if !boundary.is_well_formed() {
        return Err(ObjectError::InvalidGeometry {
            x: boundary.x,
            y: boundary.y,
            width: boundary.width,
            height: boundary.height,
        });
    }
    if !size.is_finite() || size <= 0.0 {
        return Err(ObjectError::InvalidFontSize(size));
    }

    let content = TextContent::new(text.text(), mm_to_pixel(size));

    Ok(Some(Block::new(
        layer,
        mm_to_pixel(boundary.x),
        mm_to_pixel(boundary.y),
        mm_to_pixel(boundary.width),
        mm_to_pixel(boundary.height),
        content,
    )))
}

/// Convert a path object. Not implemented: never produces a block.
pub fn convert_path(path: &PathObject, layer: LayerKind) -> Result<Option<Block>, ObjectError> {
    log::trace!("path object {} on {:?} layer not converted", path.id, layer);
    Ok(None)
}

/// Convert an image object. Not implemented: never produces a block.
pub fn convert_image(image: &ImageObject, layer: LayerKind) -> Result<Option<Block>, ObjectError> {
    log::trace!(
        "image object {} (resource {}) on {:?} layer not converted",
        image.id,
        image.resource_id,
        layer
    );
    Ok(None)
}
