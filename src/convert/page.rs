//! Page assembly: one source page into one editable page.

use super::content::{convert_image, convert_path, convert_text};
use super::diagnostics::{ConversionStats, Diagnostic};
use super::layer::classify;
use super::options::{ConvertOptions, ErrorMode};
use crate::error::{Error, ObjectError, Result};
use crate::model::{LayerKind, Page, PageSize};
use crate::ofd::{self, Layer, PageArea, PageObject};

/// Logical scale every converted page is created at.
pub const PAGE_SCALE: f64 = 1.0;

/// An assembled page with what was collected while building it.
#[derive(Debug, Clone)]
pub struct PageBuild {
    /// The page, still hidden
    pub page: Page,

    /// Layers and objects that were skipped
    pub diagnostics: Vec<Diagnostic>,

    /// Counters for this page
    pub stats: ConversionStats,
}

/// Build the editable page for `source`.
///
/// `index` is the page's position in the document and is only used to
/// label diagnostics. `common_area` is the document's default page area,
/// consulted when [`ConvertOptions::inherit_common_area`] is set.
///
/// The page comes back hidden; the document builder reveals it. In lenient
/// mode this never fails: a bad layer or object is skipped and reported in
/// [`PageBuild::diagnostics`].
pub fn build_page(
    source: &ofd::Page,
    index: usize,
    options: &ConvertOptions,
    common_area: Option<&PageArea>,
) -> Result<PageBuild> {
    log::debug!("building page {} ({} layers)", index + 1, source.layers.len());

    let size = resolve_size(source, index, options, common_area);
    let mut builder = PageBuilder {
        index,
        mode: options.error_mode,
        page: Page::from_size(size, PAGE_SCALE),
        diagnostics: Vec::new(),
        stats: ConversionStats {
            page_count: 1,
            ..Default::default()
        },
    };

    for (layer_index, layer) in source.layers.iter().enumerate() {
        builder.insert_layer(layer_index, layer)?;
    }

    Ok(PageBuild {
        page: builder.page,
        diagnostics: builder.diagnostics,
        stats: builder.stats,
    })
}

/// Pick the paper size: the page's own area, then (optionally) the
/// document's common area, then the configured default.
fn resolve_size(
    source: &ofd::Page,
    index: usize,
    options: &ConvertOptions,
    common_area: Option<&PageArea>,
) -> PageSize {
    let inherited = if options.inherit_common_area {
        common_area
    } else {
        None
    };

    match source.area.as_ref().or(inherited) {
        Some(area) => {
            let size = PageSize::new(area.physical_box.width, area.physical_box.height);
            if !size.is_valid() {
                log::warn!(
                    "page {}: physical box {} x {} mm is not a usable page size",
                    index + 1,
                    size.width_mm,
                    size.height_mm
                );
            }
            size
        }
        None if options.default_page_size.is_valid() => options.default_page_size,
        None => {
            log::warn!(
                "page {}: configured default page size is invalid, using A4",
                index + 1
            );
            PageSize::A4
        }
    }
}

struct PageBuilder {
    index: usize,
    mode: ErrorMode,
    page: Page,
    diagnostics: Vec<Diagnostic>,
    stats: ConversionStats,
}

impl PageBuilder {
    fn insert_layer(&mut self, layer_index: usize, layer: &Layer) -> Result<()> {
        log::debug!(
            "page {}: inserting layer {} ({})",
            self.index + 1,
            layer_index,
            layer.role
        );
        self.stats.layer_count += 1;

        let kind = match classify(&layer.role) {
            Ok(kind) => kind,
            Err(error) => {
                self.stats.failed_layer_count += 1;
                return self.report(layer_index, Vec::new(), None, error);
            }
        };

        // The layer is the outermost page block.
        let mut path = Vec::new();
        self.insert_objects(layer_index, kind, &layer.objects, &mut path)
    }

    fn insert_objects(
        &mut self,
        layer_index: usize,
        kind: LayerKind,
        objects: &[PageObject],
        path: &mut Vec<usize>,
    ) -> Result<()> {
        for (i, object) in objects.iter().enumerate() {
            path.push(i);
            let result = self.insert_object(layer_index, kind, object, path);
            path.pop();
            result?;
        }
        Ok(())
    }

    fn insert_object(
        &mut self,
        layer_index: usize,
        kind: LayerKind,
        object: &PageObject,
        path: &mut Vec<usize>,
    ) -> Result<()> {
        let (id, converted) = match object {
            PageObject::Text(text) => (text.id, convert_text(text, kind)),
            PageObject::Path(p) => (p.id, convert_path(p, kind)),
            PageObject::Image(image) => (image.id, convert_image(image, kind)),
            PageObject::Block(block) => {
                return self.insert_objects(layer_index, kind, &block.objects, path);
            }
        };

        match converted {
            Ok(Some(block)) => {
                if block.is_text() {
                    self.stats.text_block_count += 1;
                }
                self.page.add_block(block);
                Ok(())
            }
            Ok(None) => {
                match object {
                    PageObject::Path(_) => self.stats.skipped_path_count += 1,
                    PageObject::Image(_) => self.stats.skipped_image_count += 1,
                    _ => {}
                }
                Ok(())
            }
            Err(error) => {
                self.stats.failed_object_count += 1;
                let id = Some(id).filter(|id| *id != 0);
                self.report(layer_index, path.clone(), id, error)
            }
        }
    }

    fn report(
        &mut self,
        layer: usize,
        object_path: Vec<usize>,
        object_id: Option<u32>,
        error: ObjectError,
    ) -> Result<()> {
        if self.mode == ErrorMode::Strict {
            return Err(Error::ObjectConversion {
                page: self.index,
                error,
            });
        }

        let diagnostic = Diagnostic {
            page: self.index,
            layer,
            object_path,
            object_id,
            error,
        };
        log::warn!("Skipping {}", diagnostic);
        self.diagnostics.push(diagnostic);
        Ok(())
    }
}
