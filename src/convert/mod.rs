//! OFD to editable passage conversion.
//!
//! The pipeline descends document → page → layer → content object:
//!
//! - [`build_passage`] picks the first document body and document, copies
//!   the document metadata and builds every page in order.
//! - [`build_page`] sizes the page and walks its layers.
//! - [`classify`] maps each layer role to an editor [`LayerKind`](crate::model::LayerKind).
//! - [`convert_text`], [`convert_path`] and [`convert_image`] turn single
//!   content objects into blocks.
//!
//! Missing top-level structure is an [`Error`](crate::Error). Anything below
//! the page level is isolated: a bad layer or object is skipped and reported
//! as a [`Diagnostic`] unless [`ErrorMode::Strict`] is selected.
//!
//! # Example
//!
//! ```
//! use unofd::convert::OfdConverter;
//! use unofd::ofd::{DocBody, DocInfo, Document, Layer, LayerRole, Ofd, Page, StBox, TextObject};
//!
//! let mut page = Page::with_area(210.0, 297.0);
//! page.add_layer(
//!     Layer::new(LayerRole::Body)
//!         .with_object(TextObject::new(StBox::new(10.0, 20.0, 30.0, 5.0), 3.0, "Hello")),
//! );
//! let mut document = Document::new();
//! document.add_page(page);
//! let mut ofd = Ofd::default();
//! ofd.add_body(DocBody::new(DocInfo::default(), document));
//!
//! let conversion = OfdConverter::new().convert(&ofd)?;
//! assert_eq!(conversion.passage.page_count(), 1);
//! # Ok::<(), unofd::Error>(())
//! ```

mod content;
mod diagnostics;
mod document;
mod layer;
mod options;
mod page;

pub use content::{convert_image, convert_path, convert_text};
pub use diagnostics::{ConversionStats, Diagnostic};
pub use document::{build_passage, Conversion};
pub use layer::classify;
pub use options::{ConvertOptions, ErrorMode};
pub use page::{build_page, PageBuild, PAGE_SCALE};

use crate::error::Result;
use crate::model::PageSize;
use crate::ofd::Ofd;

/// Reusable converter carrying a set of options.
#[derive(Debug, Clone, Default)]
pub struct OfdConverter {
    options: ConvertOptions,
}

impl OfdConverter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Abort on the first object failure.
    pub fn strict(mut self) -> Self {
        self.options = self.options.strict();
        self
    }

    /// Skip failing objects and report them (default).
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Build pages in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.options = self.options.with_parallel(parallel);
        self
    }

    /// Set the paper size for pages without an area.
    pub fn with_default_page_size(mut self, size: PageSize) -> Self {
        self.options = self.options.with_default_page_size(size);
        self
    }

    /// Let pages without an area inherit the document's common page area.
    pub fn with_common_area_inheritance(mut self, inherit: bool) -> Self {
        self.options = self.options.with_common_area_inheritance(inherit);
        self
    }

    /// Get the options in use.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert an OFD tree.
    pub fn convert(&self, ofd: &Ofd) -> Result<Conversion> {
        build_passage(ofd, &self.options)
    }
}
