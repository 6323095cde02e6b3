//! Conversion options and configuration.

use crate::model::PageSize;

/// Options for converting an OFD tree.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Paper size for pages that declare no area; must be
    /// [valid](PageSize::is_valid), otherwise A4 is used
    pub default_page_size: PageSize,

    /// Whether a page without an area inherits the document's common page area
    pub inherit_common_area: bool,

    /// Whether to build pages in parallel
    pub parallel: bool,
}

impl ConvertOptions {
    /// Create new convert options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable strict mode (abort on the first object failure).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Enable lenient mode (skip failing objects and report them).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the paper size used for pages without an area.
    ///
    /// A size that is not [valid](PageSize::is_valid) is ignored and the
    /// current default is kept.
    pub fn with_default_page_size(mut self, size: PageSize) -> Self {
        if size.is_valid() {
            self.default_page_size = size;
        } else {
            log::warn!(
                "Ignoring invalid default page size {} x {} mm",
                size.width_mm,
                size.height_mm
            );
        }
        self
    }

    /// Let pages without an area fall back to the document's common page area.
    pub fn with_common_area_inheritance(mut self, inherit: bool) -> Self {
        self.inherit_common_area = inherit;
        self
    }

    /// Enable or disable parallel page building.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            default_page_size: PageSize::A4,
            inherit_common_area: false,
            parallel: false,
        }
    }
}

/// Error handling mode for per-object failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail the whole conversion on the first object error
    Strict,
    /// Skip the failing object, record a diagnostic and continue
    #[default]
    Lenient,
}
