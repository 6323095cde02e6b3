//! # unofd
//!
//! Conversion of parsed OFD (Open Fixed-layout Document) object trees into
//! an editable page model.
//!
//! OFD is an XML-based fixed-layout format, similar in spirit to PDF. This
//! library takes the object tree an OFD reader produces (see [`ofd`]) and
//! turns it into a [`Passage`]: pages sized in pixels, each holding
//! positioned text blocks grouped into background, body and foreground
//! layers, ready for an editing surface.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unofd::{convert_file, render};
//!
//! fn main() -> unofd::Result<()> {
//!     // Convert a serialized OFD tree
//!     let conversion = convert_file("document.json")?;
//!
//!     for diagnostic in &conversion.diagnostics {
//!         eprintln!("skipped: {}", diagnostic);
//!     }
//!
//!     let json = render::to_json(&conversion.passage, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Unit conversion**: millimeters to pixels at a fixed 96 DPI
//! - **Layer mapping**: explicit, total mapping of OFD layer roles
//! - **Best-effort conversion**: bad objects are skipped and reported
//! - **Strict mode**: fail on the first bad object instead
//! - **Parallel processing**: optional Rayon page building

pub mod convert;
pub mod error;
pub mod model;
pub mod ofd;
pub mod render;
pub mod units;

// Re-export commonly used types
pub use convert::{
    Conversion, ConversionStats, ConvertOptions, Diagnostic, ErrorMode, OfdConverter,
};
pub use error::{Error, ObjectError, Result};
pub use model::{
    Block, BlockContent, LayerKind, Page, PageSize, Passage, TextContent, TextStyle,
};
pub use ofd::Ofd;
pub use render::JsonFormat;
pub use units::{mm_to_pixel, pixel_to_mm};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Convert an OFD tree with default options.
///
/// # Example
///
/// ```
/// use unofd::ofd::{DocBody, DocInfo, Document, Ofd, Page};
///
/// let mut document = Document::new();
/// document.add_page(Page::with_area(210.0, 297.0));
/// document.add_page(Page::new());
///
/// let mut ofd = Ofd::default();
/// ofd.add_body(DocBody::new(DocInfo::default(), document));
///
/// let conversion = unofd::convert(&ofd).unwrap();
/// assert_eq!(conversion.passage.page_count(), 2);
/// ```
pub fn convert(ofd: &Ofd) -> Result<Conversion> {
    convert::build_passage(ofd, &ConvertOptions::default())
}

/// Convert an OFD tree with custom options.
///
/// # Example
///
/// ```
/// use unofd::{convert_with_options, ConvertOptions, Ofd};
///
/// let options = ConvertOptions::new().strict();
/// let result = convert_with_options(&Ofd::default(), &options);
/// assert!(result.is_err()); // no document body
/// ```
pub fn convert_with_options(ofd: &Ofd, options: &ConvertOptions) -> Result<Conversion> {
    convert::build_passage(ofd, options)
}

/// Load a JSON-serialized OFD tree and convert it.
pub fn convert_json_str(json: &str) -> Result<Conversion> {
    let ofd = Ofd::from_json_str(json)?;
    convert(&ofd)
}

/// Load a JSON-serialized OFD tree from a file and convert it.
///
/// # Arguments
///
/// * `path` - Path to the JSON file
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<Conversion> {
    convert_file_with_options(path, &ConvertOptions::default())
}

/// Load a JSON-serialized OFD tree from a file and convert it with custom options.
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<Conversion> {
    let reader = BufReader::new(File::open(path)?);
    let ofd = Ofd::from_reader(reader)?;
    convert_with_options(&ofd, options)
}
