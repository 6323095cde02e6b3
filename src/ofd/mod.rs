//! Source OFD object tree.
//!
//! These types describe an OFD package after it has been read and validated
//! by an XML reader. The converter only borrows them; nothing here is ever
//! mutated during conversion. Every optional OFD element is an `Option`
//! (or an empty collection) rather than a sentinel value.
//!
//! All lengths are in millimeters, as stored in OFD.

mod document;
mod object;
mod page;

pub use document::{CommonData, DocBody, DocInfo, Document, Ofd, PageArea, StBox};
pub use object::{ImageObject, PageObject, PathObject, TextCode, TextObject};
pub use page::{Layer, LayerRole, Page, PageBlock};
