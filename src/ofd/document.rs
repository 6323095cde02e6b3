//! Package- and document-level source types.

use super::Page;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Root of an OFD package (`OFD.xml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ofd {
    /// Format version (e.g., "1.0")
    pub version: String,

    /// Document type tag (e.g., "OFD")
    pub doc_type: String,

    /// Document bodies, in package order
    #[serde(default)]
    pub doc_bodies: Vec<DocBody>,
}

impl Ofd {
    /// Create an empty package root.
    pub fn new(version: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            doc_type: doc_type.into(),
            doc_bodies: Vec::new(),
        }
    }

    /// Load a serialized source tree from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a serialized source tree from a reader producing JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Add a document body.
    pub fn add_body(&mut self, body: DocBody) {
        self.doc_bodies.push(body);
    }

    /// Get the first document body, the only one the converter reads.
    pub fn first_body(&self) -> Option<&DocBody> {
        self.doc_bodies.first()
    }
}

impl Default for Ofd {
    fn default() -> Self {
        Self::new("1.0", "OFD")
    }
}

/// A `DocBody` entry: document metadata plus the document itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocBody {
    /// Document metadata
    #[serde(default)]
    pub doc_info: DocInfo,

    /// The document referenced by `DocRoot`
    #[serde(default)]
    pub document: Option<Document>,
}

impl DocBody {
    /// Create a body holding the given document.
    pub fn new(doc_info: DocInfo, document: Document) -> Self {
        Self {
            doc_info,
            document: Some(document),
        }
    }
}

/// Document metadata (`CT_DocInfo`).
///
/// Copied verbatim onto the editable passage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocInfo {
    /// Unique document identifier
    pub doc_id: Option<String>,

    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Abstract
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Creation date
    pub creation_date: Option<NaiveDate>,

    /// Last modification date
    pub mod_date: Option<NaiveDate>,

    /// Usage category (e.g., "Normal", "EBook")
    pub doc_usage: Option<String>,

    /// Cover image location
    pub cover: Option<String>,

    /// Keywords
    pub keywords: Vec<String>,

    /// Creator application
    pub creator: Option<String>,

    /// Creator application version
    pub creator_version: Option<String>,

    /// User-defined metadata
    pub custom_data: BTreeMap<String, String>,
}

impl DocInfo {
    /// Create document info with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// A document (`Document.xml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document-wide defaults
    #[serde(default)]
    pub common_data: Option<CommonData>,

    /// Pages in reading order
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Get the document-wide default page area, if declared.
    pub fn default_area(&self) -> Option<&PageArea> {
        self.common_data.as_ref()?.page_area.as_ref()
    }
}

/// Document-wide defaults (`CT_CommonData`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonData {
    /// Largest object id in use
    pub max_unit_id: u32,

    /// Default page area for pages that do not declare one
    pub page_area: Option<PageArea>,
}

/// Page area (`CT_PageArea`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageArea {
    /// Physical paper box
    pub physical_box: StBox,

    /// Displayable region
    #[serde(default)]
    pub application_box: Option<StBox>,

    /// Content region
    #[serde(default)]
    pub content_box: Option<StBox>,

    /// Bleed region
    #[serde(default)]
    pub bleed_box: Option<StBox>,
}

impl PageArea {
    /// Create an area with only a physical box of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            physical_box: StBox::new(0.0, 0.0, width, height),
            application_box: None,
            content_box: None,
            bleed_box: None,
        }
    }
}

/// A rectangle (`ST_Box`), in millimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StBox {
    /// Left edge
    pub x: f64,

    /// Top edge
    pub y: f64,

    /// Horizontal extent
    pub width: f64,

    /// Vertical extent
    pub height: f64,
}

impl StBox {
    /// Create a box.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check that every component is finite and the extents are non-negative.
    pub fn is_well_formed(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}
