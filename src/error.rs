//! Error types for unofd library.

use serde::Serialize;
use std::io;
use thiserror::Error;

/// Result type alias for unofd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or converting an OFD tree.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The serialized source tree could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// The OFD root has no document body.
    #[error("OFD root contains no document body")]
    MissingDocBody,

    /// The first document body has no document.
    #[error("Document body contains no document")]
    MissingDocument,

    /// A content object failed to convert while running in strict mode.
    #[error("Page {page}: {error}")]
    ObjectConversion {
        /// Page index (0-based) the object belongs to
        page: usize,
        /// The underlying object failure
        error: ObjectError,
    },

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Check if this error means the source tree lacks a required top-level element.
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::MissingDocBody | Error::MissingDocument)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Deserialize(err.to_string())
    }
}

/// Failure converting a single layer or content object.
///
/// These never abort a conversion in lenient mode; they are reported as
/// diagnostics next to the converted passage.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ObjectError {
    /// A field the converter needs is absent from the object.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Bounding box is negative or not finite.
    #[error("invalid geometry: box ({x}, {y}, {width}, {height}) mm")]
    InvalidGeometry {
        /// Box x in millimeters
        x: f64,
        /// Box y in millimeters
        y: f64,
        /// Box width in millimeters
        width: f64,
        /// Box height in millimeters
        height: f64,
    },

    /// Font size is not a finite, positive length.
    #[error("invalid font size: {0} mm")]
    InvalidFontSize(f64),

    /// The layer role is none of Foreground, Body or Background.
    #[error("unknown layer role: {0:?}")]
    UnknownLayerRole(String),
}
