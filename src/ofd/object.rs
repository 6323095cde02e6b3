//! Content objects found inside layers and page blocks.

use super::{PageBlock, StBox};
use serde::{Deserialize, Serialize};

/// An entry of a layer or page block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageObject {
    /// A text object (`CT_Text`)
    Text(TextObject),

    /// A path object (`CT_Path`)
    Path(PathObject),

    /// An image object (`CT_Image`)
    Image(ImageObject),

    /// A nested page block (`CT_PageBlock`)
    Block(PageBlock),
}

impl From<TextObject> for PageObject {
    fn from(text: TextObject) -> Self {
        PageObject::Text(text)
    }
}

impl From<PathObject> for PageObject {
    fn from(path: PathObject) -> Self {
        PageObject::Path(path)
    }
}

impl From<ImageObject> for PageObject {
    fn from(image: ImageObject) -> Self {
        PageObject::Image(image)
    }
}

impl From<PageBlock> for PageObject {
    fn from(block: PageBlock) -> Self {
        PageObject::Block(block)
    }
}

/// A text object (`CT_Text`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextObject {
    /// Object id
    #[serde(default)]
    pub id: u32,

    /// Bounding box (mm); required for conversion
    #[serde(default)]
    pub boundary: Option<StBox>,

    /// Font size (mm); required for conversion
    #[serde(default)]
    pub size: Option<f64>,

    /// Font resource id
    #[serde(default)]
    pub font: Option<u32>,

    /// Text payload; absent for an empty text object
    #[serde(default)]
    pub text_code: Option<TextCode>,
}

impl TextObject {
    /// Create a text object with a plain string payload.
    pub fn new(boundary: StBox, size: f64, text: impl Into<String>) -> Self {
        Self {
            id: 0,
            boundary: Some(boundary),
            size: Some(size),
            font: None,
            text_code: Some(TextCode::new(text)),
        }
    }

    /// Set the object id (builder style).
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Get the plain text payload, empty if there is none.
    pub fn text(&self) -> &str {
        self.text_code.as_ref().map_or("", |code| code.text.as_str())
    }
}

/// A run of text (`TextCode`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextCode {
    /// Baseline x offset within the object box (mm)
    #[serde(default)]
    pub x: Option<f64>,

    /// Baseline y offset within the object box (mm)
    #[serde(default)]
    pub y: Option<f64>,

    /// The text content
    #[serde(default)]
    pub text: String,
}

impl TextCode {
    /// Create a text code without explicit offsets.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            x: None,
            y: None,
            text: text.into(),
        }
    }
}

/// A path object (`CT_Path`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathObject {
    /// Object id
    pub id: u32,

    /// Bounding box (mm)
    pub boundary: StBox,

    /// Abbreviated path data (`AbbreviatedData`)
    pub abbreviated_data: String,

    /// Whether the outline is stroked
    pub stroke: bool,

    /// Whether the interior is filled
    pub fill: bool,
}

/// An image object (`CT_Image`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageObject {
    /// Object id
    pub id: u32,

    /// Bounding box (mm)
    pub boundary: StBox,

    /// Multimedia resource id
    pub resource_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_payload() {
        let text = TextObject::new(StBox::new(0.0, 0.0, 10.0, 5.0), 3.0, "hello");
        assert_eq!(text.text(), "hello");

        let empty = TextObject {
            text_code: None,
            ..text
        };
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_page_object_tagged_json() {
        let json = r#"[
            { "kind": "text", "id": 7, "boundary": { "x": 1, "y": 2, "width": 3, "height": 4 },
              "size": 3.5, "text_code": { "text": "hi" } },
            { "kind": "path", "abbreviated_data": "M 0 0 L 1 1" },
            { "kind": "block", "objects": [ { "kind": "image", "resource_id": 3 } ] }
        ]"#;

        let objects: Vec<PageObject> = serde_json::from_str(json).unwrap();
        assert_eq!(objects.len(), 3);
        match &objects[0] {
            PageObject::Text(t) => {
                assert_eq!(t.id, 7);
                assert_eq!(t.text(), "hi");
                assert_eq!(t.boundary.map(|b| b.height), Some(4.0));
            }
            other => panic!("expected text, got {:?}", other),
        }
        assert!(matches!(objects[1], PageObject::Path(_)));
        match &objects[2] {
            PageObject::Block(b) => assert!(matches!(b.objects[0], PageObject::Image(_))),
            other => panic!("expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_text_without_size_still_loads() {
        let json = r#"{ "kind": "text", "boundary": { "x": 0, "y": 0, "width": 5, "height": 5 } }"#;
        match serde_json::from_str::<PageObject>(json).unwrap() {
            PageObject::Text(t) => {
                assert!(t.boundary.is_some());
                assert_eq!(t.size, None);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }
}
