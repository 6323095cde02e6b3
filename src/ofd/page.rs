//! Page-level source types.

use super::{PageArea, PageObject};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A page (`Page_N/Content.xml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page area; `None` when the page does not declare a paper size
    #[serde(default)]
    pub area: Option<PageArea>,

    /// Layers in drawing order
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Page {
    /// Create a page without an explicit area.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page with a physical box of the given size (mm).
    pub fn with_area(width: f64, height: f64) -> Self {
        Self {
            area: Some(PageArea::new(width, height)),
            layers: Vec::new(),
        }
    }

    /// Add a layer.
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }
}

/// A content layer (`CT_Layer`).
///
/// A layer is itself the outermost page block: its objects may be content
/// objects or nested [`PageBlock`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer id
    #[serde(default)]
    pub id: u32,

    /// Semantic role (`Type` attribute)
    #[serde(default, rename = "type")]
    pub role: LayerRole,

    /// Content objects and nested blocks, in document order
    #[serde(default)]
    pub objects: Vec<PageObject>,
}

impl Layer {
    /// Create an empty layer with the given role.
    pub fn new(role: LayerRole) -> Self {
        Self {
            id: 0,
            role,
            objects: Vec::new(),
        }
    }

    /// Add an object (builder style).
    pub fn with_object(mut self, object: impl Into<PageObject>) -> Self {
        self.objects.push(object.into());
        self
    }

    /// Add an object.
    pub fn add_object(&mut self, object: impl Into<PageObject>) {
        self.objects.push(object.into());
    }
}

/// A grouping of content objects (`CT_PageBlock`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageBlock {
    /// Block id
    #[serde(default)]
    pub id: u32,

    /// Content objects and nested blocks
    #[serde(default)]
    pub objects: Vec<PageObject>,
}

impl PageBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object (builder style).
    pub fn with_object(mut self, object: impl Into<PageObject>) -> Self {
        self.objects.push(object.into());
        self
    }
}

/// Layer role as written in the source.
///
/// OFD defines three roles; anything else is kept verbatim as
/// [`LayerRole::Unrecognized`] so the converter can report it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayerRole {
    /// Drawn above the body
    Foreground,
    /// Main content
    #[default]
    Body,
    /// Drawn beneath the body
    Background,
    /// A role OFD does not define
    Unrecognized(String),
}

impl LayerRole {
    /// Get the role name as written in OFD.
    pub fn as_str(&self) -> &str {
        match self {
            LayerRole::Foreground => "Foreground",
            LayerRole::Body => "Body",
            LayerRole::Background => "Background",
            LayerRole::Unrecognized(s) => s,
        }
    }
}

impl From<&str> for LayerRole {
    fn from(s: &str) -> Self {
        match s {
            "Foreground" => LayerRole::Foreground,
            "Body" => LayerRole::Body,
            "Background" => LayerRole::Background,
            other => LayerRole::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for LayerRole {
    fn from(s: String) -> Self {
        LayerRole::from(s.as_str())
    }
}

impl From<LayerRole> for String {
    fn from(role: LayerRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for LayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_role_from_str() {
        assert_eq!(LayerRole::from("Foreground"), LayerRole::Foreground);
        assert_eq!(LayerRole::from("Body"), LayerRole::Body);
        assert_eq!(LayerRole::from("Background"), LayerRole::Background);
        assert_eq!(
            LayerRole::from("Watermark"),
            LayerRole::Unrecognized("Watermark".into())
        );
    }

    #[test]
    fn test_layer_role_serde() {
        let role: LayerRole = serde_json::from_str("\"Background\"").unwrap();
        assert_eq!(role, LayerRole::Background);

        let json = serde_json::to_string(&LayerRole::Unrecognized("X".into())).unwrap();
        assert_eq!(json, "\"X\"");
    }

    #[test]
    fn test_layer_defaults_to_body() {
        let layer: Layer = serde_json::from_str("{}").unwrap();
        assert_eq!(layer.role, LayerRole::Body);
        assert!(layer.objects.is_empty());
    }

    #[test]
    fn test_page_with_area() {
        let page = Page::with_area(210.0, 297.0);
        let area = page.area.unwrap();
        assert_eq!(area.physical_box.width, 210.0);
        assert_eq!(area.physical_box.height, 297.0);
        assert!(Page::new().area.is_none());
    }
}
