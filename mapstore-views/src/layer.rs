//! Layers of the map as seen by the pages.

use mapstore::HasTitle;

/// Role of a layer in the layer switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Background layer, exactly one is visible at a time.
    Base,
    /// Overlay that can be shown on top of the base layer.
    Optional,
    /// Layer with vector features.
    Vector,
}

/// Map layer with a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLayer {
    title: String,
    kind: LayerKind,
}

impl MapLayer {
    /// Creates a new layer.
    pub fn new(title: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            title: title.into(),
            kind,
        }
    }

    /// Creates a base layer.
    pub fn base(title: impl Into<String>) -> Self {
        Self::new(title, LayerKind::Base)
    }

    /// Creates an optional overlay layer.
    pub fn optional(title: impl Into<String>) -> Self {
        Self::new(title, LayerKind::Optional)
    }

    /// Creates a vector layer.
    pub fn vector(title: impl Into<String>) -> Self {
        Self::new(title, LayerKind::Vector)
    }

    /// Role of the layer.
    pub fn kind(&self) -> LayerKind {
        self.kind
    }
}

impl HasTitle for MapLayer {
    fn title(&self) -> &str {
        &self.title
    }
}
