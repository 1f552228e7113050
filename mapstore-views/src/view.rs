//! Map view presets: a named position in a given projection.

use mapstore::{HasProjectionCode, HasTitle};

/// Map view preset.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPreset {
    title: String,
    projection: String,
    center: [f64; 2],
    zoom: f64,
}

impl ViewPreset {
    /// Creates a preset centered on `center` (in projection units) at the given zoom level.
    pub fn new(
        title: impl Into<String>,
        projection: impl Into<String>,
        center: [f64; 2],
        zoom: f64,
    ) -> Self {
        Self {
            title: title.into(),
            projection: projection.into(),
            center,
            zoom,
        }
    }

    /// Center of the view in projection units.
    pub fn center(&self) -> [f64; 2] {
        self.center
    }

    /// Zoom level of the view.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

impl HasTitle for ViewPreset {
    fn title(&self) -> &str {
        &self.title
    }
}

impl HasProjectionCode for ViewPreset {
    fn projection_code(&self) -> &str {
        &self.projection
    }
}
