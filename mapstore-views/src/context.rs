//! Live map objects a page is mounted with.

use mapstore::{ControlKind, HasTitle};

use crate::control::MapControl;
use crate::layer::{LayerKind, MapLayer};
use crate::view::ViewPreset;

/// Layers, view presets and controls of one map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapContext {
    /// Layers in drawing order.
    pub layers: Vec<MapLayer>,
    /// View presets the user can jump to.
    pub views: Vec<ViewPreset>,
    /// Controls placed on the map.
    pub controls: Vec<MapControl>,
}

impl MapContext {
    /// Layers of the given kind, in drawing order.
    pub fn layers_of(&self, kind: LayerKind) -> impl Iterator<Item = &MapLayer> {
        self.layers.iter().filter(move |layer| layer.kind() == kind)
    }

    /// Background layers.
    pub fn base_layers(&self) -> impl Iterator<Item = &MapLayer> {
        self.layers_of(LayerKind::Base)
    }

    /// Overlay layers.
    pub fn optional_layers(&self) -> impl Iterator<Item = &MapLayer> {
        self.layers_of(LayerKind::Optional)
    }

    /// Vector layers.
    pub fn vector_layers(&self) -> impl Iterator<Item = &MapLayer> {
        self.layers_of(LayerKind::Vector)
    }

    /// View preset with the given title.
    pub fn view(&self, title: &str) -> Option<&ViewPreset> {
        self.views.iter().find(|view| view.title() == title)
    }
}

/// Map used by the demo application.
pub fn demo_context() -> MapContext {
    MapContext {
        layers: vec![
            MapLayer::base("OSM Standard"),
            MapLayer::base("OSM Humanitarian"),
            MapLayer::base("Bing Maps"),
            MapLayer::base("Stamen Terrain"),
            MapLayer::optional("Railways"),
            MapLayer::optional("Country Borders"),
            MapLayer::optional("Tile Debug"),
            MapLayer::vector("Countries"),
            MapLayer::vector("Capitals"),
        ],
        views: vec![
            ViewPreset::new("World", "EPSG:4326", [0.0, 0.0], 2.0),
            ViewPreset::new("Europe", "EPSG:3857", [1_113_194.9, 6_446_275.8], 4.0),
            ViewPreset::new("Seoul", "EPSG:4326", [126.978, 37.566], 10.0),
        ],
        controls: MapControl::defaults()
            .into_iter()
            .chain([
                MapControl::new(ControlKind::ScaleLine),
                MapControl::new(ControlKind::FullScreen),
                MapControl::new(ControlKind::MousePosition),
            ])
            .collect(),
    }
}
