//! The display configuration state tree.

use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::record::{ControlToggle, DrawOption, LayerToggle};

/// Currently selected values of the dropdown and radio controls of the pages.
///
/// Each value is replaced as a whole when the user picks something else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SelectOptions {
    /// Title of the selected map center preset, if any was picked.
    pub current_center: Option<String>,
    /// Imagery set of the Bing Maps layer.
    pub bing_map_style: String,
    /// Geometry type drawn by the drawing tool.
    pub draw_type: String,
    /// Active interaction of the interaction page.
    pub interaction_type: String,
    /// Pointer condition that selects vector features.
    pub vector_select_type: String,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            current_center: None,
            bing_map_style: "RoadOnDemand".to_string(),
            draw_type: "Point".to_string(),
            interaction_type: "Select".to_string(),
            vector_select_type: "singleclick".to_string(),
        }
    }
}

/// Map display configuration shared by all pages.
///
/// The lists are derived from the live map objects the pages were mounted
/// with. Pages read the fields directly; all changes go through
/// [`ConfigStore`](crate::ConfigStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Codes of the projections offered by the view presets, in the order
    /// they were added. Not deduplicated.
    pub projections_title: Vec<String>,
    /// Code of the selected projection.
    pub current_projection: String,
    /// Titles of the selectable map center presets. Not deduplicated.
    pub center_options: Vec<String>,
    /// Selected values of the dropdown and radio controls.
    pub select_options: SelectOptions,
    /// Titles of the available base layers, each at most once.
    pub base_layers_title: Vec<String>,
    /// Title of the visible base layer.
    pub base_layers_visibility: String,
    /// Opacity of the visible base layer.
    pub base_layers_opacity: f64,
    /// One toggle per optional overlay layer.
    pub optional_layers: Vec<LayerToggle>,
    /// Titles of the vector layers, each at most once.
    pub vector_layers_title: Vec<String>,
    /// One toggle per map control.
    pub map_controls: Vec<ControlToggle>,
    /// Options of the drawing tools. Seeded once, only `checked` changes.
    pub draw_options: Vec<DrawOption>,
}

impl DisplayConfig {
    /// Creates the state with the defaults from `config` and empty derived lists.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            projections_title: Vec::new(),
            current_projection: config.projection.clone(),
            center_options: Vec::new(),
            select_options: config.select_options.clone(),
            base_layers_title: Vec::new(),
            base_layers_visibility: config.base_layer.clone(),
            base_layers_opacity: config.base_layer_opacity,
            optional_layers: Vec::new(),
            vector_layers_title: Vec::new(),
            map_controls: Vec::new(),
            draw_options: config.draw_options.clone(),
        }
    }

    /// Toggle of the optional layer with the given title.
    pub fn optional_layer(&self, title: &str) -> Option<&LayerToggle> {
        self.optional_layers.iter().find(|layer| layer.title == title)
    }

    /// Toggle of the map control with the given title.
    pub fn map_control(&self, title: &str) -> Option<&ControlToggle> {
        self.map_controls.iter().find(|control| control.title == title)
    }

    /// Draw option with the given title.
    pub fn draw_option(&self, title: &str) -> Option<&DrawOption> {
        self.draw_options.iter().find(|option| option.title == title)
    }

    /// Optional layers that are currently shown.
    pub fn visible_optional_layers(&self) -> impl Iterator<Item = &LayerToggle> {
        self.optional_layers.iter().filter(|layer| layer.visibility)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}
