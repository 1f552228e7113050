//! Records stored in the derived lists of the [`DisplayConfig`](crate::DisplayConfig).

use serde::{Deserialize, Serialize};

/// Visibility and opacity of one optional overlay layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerToggle {
    /// Title of the layer.
    pub title: String,
    /// Whether the layer is currently shown.
    pub visibility: bool,
    /// Opacity of the layer in `[0, 1]`.
    pub opacity: f64,
}

impl LayerToggle {
    /// Toggle of a layer that is initially hidden and fully opaque.
    pub fn hidden(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            visibility: false,
            opacity: 1.0,
        }
    }
}

/// Enabled state of a map control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlToggle {
    /// Title of the control.
    pub title: String,
    /// Whether the control is enabled.
    pub checked: bool,
}

impl ControlToggle {
    /// Toggle of an enabled control.
    pub fn enabled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            checked: true,
        }
    }
}

/// Optional behaviour of the drawing tools, e.g. showing segment lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOption {
    /// Title of the option.
    pub title: String,
    /// Whether the option is enabled.
    pub checked: bool,
}

impl DrawOption {
    /// Creates a new draw option.
    pub fn new(title: impl Into<String>, checked: bool) -> Self {
        Self {
            title: title.into(),
            checked,
        }
    }
}
