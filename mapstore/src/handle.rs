//! Capabilities the store needs from objects owned by the map-rendering layer.
//!
//! The store never sees concrete layer, view or control types. Anything that
//! can report a title, a projection code or a control tag can be fed to the
//! population actions of [`ConfigStore`](crate::ConfigStore).

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Object with a display title (layers, view presets).
pub trait HasTitle {
    /// Title shown to the user.
    fn title(&self) -> &str;
}

/// Map view that knows the code of its projection, e.g. `EPSG:3857`.
pub trait HasProjectionCode {
    /// Projection code of the view.
    fn projection_code(&self) -> &str;
}

/// Map control that is tagged with its kind when it is constructed.
pub trait HasControlKind {
    /// Kind of the control.
    fn control_kind(&self) -> ControlKind;
}

/// Kind of a map control.
///
/// The title of a control in the store is derived from its kind, so every
/// built-in kind is displayed with its own name (`ScaleLine`, `Zoom`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    /// Attribution of the displayed data sources.
    Attribution,
    /// Full screen toggle button.
    FullScreen,
    /// Coordinates under the pointer.
    MousePosition,
    /// Small overview map.
    OverviewMap,
    /// Reset rotation button.
    Rotate,
    /// Scale bar.
    ScaleLine,
    /// Zoom in/out buttons.
    Zoom,
    /// Zoom slider.
    ZoomSlider,
    /// Zoom to a fixed extent button.
    ZoomToExtent,
    /// Application specific control with the given name.
    Custom(String),
}

impl ControlKind {
    /// Display title of the control.
    pub fn title(&self) -> &str {
        match self {
            ControlKind::Attribution => "Attribution",
            ControlKind::FullScreen => "FullScreen",
            ControlKind::MousePosition => "MousePosition",
            ControlKind::OverviewMap => "OverviewMap",
            ControlKind::Rotate => "Rotate",
            ControlKind::ScaleLine => "ScaleLine",
            ControlKind::Zoom => "Zoom",
            ControlKind::ZoomSlider => "ZoomSlider",
            ControlKind::ZoomToExtent => "ZoomToExtent",
            ControlKind::Custom(name) => name,
        }
    }
}

impl Display for ControlKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl<T: HasTitle + ?Sized> HasTitle for &T {
    fn title(&self) -> &str {
        (**self).title()
    }
}

impl<T: HasTitle + ?Sized> HasTitle for Box<T> {
    fn title(&self) -> &str {
        (**self).title()
    }
}

impl<T: HasTitle + ?Sized> HasTitle for Arc<T> {
    fn title(&self) -> &str {
        (**self).title()
    }
}

impl<T: HasProjectionCode + ?Sized> HasProjectionCode for &T {
    fn projection_code(&self) -> &str {
        (**self).projection_code()
    }
}

impl<T: HasProjectionCode + ?Sized> HasProjectionCode for Box<T> {
    fn projection_code(&self) -> &str {
        (**self).projection_code()
    }
}

impl<T: HasProjectionCode + ?Sized> HasProjectionCode for Arc<T> {
    fn projection_code(&self) -> &str {
        (**self).projection_code()
    }
}

impl<T: HasControlKind + ?Sized> HasControlKind for &T {
    fn control_kind(&self) -> ControlKind {
        (**self).control_kind()
    }
}

impl<T: HasControlKind + ?Sized> HasControlKind for Box<T> {
    fn control_kind(&self) -> ControlKind {
        (**self).control_kind()
    }
}

impl<T: HasControlKind + ?Sized> HasControlKind for Arc<T> {
    fn control_kind(&self) -> ControlKind {
        (**self).control_kind()
    }
}

impl HasControlKind for ControlKind {
    fn control_kind(&self) -> ControlKind {
        self.clone()
    }
}
