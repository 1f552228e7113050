//! Controls placed on the map.

use mapstore::{ControlKind, HasControlKind};

/// Map control placed on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapControl {
    kind: ControlKind,
}

impl MapControl {
    /// Creates a control of the given kind.
    pub fn new(kind: ControlKind) -> Self {
        Self { kind }
    }

    /// Default control set of a map: zoom buttons, rotation reset and attribution.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(ControlKind::Zoom),
            Self::new(ControlKind::Rotate),
            Self::new(ControlKind::Attribution),
        ]
    }
}

impl From<ControlKind> for MapControl {
    fn from(kind: ControlKind) -> Self {
        Self::new(kind)
    }
}

impl HasControlKind for MapControl {
    fn control_kind(&self) -> ControlKind {
        self.kind.clone()
    }
}
