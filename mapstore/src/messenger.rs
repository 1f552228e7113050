//! Notification about applied mutations.

use serde::Serialize;

/// Field of the [`DisplayConfig`](crate::DisplayConfig) that was changed by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StateChange {
    /// A projection code was appended.
    ProjectionsTitle,
    /// The selected projection changed.
    CurrentProjection,
    /// A center preset was appended.
    CenterOptions,
    /// One of the select options changed.
    SelectOptions,
    /// A base layer title was appended.
    BaseLayersTitle,
    /// The visible base layer changed.
    BaseLayersVisibility,
    /// The base layer opacity changed.
    BaseLayersOpacity,
    /// An optional layer was appended or toggled.
    OptionalLayers,
    /// A vector layer title was appended.
    VectorLayersTitle,
    /// A map control was appended or toggled.
    MapControls,
    /// A draw option was toggled.
    DrawOptions,
}

/// Receives a notification for every mutation that changed the state.
///
/// Pages use it to re-read the fields they display. Notifications are
/// delivered once the store is no longer locked, see
/// [`SharedConfigStore::update`](crate::SharedConfigStore::update).
pub trait StoreMessenger: Send + Sync {
    /// Called after `change` was applied.
    fn state_changed(&self, change: StateChange);
}

impl<F> StoreMessenger for F
where
    F: Fn(StateChange) + Send + Sync,
{
    fn state_changed(&self, change: StateChange) {
        self(change)
    }
}
