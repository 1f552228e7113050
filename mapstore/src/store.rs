//! Configuration store: the only owner of the [`DisplayConfig`].
//!
//! Changes come in two granularities:
//! * actions (`populate_*`) take the live map objects a page was mounted with,
//!   derive a title from each of them and apply one mutation per object;
//! * mutations (`add_*`, `set_*`) change a single field of the state.
//!
//! Base and vector layer titles are kept unique. Projection codes, center
//! presets, optional layers and map controls are appended every time they are
//! supplied, so pages are expected to populate them once per mount.
//!
//! Mutations do not call the [`StoreMessenger`] themselves. Applied changes
//! are queued and delivered by [`ConfigStore::dispatch_changes`], or by
//! [`SharedConfigStore::update`](crate::SharedConfigStore::update) once the
//! write lock is released, so a messenger may read the store it listens to.

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::handle::{HasControlKind, HasProjectionCode, HasTitle};
use crate::messenger::{StateChange, StoreMessenger};
use crate::record::{ControlToggle, LayerToggle};
use crate::state::DisplayConfig;

/// Owner of the map display configuration.
pub struct ConfigStore {
    state: DisplayConfig,
    messenger: Option<Arc<dyn StoreMessenger>>,
    pending: Vec<StateChange>,
}

/// Changes queued by a [`ConfigStore`] together with the messenger they are for.
#[must_use = "changes are only delivered by `dispatch`"]
pub struct PendingChanges {
    messenger: Option<Arc<dyn StoreMessenger>>,
    changes: Vec<StateChange>,
}

impl PendingChanges {
    /// Queued changes in the order they were applied.
    pub fn changes(&self) -> &[StateChange] {
        &self.changes
    }

    /// Delivers the changes to the messenger.
    pub fn dispatch(self) {
        if let Some(messenger) = self.messenger {
            for change in self.changes {
                messenger.state_changed(change);
            }
        }
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("state", &self.state)
            .field("messenger", &self.messenger.is_some())
            .field("pending", &self.pending)
            .finish()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

impl ConfigStore {
    /// Creates a store with the defaults from `config`.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            state: DisplayConfig::from_config(config),
            messenger: None,
            pending: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &DisplayConfig {
        &self.state
    }

    /// Sets the receiver of change notifications, replacing the previous one.
    ///
    /// Changes that are still queued go to the new messenger, or are dropped
    /// when it is `None`.
    pub fn set_messenger(&mut self, messenger: Option<impl StoreMessenger + 'static>) {
        self.messenger = messenger.map(|m| Arc::new(m) as Arc<dyn StoreMessenger>);
        if self.messenger.is_none() {
            self.pending.clear();
        }
    }

    fn notify(&mut self, change: StateChange) {
        if self.messenger.is_some() {
            self.pending.push(change);
        }
    }

    /// Takes the queued changes out of the store.
    ///
    /// Used to deliver them after the store is no longer borrowed.
    pub fn take_pending_changes(&mut self) -> PendingChanges {
        PendingChanges {
            messenger: self.messenger.clone(),
            changes: std::mem::take(&mut self.pending),
        }
    }

    /// Delivers the queued changes to the messenger.
    pub fn dispatch_changes(&mut self) {
        self.take_pending_changes().dispatch();
    }

    /// Adds the title of every layer to the base layer titles.
    pub fn populate_base_layer_titles<L: HasTitle>(
        &mut self,
        layers: impl IntoIterator<Item = L>,
    ) {
        let before = self.state.base_layers_title.len();
        for layer in layers {
            self.add_base_layer_title(layer.title());
        }

        log::debug!(
            "Populated base layer titles: {} added, {} total",
            self.state.base_layers_title.len() - before,
            self.state.base_layers_title.len()
        );
    }

    /// Adds a hidden, fully opaque toggle for every layer.
    pub fn populate_optional_layers<L: HasTitle>(
        &mut self,
        layers: impl IntoIterator<Item = L>,
    ) {
        let mut count = 0;
        for layer in layers {
            self.add_optional_layer(LayerToggle::hidden(layer.title()));
            count += 1;
        }

        log::debug!("Populated optional layers: {count} added");
    }

    /// Adds the title of every layer to the vector layer titles.
    pub fn populate_vector_layer_titles<L: HasTitle>(
        &mut self,
        layers: impl IntoIterator<Item = L>,
    ) {
        let before = self.state.vector_layers_title.len();
        for layer in layers {
            self.add_vector_layer_title(layer.title());
        }

        log::debug!(
            "Populated vector layer titles: {} added, {} total",
            self.state.vector_layers_title.len() - before,
            self.state.vector_layers_title.len()
        );
    }

    /// Adds an enabled toggle for every control, titled after its kind.
    pub fn populate_map_controls<C: HasControlKind>(
        &mut self,
        controls: impl IntoIterator<Item = C>,
    ) {
        let mut count = 0;
        for control in controls {
            let kind = control.control_kind();
            self.add_map_control(ControlToggle::enabled(kind.title()));
            count += 1;
        }

        log::debug!("Populated map controls: {count} added");
    }

    /// Adds the projection code of every view.
    pub fn populate_projection_titles<V: HasProjectionCode>(
        &mut self,
        views: impl IntoIterator<Item = V>,
    ) {
        let mut count = 0;
        for view in views {
            self.add_projection_title(view.projection_code());
            count += 1;
        }

        log::debug!("Populated projection titles: {count} added");
    }

    /// Adds the title of every view to the center presets.
    pub fn populate_center_options<V: HasTitle>(&mut self, views: impl IntoIterator<Item = V>) {
        let mut count = 0;
        for view in views {
            self.add_center_option(view.title());
            count += 1;
        }

        log::debug!("Populated center options: {count} added");
    }

    /// Appends a base layer title unless it is already present.
    pub fn add_base_layer_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.state.base_layers_title.contains(&title) {
            log::trace!("Base layer title '{title}' is already registered");
            return;
        }

        log::trace!("Adding base layer title '{title}'");
        self.state.base_layers_title.push(title);
        self.notify(StateChange::BaseLayersTitle);
    }

    /// Appends a vector layer title unless it is already present.
    pub fn add_vector_layer_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.state.vector_layers_title.contains(&title) {
            log::trace!("Vector layer title '{title}' is already registered");
            return;
        }

        log::trace!("Adding vector layer title '{title}'");
        self.state.vector_layers_title.push(title);
        self.notify(StateChange::VectorLayersTitle);
    }

    /// Appends an optional layer toggle.
    pub fn add_optional_layer(&mut self, layer: LayerToggle) {
        log::trace!("Adding optional layer '{}'", layer.title);
        self.state.optional_layers.push(layer);
        self.notify(StateChange::OptionalLayers);
    }

    /// Appends a map control toggle.
    pub fn add_map_control(&mut self, control: ControlToggle) {
        log::trace!("Adding map control '{}'", control.title);
        self.state.map_controls.push(control);
        self.notify(StateChange::MapControls);
    }

    /// Appends a projection code.
    pub fn add_projection_title(&mut self, code: impl Into<String>) {
        let code = code.into();
        log::trace!("Adding projection '{code}'");
        self.state.projections_title.push(code);
        self.notify(StateChange::ProjectionsTitle);
    }

    /// Appends a center preset title.
    pub fn add_center_option(&mut self, title: impl Into<String>) {
        let title = title.into();
        log::trace!("Adding center option '{title}'");
        self.state.center_options.push(title);
        self.notify(StateChange::CenterOptions);
    }

    /// Selects the projection.
    pub fn set_current_projection(&mut self, code: impl Into<String>) {
        self.state.current_projection = code.into();
        self.notify(StateChange::CurrentProjection);
    }

    /// Selects the visible base layer.
    pub fn set_base_layer_visibility(&mut self, title: impl Into<String>) {
        let title = title.into();
        let titles = &self.state.base_layers_title;
        if !titles.is_empty() && !titles.contains(&title) {
            log::warn!("Showing base layer '{title}' that is not in the base layer list");
        }

        self.state.base_layers_visibility = title;
        self.notify(StateChange::BaseLayersVisibility);
    }

    /// Sets the opacity of the base layer.
    ///
    /// The value is stored as given; keeping it in `[0, 1]` is up to the caller.
    pub fn set_base_layer_opacity(&mut self, opacity: f64) {
        if !(0.0..=1.0).contains(&opacity) {
            log::warn!("Base layer opacity {opacity} is outside of [0, 1]");
        }

        self.state.base_layers_opacity = opacity;
        self.notify(StateChange::BaseLayersOpacity);
    }

    /// Shows or hides the optional layer with the given title.
    pub fn set_optional_layer_visibility(
        &mut self,
        title: &str,
        visibility: bool,
    ) -> Result<(), StoreError> {
        self.optional_layer_mut(title)?.visibility = visibility;
        self.notify(StateChange::OptionalLayers);
        Ok(())
    }

    /// Sets the opacity of the optional layer with the given title.
    pub fn set_optional_layer_opacity(
        &mut self,
        title: &str,
        opacity: f64,
    ) -> Result<(), StoreError> {
        if !(0.0..=1.0).contains(&opacity) {
            log::warn!("Opacity {opacity} of layer '{title}' is outside of [0, 1]");
        }

        self.optional_layer_mut(title)?.opacity = opacity;
        self.notify(StateChange::OptionalLayers);
        Ok(())
    }

    fn optional_layer_mut(&mut self, title: &str) -> Result<&mut LayerToggle, StoreError> {
        self.state
            .optional_layers
            .iter_mut()
            .find(|layer| layer.title == title)
            .ok_or_else(|| StoreError::UnknownOptionalLayer(title.to_string()))
    }

    /// Enables or disables the map control with the given title.
    pub fn set_map_control_checked(
        &mut self,
        title: &str,
        checked: bool,
    ) -> Result<(), StoreError> {
        let control = self
            .state
            .map_controls
            .iter_mut()
            .find(|control| control.title == title)
            .ok_or_else(|| StoreError::UnknownMapControl(title.to_string()))?;

        control.checked = checked;
        self.notify(StateChange::MapControls);
        Ok(())
    }

    /// Enables or disables the draw option with the given title.
    pub fn set_draw_option_checked(
        &mut self,
        title: &str,
        checked: bool,
    ) -> Result<(), StoreError> {
        let option = self
            .state
            .draw_options
            .iter_mut()
            .find(|option| option.title == title)
            .ok_or_else(|| StoreError::UnknownDrawOption(title.to_string()))?;

        option.checked = checked;
        self.notify(StateChange::DrawOptions);
        Ok(())
    }

    /// Selects a center preset, or clears the selection with `None`.
    pub fn set_current_center(&mut self, title: Option<String>) {
        self.state.select_options.current_center = title;
        self.notify(StateChange::SelectOptions);
    }

    /// Selects the imagery set of the Bing Maps layer.
    pub fn set_bing_map_style(&mut self, style: impl Into<String>) {
        self.state.select_options.bing_map_style = style.into();
        self.notify(StateChange::SelectOptions);
    }

    /// Selects the geometry type of the drawing tool.
    pub fn set_draw_type(&mut self, draw_type: impl Into<String>) {
        self.state.select_options.draw_type = draw_type.into();
        self.notify(StateChange::SelectOptions);
    }

    /// Selects the active interaction.
    pub fn set_interaction_type(&mut self, interaction_type: impl Into<String>) {
        self.state.select_options.interaction_type = interaction_type.into();
        self.notify(StateChange::SelectOptions);
    }

    /// Selects the condition used to select vector features.
    pub fn set_vector_select_type(&mut self, select_type: impl Into<String>) {
        self.state.select_options.vector_select_type = select_type.into();
        self.notify(StateChange::SelectOptions);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_abs_diff_eq;
    use parking_lot::Mutex;

    use super::*;
    use crate::handle::ControlKind;

    struct Layer(&'static str);

    impl HasTitle for Layer {
        fn title(&self) -> &str {
            self.0
        }
    }

    struct View {
        title: &'static str,
        projection: &'static str,
    }

    impl HasTitle for View {
        fn title(&self) -> &str {
            self.title
        }
    }

    impl HasProjectionCode for View {
        fn projection_code(&self) -> &str {
            self.projection
        }
    }

    fn view(title: &'static str, projection: &'static str) -> View {
        View { title, projection }
    }

    fn recording_store() -> (ConfigStore, Arc<Mutex<Vec<StateChange>>>) {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = changes.clone();
        let mut store = ConfigStore::default();
        store.set_messenger(Some(move |change: StateChange| sink.lock().push(change)));
        (store, changes)
    }

    #[test]
    fn initial_defaults() {
        let store = ConfigStore::default();
        let state = store.state();

        assert_eq!(state.base_layers_visibility, "OSM Standard");
        assert_abs_diff_eq!(state.base_layers_opacity, 1.0);
        assert_eq!(state.current_projection, "EPSG:4326");
    }

    #[test]
    fn uses_configured_defaults() {
        let config = StoreConfig {
            base_layer: "Bing Aerial".into(),
            base_layer_opacity: 0.7,
            projection: "EPSG:3857".into(),
            ..Default::default()
        };
        let store = ConfigStore::new(&config);

        assert_eq!(store.state().base_layers_visibility, "Bing Aerial");
        assert_abs_diff_eq!(store.state().base_layers_opacity, 0.7);
        assert_eq!(store.state().current_projection, "EPSG:3857");
        assert_eq!(store.state().draw_options, config.draw_options);
    }

    #[test]
    fn base_layer_titles_are_unique() {
        let mut store = ConfigStore::default();
        for _ in 0..5 {
            store.add_base_layer_title("OSM");
        }

        assert_eq!(store.state().base_layers_title, ["OSM"]);
    }

    #[test]
    fn vector_layer_titles_are_unique() {
        let mut store = ConfigStore::default();
        store.add_vector_layer_title("Countries");
        store.add_vector_layer_title("Rivers");
        store.add_vector_layer_title("Countries");

        assert_eq!(store.state().vector_layers_title, ["Countries", "Rivers"]);
    }

    #[test]
    fn base_layer_titles_keep_order() {
        let mut store = ConfigStore::default();
        store.add_base_layer_title("a");
        store.add_base_layer_title("b");
        store.add_base_layer_title("c");

        assert_eq!(store.state().base_layers_title, ["a", "b", "c"]);
    }

    #[test]
    fn populate_base_layers_skips_duplicates() {
        let mut store = ConfigStore::default();
        store.populate_base_layer_titles(&[Layer("OSM"), Layer("OSM")]);

        assert_eq!(store.state().base_layers_title, ["OSM"]);
    }

    #[test]
    fn populate_vector_layers_skips_duplicates() {
        let mut store = ConfigStore::default();
        let layers = vec![Layer("Countries"), Layer("Cities"), Layer("Countries")];
        store.populate_vector_layer_titles(&layers);
        store.populate_vector_layer_titles(&layers);

        assert_eq!(store.state().vector_layers_title, ["Countries", "Cities"]);
    }

    #[test]
    fn populate_optional_layers_adds_one_per_layer() {
        let mut store = ConfigStore::default();
        let layers = [Layer("Roads"), Layer("Rivers"), Layer("Roads")];
        store.populate_optional_layers(&layers);

        let toggles = &store.state().optional_layers;
        assert_eq!(toggles.len(), 3);
        let titles: Vec<_> = toggles.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Roads", "Rivers", "Roads"]);
        for toggle in toggles {
            assert!(!toggle.visibility);
            assert_abs_diff_eq!(toggle.opacity, 1.0);
        }
    }

    #[test]
    fn populate_optional_layers_twice_appends_again() {
        let mut store = ConfigStore::default();
        let layers = [Layer("Roads")];
        store.populate_optional_layers(&layers);
        store.populate_optional_layers(&layers);

        assert_eq!(store.state().optional_layers.len(), 2);
    }

    #[test]
    fn populate_map_controls_uses_kind_titles() {
        let mut store = ConfigStore::default();
        store.populate_map_controls([ControlKind::Attribution, ControlKind::ScaleLine]);

        assert_eq!(
            store.state().map_controls,
            [
                ControlToggle::enabled("Attribution"),
                ControlToggle::enabled("ScaleLine"),
            ]
        );
        assert!(store.state().map_controls.iter().all(|c| c.checked));
    }

    #[test]
    fn populate_projection_titles_keeps_duplicates() {
        let mut store = ConfigStore::default();
        store.populate_projection_titles(&[
            view("World", "EPSG:4326"),
            view("Europe", "EPSG:3857"),
            view("Asia", "EPSG:4326"),
        ]);

        assert_eq!(
            store.state().projections_title,
            ["EPSG:4326", "EPSG:3857", "EPSG:4326"]
        );
    }

    #[test]
    fn populate_center_options_keeps_duplicates() {
        let mut store = ConfigStore::default();
        let views = [
            view("World", "EPSG:4326"),
            view("Europe", "EPSG:3857"),
            view("World", "EPSG:3857"),
        ];
        store.populate_center_options(&views);

        assert_eq!(store.state().center_options, ["World", "Europe", "World"]);
    }

    #[test]
    fn populate_accepts_boxed_handles() {
        let mut store = ConfigStore::default();
        let layers: Vec<Box<dyn HasTitle>> =
            vec![Box::new(Layer("OSM")), Box::new(Layer("Bing"))];
        store.populate_base_layer_titles(layers);

        assert_eq!(store.state().base_layers_title, ["OSM", "Bing"]);
    }

    #[test]
    fn populate_with_no_handles_changes_nothing() {
        let (mut store, changes) = recording_store();
        store.populate_base_layer_titles(Vec::<Layer>::new());
        store.populate_map_controls(Vec::<ControlKind>::new());
        store.dispatch_changes();

        assert_eq!(store.state(), &DisplayConfig::default());
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn toggles_optional_layer() {
        let mut store = ConfigStore::default();
        store.populate_optional_layers(&[Layer("Roads"), Layer("Rivers")]);

        store.set_optional_layer_visibility("Rivers", true).unwrap();
        store.set_optional_layer_opacity("Rivers", 0.25).unwrap();

        let rivers = store.state().optional_layer("Rivers").unwrap();
        assert!(rivers.visibility);
        assert_abs_diff_eq!(rivers.opacity, 0.25);
        assert!(!store.state().optional_layer("Roads").unwrap().visibility);
        assert_eq!(store.state().visible_optional_layers().count(), 1);
    }

    #[test]
    fn toggling_unknown_entries_fails() {
        let mut store = ConfigStore::default();

        assert_eq!(
            store.set_optional_layer_visibility("Roads", true),
            Err(StoreError::UnknownOptionalLayer("Roads".into()))
        );
        assert_eq!(
            store.set_map_control_checked("Zoom", false),
            Err(StoreError::UnknownMapControl("Zoom".into()))
        );
        assert_eq!(
            store.set_draw_option_checked("Freehand", true),
            Err(StoreError::UnknownDrawOption("Freehand".into()))
        );
    }

    #[test]
    fn toggles_control_and_draw_option() {
        let mut store = ConfigStore::default();
        store.populate_map_controls([ControlKind::Zoom]);

        store.set_map_control_checked("Zoom", false).unwrap();
        store.set_draw_option_checked("Show segment lengths", true).unwrap();

        assert!(!store.state().map_control("Zoom").unwrap().checked);
        assert!(store.state().draw_option("Show segment lengths").unwrap().checked);
        assert_eq!(store.state().draw_options.len(), 3);
    }

    #[test]
    fn base_layer_selection() {
        let mut store = ConfigStore::default();
        store.populate_base_layer_titles(&[Layer("OSM Standard"), Layer("Bing Maps")]);

        store.set_base_layer_visibility("Bing Maps");
        store.set_base_layer_opacity(0.4);

        assert_eq!(store.state().base_layers_visibility, "Bing Maps");
        assert_abs_diff_eq!(store.state().base_layers_opacity, 0.4);
    }

    #[test]
    fn opacity_is_not_clamped() {
        let mut store = ConfigStore::default();
        store.set_base_layer_opacity(1.5);

        assert_abs_diff_eq!(store.state().base_layers_opacity, 1.5);
    }

    #[test]
    fn select_options_are_replaced() {
        let mut store = ConfigStore::default();
        store.set_current_center(Some("Europe".into()));
        store.set_bing_map_style("Aerial");
        store.set_draw_type("Polygon");
        store.set_interaction_type("Modify");
        store.set_vector_select_type("pointermove");
        store.set_current_projection("EPSG:3857");

        let options = &store.state().select_options;
        assert_eq!(options.current_center.as_deref(), Some("Europe"));
        assert_eq!(options.bing_map_style, "Aerial");
        assert_eq!(options.draw_type, "Polygon");
        assert_eq!(options.interaction_type, "Modify");
        assert_eq!(options.vector_select_type, "pointermove");
        assert_eq!(store.state().current_projection, "EPSG:3857");
    }

    #[test]
    fn notifies_applied_mutations_only() {
        let (mut store, changes) = recording_store();
        store.populate_base_layer_titles(&[Layer("OSM"), Layer("OSM")]);
        store.populate_optional_layers(&[Layer("Roads")]);
        store.set_draw_type("LineString");
        let _ = store.set_map_control_checked("Zoom", true);
        store.dispatch_changes();

        assert_eq!(
            *changes.lock(),
            [
                StateChange::BaseLayersTitle,
                StateChange::OptionalLayers,
                StateChange::SelectOptions,
            ]
        );
    }

    #[test]
    fn removing_messenger_stops_notifications() {
        let (mut store, changes) = recording_store();
        store.add_center_option("World");
        store.dispatch_changes();
        store.set_messenger(None::<fn(StateChange)>);
        store.add_center_option("Europe");
        store.dispatch_changes();

        assert_eq!(*changes.lock(), [StateChange::CenterOptions]);
    }

    #[test]
    fn changes_wait_for_dispatch() {
        let (mut store, changes) = recording_store();
        store.add_base_layer_title("OSM");
        store.set_base_layer_opacity(0.5);

        assert!(changes.lock().is_empty());
        let pending = store.take_pending_changes();
        assert_eq!(
            pending.changes(),
            [StateChange::BaseLayersTitle, StateChange::BaseLayersOpacity]
        );

        pending.dispatch();
        assert_eq!(changes.lock().len(), 2);
        store.dispatch_changes();
        assert_eq!(changes.lock().len(), 2);
    }

    #[test]
    fn nothing_is_queued_without_messenger() {
        let mut store = ConfigStore::default();
        store.add_center_option("World");

        assert!(store.take_pending_changes().changes().is_empty());
    }
}
