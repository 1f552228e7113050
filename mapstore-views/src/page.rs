//! Pages of the application.
//!
//! A page is mounted with the map objects it displays and seeds the shared
//! store with the lists its controls read. Each mount runs its population
//! actions under one write lock, so other pages never see a partially
//! populated list.

use mapstore::SharedConfigStore;

use crate::context::MapContext;

/// Page of the application.
pub trait Page: Send + Sync {
    /// Name of the page.
    fn name(&self) -> &'static str;

    /// Seeds `store` with the lists derived from `map`.
    fn mount(&self, store: &SharedConfigStore, map: &MapContext);
}

/// Start page: layer switcher, projection and center selectors, control toggles.
#[derive(Debug, Default, Clone, Copy)]
pub struct HomePage;

impl Page for HomePage {
    fn name(&self) -> &'static str {
        "Home"
    }

    fn mount(&self, store: &SharedConfigStore, map: &MapContext) {
        store.update(|store| {
            store.populate_base_layer_titles(map.base_layers());
            store.populate_optional_layers(map.optional_layers());
            store.populate_projection_titles(&map.views);
            store.populate_center_options(&map.views);
            store.populate_map_controls(&map.controls);
        });
    }
}

/// Drawing tools with the draw type selector and draw options checklist.
#[derive(Debug, Default, Clone, Copy)]
pub struct DrawPage;

impl Page for DrawPage {
    fn name(&self) -> &'static str {
        "DrawMap"
    }

    fn mount(&self, store: &SharedConfigStore, map: &MapContext) {
        store.update(|store| {
            store.populate_base_layer_titles(map.base_layers());
            store.populate_vector_layer_titles(map.vector_layers());
        });
    }
}

/// Two base layers compared with a swipe slider.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwipePage;

impl Page for SwipePage {
    fn name(&self) -> &'static str {
        "SwipeMap"
    }

    fn mount(&self, store: &SharedConfigStore, map: &MapContext) {
        store.update(|store| store.populate_base_layer_titles(map.base_layers()));
    }
}

/// Clustered point features.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClusterPage;

impl Page for ClusterPage {
    fn name(&self) -> &'static str {
        "ClusterMap"
    }

    fn mount(&self, store: &SharedConfigStore, map: &MapContext) {
        store.update(|store| {
            store.populate_base_layer_titles(map.base_layers());
            store.populate_vector_layer_titles(map.vector_layers());
        });
    }
}

/// Vector layers with feature selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct VectorPage;

impl Page for VectorPage {
    fn name(&self) -> &'static str {
        "VectorMap"
    }

    fn mount(&self, store: &SharedConfigStore, map: &MapContext) {
        store.update(|store| {
            store.populate_base_layer_titles(map.base_layers());
            store.populate_vector_layer_titles(map.vector_layers());
            store.populate_optional_layers(map.optional_layers());
        });
    }
}

/// Interaction playground: select, modify, translate.
#[derive(Debug, Default, Clone, Copy)]
pub struct InteractionPage;

impl Page for InteractionPage {
    fn name(&self) -> &'static str {
        "InteractionMap"
    }

    fn mount(&self, store: &SharedConfigStore, map: &MapContext) {
        store.update(|store| {
            store.populate_vector_layer_titles(map.vector_layers());
            store.populate_map_controls(&map.controls);
        });
    }
}

/// All pages in menu order.
pub fn all_pages() -> Vec<Box<dyn Page>> {
    vec![
        Box::new(HomePage),
        Box::new(DrawPage),
        Box::new(SwipePage),
        Box::new(ClusterPage),
        Box::new(VectorPage),
        Box::new(InteractionPage),
    ]
}
