//! Mounts every page of the application against one store and prints the
//! resulting display configuration as JSON.
//!
//! Usage: `mapstore-demo [CONFIG.json]`

use anyhow::Context;
use mapstore::{HasProjectionCode, HasTitle, SharedConfigStore, StateChange, StoreConfig};
use mapstore_views::{all_pages, demo_context, init_logger};

fn main() -> anyhow::Result<()> {
    init_logger();

    let config = match std::env::args_os().nth(1) {
        Some(path) => StoreConfig::from_json_file(&path)
            .with_context(|| format!("failed to load config from {}", path.to_string_lossy()))?,
        None => StoreConfig::default(),
    };

    let store = SharedConfigStore::new(&config);
    store.update(|store| {
        store.set_messenger(Some(|change: StateChange| {
            match serde_json::to_string(&change) {
                Ok(json) => log::trace!("State changed: {json}"),
                Err(err) => log::warn!("Failed to serialize state change {change:?}: {err}"),
            }
        }))
    });

    let map = demo_context();
    for page in all_pages() {
        log::info!("Mounting page {}", page.name());
        page.mount(&store, &map);
    }

    // Select the first center preset the way the center dropdown does.
    let first_center = store.with(|store| store.state().center_options.first().cloned());
    if let Some(title) = first_center {
        if let Some(view) = map.view(&title) {
            log::info!(
                "Centering on '{}' at {:?} ({}), zoom {}",
                view.title(),
                view.center(),
                view.projection_code(),
                view.zoom()
            );
            store.update(|store| {
                store.set_current_projection(view.projection_code());
                store.set_current_center(Some(title));
            });
        }
    }

    let json = store.with(|store| serde_json::to_string_pretty(store.state()))?;
    println!("{json}");

    Ok(())
}
