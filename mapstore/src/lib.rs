//! Mapstore keeps the display configuration of an interactive map application:
//! the projections and center presets offered by the map views, base, optional
//! and vector layers, map controls and drawing options.
//!
//! Pages populate the store with the live map objects they were mounted with
//! and read the derived lists to build their layer switchers, selectors and
//! checklists.
//!
//! ```
//! use mapstore::{ConfigStore, ControlKind, HasTitle};
//!
//! struct Layer(&'static str);
//!
//! impl HasTitle for Layer {
//!     fn title(&self) -> &str {
//!         self.0
//!     }
//! }
//!
//! let mut store = ConfigStore::default();
//! store.populate_base_layer_titles(&[Layer("OSM Standard"), Layer("OSM Standard")]);
//! store.populate_map_controls([ControlKind::Zoom, ControlKind::ScaleLine]);
//!
//! assert_eq!(store.state().base_layers_title, ["OSM Standard"]);
//! assert_eq!(store.state().map_controls[1].title, "ScaleLine");
//! ```

mod config;
mod error;
mod handle;
mod messenger;
mod record;
mod shared;
mod state;
mod store;

pub use config::{StoreConfig, MAX_DRAW_OPTIONS};
pub use error::{ConfigError, StoreError};
pub use handle::{ControlKind, HasControlKind, HasProjectionCode, HasTitle};
pub use messenger::{StateChange, StoreMessenger};
pub use record::{ControlToggle, DrawOption, LayerToggle};
pub use shared::SharedConfigStore;
pub use state::{DisplayConfig, SelectOptions};
pub use store::{ConfigStore, PendingChanges};
