//! Pages of the map application and the map objects they are mounted with.
//!
//! Every page receives the same [`SharedConfigStore`](mapstore::SharedConfigStore)
//! and seeds it with the lists its controls display.

mod context;
mod control;
mod layer;
mod logging;
mod page;
mod view;

pub use context::{demo_context, MapContext};
pub use control::MapControl;
pub use layer::{LayerKind, MapLayer};
pub use logging::init_logger;
pub use page::{
    all_pages, ClusterPage, DrawPage, HomePage, InteractionPage, Page, SwipePage, VectorPage,
};
pub use view::ViewPreset;
