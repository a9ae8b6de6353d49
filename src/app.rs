//! Application module: exposes the page model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the current
//! track selection, the cursor and navigation state.

mod model;
mod nav;

pub use model::*;
pub use nav::{NAV_LINKS, NavState};
