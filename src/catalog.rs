//! Catalog records and the mock data shown on the landing page.
//!
//! Nothing here is fetched or persisted: the page owns these values for the
//! lifetime of the process and the cards only borrow them for rendering.

mod mock;
mod model;

pub use mock::{featured_tracks, playlists};
pub use model::{Playlist, Track};
