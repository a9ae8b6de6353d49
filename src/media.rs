//! Media backends driven by the player.
//!
//! [`Media`] is the seam between the player state machine and whatever
//! actually produces sound. [`SimulatedMedia`] advances a clock for sources
//! that cannot be played locally (remote URLs, mock tracks), [`DeviceMedia`]
//! plays local files through `rodio` on a dedicated audio thread, and
//! [`HybridMedia`] picks one of the two per source.

mod device;
mod hybrid;
mod simulated;
mod sink;
mod thread;
mod types;

pub use device::DeviceMedia;
pub use hybrid::HybridMedia;
pub use simulated::SimulatedMedia;
pub use types::{Media, MediaError, MediaEvent};
