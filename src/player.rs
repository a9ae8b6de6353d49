//! The demo player: playback state machine, its scheduled tasks and
//! time formatting for the progress readout.

mod format;
mod machine;
mod session;
mod timer;

pub use format::format_time;
pub use machine::{Player, PlayerState};
pub use session::Session;

#[cfg(test)]
mod tests;
