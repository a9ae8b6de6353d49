//! Media-playback primitive shared by every backend.
//!
//! The player only talks to media through [`Media`]: it loads a source,
//! asks for playback, seeks, adjusts gain and samples the position. Backends
//! report state changes they originate themselves (metadata, end of stream)
//! as [`MediaEvent`]s which the player drains on every tick.

use std::time::Duration;

use thiserror::Error;

/// Reasons a play request can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("no source loaded")]
    NoSource,
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("failed to open {path}: {reason}")]
    Open { path: String, reason: String },
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("no audio output device: {0}")]
    NoDevice(String),
    #[error("audio thread is gone")]
    Disconnected,
}

/// Notifications pushed by a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Duration became known for the current source.
    LoadedMetadata { duration_secs: f64 },
    Play,
    Pause,
    /// Playback reached the end of the source.
    Ended,
    /// The backend hit an error outside of a play request.
    Error(MediaError),
}

pub trait Media {
    /// Replace the current source. Pending events of the old source are dropped
    /// and playback stops at position zero.
    fn load(&mut self, src: &str, duration_hint: Option<Duration>);
    /// Start or resume playback of the loaded source.
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    /// Jump to an absolute position in seconds.
    fn seek(&mut self, secs: f64);
    /// Gain in `[0, 1]`.
    fn set_volume(&mut self, gain: f32);
    fn current_time(&self) -> f64;
    /// Total duration in seconds, when known.
    fn duration(&self) -> Option<f64>;
    fn ended(&self) -> bool;
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}
