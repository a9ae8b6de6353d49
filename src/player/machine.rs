use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::catalog::Track;
use crate::config::PlayerSettings;
use crate::media::{Media, MediaEvent};

use super::session::Session;
use super::timer::{Interval, OneShot};

/// Coarse playback state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerState {
    /// No track: nothing is rendered.
    Idle,
    Paused,
    Playing,
}

/// The bottom-bar player.
///
/// Owns the media primitive, the session fields of the current track, the
/// volume and the expanded flag, plus two scheduled tasks: the one-shot
/// auto-play attempt after a track is loaded and the progress sampler that
/// runs only while playing. Both tasks are dropped on every path that leaves
/// their state, so nothing ever acts on a stale source.
pub struct Player<M: Media> {
    media: M,
    settings: PlayerSettings,
    track: Option<Track>,
    session: Session,
    volume: u8,
    expanded: bool,
    autoplay: Option<OneShot>,
    sampler: Option<Interval>,
}

impl<M: Media> Player<M> {
    pub fn new(media: M, settings: PlayerSettings) -> Self {
        let volume = settings.initial_volume.min(100);
        Self {
            media,
            settings,
            track: None,
            session: Session::default(),
            volume,
            expanded: false,
            autoplay: None,
            sampler: None,
        }
    }

    pub fn state(&self) -> PlayerState {
        match (&self.track, self.session.is_playing) {
            (None, _) => PlayerState::Idle,
            (Some(_), false) => PlayerState::Paused,
            (Some(_), true) => PlayerState::Playing,
        }
    }

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn autoplay_pending(&self) -> bool {
        self.autoplay.is_some()
    }

    #[cfg(test)]
    pub fn sampler_running(&self) -> bool {
        self.sampler.is_some()
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Accept the page's current track. Supplying the track that is already
    /// loaded is a no-op; `None` returns the player to idle.
    pub fn set_track(&mut self, track: Option<&Track>, now: Instant) {
        let same = match (&self.track, track) {
            (Some(cur), Some(next)) => cur.id == next.id,
            (None, None) => true,
            _ => false,
        };
        if same {
            return;
        }

        self.reset_transient();
        self.media.pause();
        self.media.poll_events();

        let Some(track) = track else {
            info!("player idle");
            self.track = None;
            return;
        };

        let src = track
            .audio_src
            .as_deref()
            .unwrap_or(self.settings.fallback_source.as_str())
            .to_string();
        self.media.load(&src, track.duration_hint());
        self.media.set_volume(gain(self.volume));
        self.track = Some(track.clone());
        info!(id = %track.id, title = %track.title, src = %src, "track loaded");

        if self.settings.autoplay {
            self.autoplay = Some(OneShot::after(
                now,
                Duration::from_millis(self.settings.autoplay_delay_ms),
            ));
        }
    }

    pub fn toggle_play_pause(&mut self, now: Instant) {
        if self.track.is_none() {
            return;
        }
        // A manual choice wins over a pending auto-play attempt.
        self.autoplay = None;

        if self.session.is_playing {
            self.media.pause();
            self.session.is_playing = false;
            self.sampler = None;
            debug!("paused");
        } else {
            self.try_play(now);
        }
    }

    /// Jump to `percent` of the track. Ignored while the duration is unknown.
    pub fn seek_percent(&mut self, percent: f64) {
        if self.track.is_none() || percent.is_nan() {
            return;
        }
        let duration = self.session.duration_secs;
        if duration <= 0.0 {
            return;
        }
        let target = percent.clamp(0.0, 100.0) / 100.0 * duration;
        self.media.seek(target);
        self.session.set_position(target);
    }

    /// Seek relative to the current progress, in percentage points.
    pub fn seek_by_percent(&mut self, delta: f64) {
        self.seek_percent(self.session.progress_percent + delta);
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        self.media.set_volume(gain(self.volume));
    }

    pub fn nudge_volume(&mut self, delta: i16) {
        let v = (i16::from(self.volume) + delta).clamp(0, 100);
        self.set_volume(v as u8);
    }

    pub fn expand(&mut self) {
        if self.track.is_some() {
            self.expanded = true;
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn toggle_expanded(&mut self) {
        if self.expanded {
            self.collapse();
        } else {
            self.expand();
        }
    }

    /// Drain media notifications and fire whatever scheduled task is due.
    pub fn tick(&mut self, now: Instant) {
        for event in self.media.poll_events() {
            self.handle_event(event, now);
        }

        if self.autoplay.is_some_and(|t| t.is_due(now)) {
            self.autoplay = None;
            self.try_play(now);
        }

        if let Some(sampler) = self.sampler.as_mut() {
            if sampler.fire(now) {
                self.sample();
            }
        }
    }

    /// Cancel both scheduled tasks and silence the media.
    pub fn teardown(&mut self) {
        self.autoplay = None;
        self.sampler = None;
        self.session.is_playing = false;
        self.media.pause();
    }

    fn reset_transient(&mut self) {
        self.autoplay = None;
        self.sampler = None;
        self.session.reset();
    }

    fn try_play(&mut self, now: Instant) {
        match self.media.play() {
            Ok(()) => {
                self.session.is_playing = true;
                self.start_sampler(now);
                debug!("playing");
            }
            Err(e) => {
                let id = self.track.as_ref().map(|t| t.id.as_str()).unwrap_or("-");
                warn!(error = %e, track = id, "error playing audio");
            }
        }
    }

    fn start_sampler(&mut self, now: Instant) {
        if self.sampler.is_none() {
            self.sampler = Some(Interval::start(
                now,
                Duration::from_millis(self.settings.poll_interval_ms.max(1)),
            ));
        }
    }

    fn sample(&mut self) {
        if self.session.duration_secs <= 0.0 {
            if let Some(d) = self.media.duration() {
                self.session.set_duration(d);
            }
        }
        self.session.set_position(self.media.current_time());
        if self.media.ended() {
            self.on_ended();
        }
    }

    fn on_ended(&mut self) {
        self.session.is_playing = false;
        self.session.set_position(0.0);
        self.sampler = None;
        debug!("ended");
    }

    fn handle_event(&mut self, event: MediaEvent, now: Instant) {
        if self.track.is_none() {
            return;
        }
        match event {
            MediaEvent::LoadedMetadata { duration_secs } => {
                self.session.set_duration(duration_secs);
            }
            MediaEvent::Play => {
                self.session.is_playing = true;
                self.start_sampler(now);
            }
            MediaEvent::Pause => {
                self.session.is_playing = false;
                self.sampler = None;
            }
            MediaEvent::Ended => self.on_ended(),
            MediaEvent::Error(e) => warn!(error = %e, "media error"),
        }
    }
}

impl<M: Media> Drop for Player<M> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn gain(volume: u8) -> f32 {
    f32::from(volume) / 100.0
}
