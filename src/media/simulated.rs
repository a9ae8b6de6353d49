//! Clock-driven media used for sources that cannot be played locally.
//!
//! Position advances with wall time while playing, exactly like the elapsed
//! tracking of the device backend, but nothing is decoded. Every time-based
//! method has an `*_at(now)` variant so it can be driven deterministically.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::types::{Media, MediaError, MediaEvent};

#[derive(Debug, Default)]
pub struct SimulatedMedia {
    src: Option<String>,
    duration: Option<Duration>,
    accumulated: Duration,
    started_at: Option<Instant>,
    volume: f32,
    ended: bool,
    events: VecDeque<MediaEvent>,
}

impl SimulatedMedia {
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn source(&self) -> Option<&str> {
        self.src.as_deref()
    }

    #[cfg(test)]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        let running = self
            .started_at
            .map_or(Duration::ZERO, |st| now.saturating_duration_since(st));
        let elapsed = self.accumulated + running;
        match self.duration {
            Some(d) => elapsed.min(d),
            None => elapsed,
        }
    }

    fn reached_end_at(&self, now: Instant) -> bool {
        match (self.started_at, self.duration) {
            (Some(_), Some(d)) => self.elapsed_at(now) >= d,
            _ => false,
        }
    }

    pub fn current_time_at(&self, now: Instant) -> f64 {
        self.elapsed_at(now).as_secs_f64()
    }

    pub fn ended_at(&self, now: Instant) -> bool {
        self.ended || self.reached_end_at(now)
    }

    pub fn play_at(&mut self, now: Instant) -> Result<(), MediaError> {
        if self.src.is_none() {
            return Err(MediaError::NoSource);
        }
        if self.started_at.is_some() {
            return Ok(());
        }
        if self.ended {
            self.ended = false;
            self.accumulated = Duration::ZERO;
        }
        self.started_at = Some(now);
        self.events.push_back(MediaEvent::Play);
        Ok(())
    }

    pub fn pause_at(&mut self, now: Instant) {
        if self.started_at.is_none() {
            return;
        }
        self.accumulated = self.elapsed_at(now);
        self.started_at = None;
        self.events.push_back(MediaEvent::Pause);
    }

    pub fn seek_at(&mut self, secs: f64, now: Instant) {
        if !secs.is_finite() {
            return;
        }
        let mut target = Duration::from_secs_f64(secs.max(0.0));
        if let Some(d) = self.duration {
            target = target.min(d);
        }
        self.accumulated = target;
        self.ended = false;
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
    }

    pub fn poll_events_at(&mut self, now: Instant) -> Vec<MediaEvent> {
        if self.reached_end_at(now) {
            self.accumulated = self.elapsed_at(now);
            self.started_at = None;
            self.ended = true;
            self.events.push_back(MediaEvent::Ended);
        }
        self.events.drain(..).collect()
    }
}

impl Media for SimulatedMedia {
    fn load(&mut self, src: &str, duration_hint: Option<Duration>) {
        self.events.clear();
        self.src = Some(src.to_string());
        self.duration = duration_hint.filter(|d| !d.is_zero());
        self.accumulated = Duration::ZERO;
        self.started_at = None;
        self.ended = false;
        if let Some(d) = self.duration {
            self.events.push_back(MediaEvent::LoadedMetadata {
                duration_secs: d.as_secs_f64(),
            });
        }
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.play_at(Instant::now())
    }

    fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    fn seek(&mut self, secs: f64) {
        self.seek_at(secs, Instant::now());
    }

    fn set_volume(&mut self, gain: f32) {
        self.volume = gain.clamp(0.0, 1.0);
    }

    fn current_time(&self) -> f64 {
        self.current_time_at(Instant::now())
    }

    fn duration(&self) -> Option<f64> {
        self.duration.map(|d| d.as_secs_f64())
    }

    fn ended(&self) -> bool {
        self.ended_at(Instant::now())
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        self.poll_events_at(Instant::now())
    }
}
