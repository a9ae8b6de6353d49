/// Transient playback fields of the current track.
///
/// `progress_percent` is always derived from `current_time_secs` and
/// `duration_secs`, and is zero while the duration is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Session {
    pub is_playing: bool,
    pub progress_percent: f64,
    pub duration_secs: f64,
    pub current_time_secs: f64,
}

impl Session {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Adopt a reported duration. Non-finite or negative values count as unknown.
    pub fn set_duration(&mut self, secs: f64) {
        self.duration_secs = if secs.is_finite() && secs > 0.0 { secs } else { 0.0 };
        self.recompute_progress();
    }

    pub fn set_position(&mut self, secs: f64) {
        self.current_time_secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
        self.recompute_progress();
    }

    fn recompute_progress(&mut self) {
        if self.duration_secs > 0.0 {
            self.current_time_secs = self.current_time_secs.min(self.duration_secs);
            self.progress_percent = self.current_time_secs / self.duration_secs * 100.0;
        } else {
            self.progress_percent = 0.0;
        }
    }
}
