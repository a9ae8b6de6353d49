use super::*;
use super::timer::{Interval, OneShot};
use crate::catalog::{Track, featured_tracks};
use crate::config::PlayerSettings;
use crate::media::{Media, MediaError, MediaEvent};
use std::time::{Duration, Instant};

/// Scriptable stand-in for the media primitive.
#[derive(Default)]
struct FakeMedia {
    loaded: Vec<String>,
    position: f64,
    duration: Option<f64>,
    ended: bool,
    playing: bool,
    reject: Option<MediaError>,
    play_calls: usize,
    seeks: Vec<f64>,
    gain: Option<f32>,
    events: Vec<MediaEvent>,
}

impl Media for FakeMedia {
    fn load(&mut self, src: &str, duration_hint: Option<Duration>) {
        self.loaded.push(src.to_string());
        self.position = 0.0;
        self.ended = false;
        self.playing = false;
        self.events.clear();
        self.duration = duration_hint.map(|d| d.as_secs_f64());
        if let Some(d) = self.duration {
            self.events.push(MediaEvent::LoadedMetadata { duration_secs: d });
        }
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.play_calls += 1;
        if let Some(e) = self.reject.clone() {
            return Err(e);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, secs: f64) {
        self.position = secs;
        self.seeks.push(secs);
    }

    fn set_volume(&mut self, gain: f32) {
        self.gain = Some(gain);
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn ended(&self) -> bool {
        self.ended
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }
}

fn player() -> Player<FakeMedia> {
    Player::new(FakeMedia::default(), PlayerSettings::default())
}

fn tracks() -> Vec<Track> {
    featured_tracks()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Load `track` and let the auto-play attempt fire.
fn playing(p: &mut Player<FakeMedia>, track: &Track, t0: Instant) {
    p.set_track(Some(track), t0);
    p.tick(t0 + ms(300));
    assert_eq!(p.state(), PlayerState::Playing);
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn format_time_renders_minutes_and_padded_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(65.0), "1:05");
    assert_eq!(format_time(204.9), "3:24");
    assert_eq!(format_time(3599.0), "59:59");
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
}

#[test]
fn starts_idle_and_renders_nothing() {
    let mut p = player();
    assert_eq!(p.state(), PlayerState::Idle);
    p.set_track(None, Instant::now());
    assert_eq!(p.state(), PlayerState::Idle);
    assert!(p.track().is_none());
    assert!(p.media().loaded.is_empty());
}

#[test]
fn loading_a_track_uses_the_fallback_source_and_schedules_autoplay() {
    let mut p = player();
    let t = &tracks()[0];
    p.set_track(Some(t), Instant::now());

    assert_eq!(p.state(), PlayerState::Paused);
    assert!(p.autoplay_pending());
    assert!(!p.sampler_running());
    assert_eq!(
        p.media().loaded,
        vec![PlayerSettings::default().fallback_source]
    );
    assert_eq!(p.media().gain, Some(0.8));
}

#[test]
fn loading_prefers_the_track_audio_source() {
    let mut p = player();
    let mut t = tracks()[1].clone();
    t.audio_src = Some("/tmp/urban-rhythm.ogg".into());
    p.set_track(Some(&t), Instant::now());
    assert_eq!(p.media().loaded, vec!["/tmp/urban-rhythm.ogg".to_string()]);
}

#[test]
fn autoplay_fires_only_after_the_delay() {
    let mut p = player();
    let t0 = Instant::now();
    p.set_track(Some(&tracks()[0]), t0);

    p.tick(t0 + ms(299));
    assert_eq!(p.state(), PlayerState::Paused);
    assert_eq!(p.session().duration_secs, 204.0);

    p.tick(t0 + ms(300));
    assert_eq!(p.state(), PlayerState::Playing);
    assert!(p.sampler_running());
    assert!(!p.autoplay_pending());
    assert_eq!(p.media().play_calls, 1);
}

#[test]
fn rejected_autoplay_stays_paused_and_is_not_retried() {
    let mut p = player();
    p.media_mut().reject = Some(MediaError::Rejected("autoplay denied".into()));
    let t0 = Instant::now();
    p.set_track(Some(&tracks()[0]), t0);

    p.tick(t0 + ms(300));
    p.tick(t0 + ms(900));
    assert_eq!(p.state(), PlayerState::Paused);
    assert!(!p.sampler_running());
    assert!(!p.autoplay_pending());
    assert_eq!(p.media().play_calls, 1);
}

#[test]
fn autoplay_can_be_disabled() {
    let settings = PlayerSettings {
        autoplay: false,
        ..PlayerSettings::default()
    };
    let mut p = Player::new(FakeMedia::default(), settings);
    let t0 = Instant::now();
    p.set_track(Some(&tracks()[0]), t0);
    assert!(!p.autoplay_pending());
    p.tick(t0 + ms(1000));
    assert_eq!(p.state(), PlayerState::Paused);
}

#[test]
fn toggle_once_flips_and_twice_restores() {
    let mut p = player();
    let t0 = Instant::now();
    p.set_track(Some(&tracks()[0]), t0);
    p.tick(t0);

    p.toggle_play_pause(t0);
    assert_eq!(p.state(), PlayerState::Playing);
    assert!(p.sampler_running());
    // The manual toggle superseded the auto-play attempt.
    assert!(!p.autoplay_pending());

    p.toggle_play_pause(t0);
    assert_eq!(p.state(), PlayerState::Paused);
    assert!(!p.sampler_running());
    assert!(!p.media().playing);

    p.toggle_play_pause(t0);
    p.toggle_play_pause(t0);
    assert_eq!(p.state(), PlayerState::Paused);
}

#[test]
fn toggle_without_a_track_does_nothing() {
    let mut p = player();
    p.toggle_play_pause(Instant::now());
    assert_eq!(p.state(), PlayerState::Idle);
    assert_eq!(p.media().play_calls, 0);
}

#[test]
fn seek_converts_percent_to_absolute_time() {
    let mut p = player();
    let t0 = Instant::now();
    playing(&mut p, &tracks()[0], t0);

    let d = p.session().duration_secs;
    for pct in [0.0, 12.5, 33.3, 50.0, 99.0, 100.0] {
        p.seek_percent(pct);
        let expected = pct / 100.0 * d;
        assert!(close(p.session().current_time_secs, expected));
        assert!(close(p.media().position, expected));
        assert!(close(p.session().progress_percent, pct));
    }
}

#[test]
fn seek_is_clamped_and_ignored_without_duration() {
    let mut p = player();
    let t0 = Instant::now();
    playing(&mut p, &tracks()[0], t0);

    p.seek_percent(150.0);
    assert!(close(p.session().current_time_secs, 204.0));
    p.seek_percent(-10.0);
    assert!(close(p.session().current_time_secs, 0.0));
    p.seek_percent(f64::NAN);
    assert!(close(p.session().current_time_secs, 0.0));

    let mut unknown = tracks()[1].clone();
    unknown.duration = "live".into();
    p.set_track(Some(&unknown), t0);
    p.tick(t0);
    p.seek_percent(40.0);
    assert_eq!(p.session().current_time_secs, 0.0);
    assert_eq!(p.session().progress_percent, 0.0);
}

#[test]
fn seek_by_percent_moves_relative_to_progress() {
    let mut p = player();
    let t0 = Instant::now();
    playing(&mut p, &tracks()[0], t0);
    p.seek_percent(50.0);
    p.seek_by_percent(5.0);
    assert!(close(p.session().progress_percent, 55.0));
    p.seek_by_percent(-80.0);
    assert!(close(p.session().progress_percent, 0.0));
}

#[test]
fn sampler_tracks_media_position() {
    let mut p = player();
    let t0 = Instant::now();
    playing(&mut p, &tracks()[0], t0);

    p.media_mut().position = 51.0;
    p.tick(t0 + ms(350));
    assert_eq!(p.session().current_time_secs, 0.0);

    p.tick(t0 + ms(400));
    assert_eq!(p.session().current_time_secs, 51.0);
    assert!(close(p.session().progress_percent, 25.0));
}

#[test]
fn sampler_adopts_a_late_duration() {
    let mut p = player();
    let t0 = Instant::now();
    let mut t = tracks()[0].clone();
    t.duration = "?".into();
    playing(&mut p, &t, t0);
    assert_eq!(p.session().duration_secs, 0.0);

    p.media_mut().duration = Some(100.0);
    p.media_mut().position = 10.0;
    p.tick(t0 + ms(400));
    assert_eq!(p.session().duration_secs, 100.0);
    assert!(close(p.session().progress_percent, 10.0));
}

#[test]
fn ended_event_resets_progress_and_stops_sampling() {
    let mut p = player();
    let t0 = Instant::now();
    playing(&mut p, &tracks()[0], t0);
    p.seek_percent(90.0);

    p.media_mut().events.push(MediaEvent::Ended);
    p.tick(t0 + ms(310));
    assert_eq!(p.state(), PlayerState::Paused);
    assert_eq!(p.session().progress_percent, 0.0);
    assert_eq!(p.session().current_time_secs, 0.0);
    assert!(!p.sampler_running());
}

#[test]
fn sampler_observes_the_ended_flag() {
    let mut p = player();
    let t0 = Instant::now();
    playing(&mut p, &tracks()[0], t0);

    p.media_mut().position = 204.0;
    p.media_mut().ended = true;
    p.tick(t0 + ms(400));
    assert_eq!(p.state(), PlayerState::Paused);
    assert_eq!(p.session().current_time_secs, 0.0);
    assert_eq!(p.session().progress_percent, 0.0);
    assert!(!p.sampler_running());
}

#[test]
fn media_pause_and_play_notifications_drive_the_state() {
    let mut p = player();
    let t0 = Instant::now();
    playing(&mut p, &tracks()[0], t0);

    p.media_mut().events.push(MediaEvent::Pause);
    p.tick(t0 + ms(310));
    assert_eq!(p.state(), PlayerState::Paused);
    assert!(!p.sampler_running());

    p.media_mut().events.push(MediaEvent::Play);
    p.tick(t0 + ms(320));
    assert_eq!(p.state(), PlayerState::Playing);
    assert!(p.sampler_running());
}

#[test]
fn clearing_the_track_returns_to_idle() {
    let mut p = player();
    let t0 = Instant::now();
    playing(&mut p, &tracks()[0], t0);
    p.expand();

    p.set_track(None, t0 + ms(400));
    assert_eq!(p.state(), PlayerState::Idle);
    assert!(!p.sampler_running());
    assert!(!p.media().playing);
    assert_eq!(*p.session(), Session::default());
}

#[test]
fn reselecting_the_loaded_track_changes_nothing() {
    let mut p = player();
    let t0 = Instant::now();
    let t = tracks()[0].clone();
    playing(&mut p, &t, t0);
    p.seek_percent(50.0);

    p.set_track(Some(&t), t0 + ms(500));
    assert_eq!(p.state(), PlayerState::Playing);
    assert!(close(p.session().progress_percent, 50.0));
    assert_eq!(p.media().loaded.len(), 1);
}

#[test]
fn a_second_track_change_cancels_the_pending_autoplay() {
    let mut p = player();
    let t0 = Instant::now();
    let all = tracks();
    p.set_track(Some(&all[0]), t0);
    p.set_track(Some(&all[1]), t0 + ms(200));

    // The first attempt would have been due here.
    p.tick(t0 + ms(300));
    assert_eq!(p.state(), PlayerState::Paused);
    assert_eq!(p.media().play_calls, 0);

    p.tick(t0 + ms(500));
    assert_eq!(p.state(), PlayerState::Playing);
    assert_eq!(p.media().play_calls, 1);
}

#[test]
fn teardown_cancels_all_scheduled_work() {
    let mut p = player();
    let t0 = Instant::now();
    let all = tracks();
    playing(&mut p, &all[0], t0);
    p.teardown();
    assert!(!p.sampler_running());
    assert!(!p.media().playing);

    p.set_track(Some(&all[1]), t0 + ms(400));
    assert!(p.autoplay_pending());
    p.teardown();
    assert!(!p.autoplay_pending());
    p.tick(t0 + ms(2000));
    assert_eq!(p.media().play_calls, 1);
}

#[test]
fn volume_is_clamped_and_reapplied_per_track() {
    let mut p = player();
    let t0 = Instant::now();
    let all = tracks();
    p.set_track(Some(&all[0]), t0);

    p.set_volume(250);
    assert_eq!(p.volume(), 100);
    assert_eq!(p.media().gain, Some(1.0));

    p.set_volume(30);
    p.nudge_volume(-50);
    assert_eq!(p.volume(), 0);
    p.nudge_volume(25);
    assert_eq!(p.volume(), 25);

    p.media_mut().gain = None;
    p.set_track(Some(&all[1]), t0);
    assert_eq!(p.volume(), 25);
    assert_eq!(p.media().gain, Some(0.25));
}

#[test]
fn expanded_flag_is_orthogonal_to_playback() {
    let mut p = player();
    p.expand();
    assert!(!p.is_expanded());

    let t0 = Instant::now();
    playing(&mut p, &tracks()[0], t0);
    p.toggle_expanded();
    assert!(p.is_expanded());
    p.toggle_play_pause(t0);
    assert!(p.is_expanded());
    assert_eq!(p.state(), PlayerState::Paused);
    p.collapse();
    assert!(!p.is_expanded());
}

#[test]
fn scenario_seek_then_switch_tracks() {
    let mut p = player();
    let t0 = Instant::now();
    let all = tracks();
    let a = &all[0];
    assert_eq!(a.duration, "3:24");

    playing(&mut p, a, t0);
    p.seek_percent(50.0);
    assert!(close(p.session().current_time_secs, 102.0));

    let b = &all[1];
    p.set_track(Some(b), t0 + ms(1000));
    assert_eq!(p.session().current_time_secs, 0.0);
    assert_eq!(p.session().progress_percent, 0.0);
    assert_eq!(p.session().duration_secs, 0.0);
    assert!(!p.session().is_playing);
    assert!(!p.sampler_running());
    assert!(p.autoplay_pending());

    p.tick(t0 + ms(1300));
    assert_eq!(p.state(), PlayerState::Playing);
    assert_eq!(p.track().map(|t| t.id.as_str()), Some("2"));
    assert_eq!(p.session().duration_secs, 176.0);
}

#[test]
fn session_progress_follows_position_and_duration() {
    let mut s = Session::default();
    s.set_position(30.0);
    assert_eq!(s.progress_percent, 0.0);
    s.set_duration(120.0);
    assert_eq!(s.progress_percent, 25.0);
    s.set_position(500.0);
    assert_eq!(s.current_time_secs, 120.0);
    assert_eq!(s.progress_percent, 100.0);
    s.set_duration(f64::NAN);
    assert_eq!(s.progress_percent, 0.0);
}

#[test]
fn timers_fire_on_their_deadlines() {
    let t0 = Instant::now();
    let once = OneShot::after(t0, ms(300));
    assert!(!once.is_due(t0 + ms(299)));
    assert!(once.is_due(t0 + ms(300)));

    let mut every = Interval::start(t0, ms(100));
    assert_eq!(every.period(), ms(100));
    assert!(!every.fire(t0 + ms(50)));
    assert!(every.fire(t0 + ms(100)));
    assert!(!every.fire(t0 + ms(150)));
    // A long stall produces a single catch-up firing.
    assert!(every.fire(t0 + ms(1000)));
    assert!(!every.fire(t0 + ms(1050)));
}
