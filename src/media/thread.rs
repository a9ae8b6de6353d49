use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use super::sink::{create_sink_at, probe_duration};
use super::types::{MediaError, MediaEvent};

#[derive(Debug)]
pub(super) enum DeviceCmd {
    /// Replace the current source with a local file.
    Load(PathBuf),
    /// Start playback; the outcome is sent back on the provided channel.
    Play(Sender<Result<(), MediaError>>),
    Pause,
    /// Seek to an absolute position.
    Seek(Duration),
    SetVolume(f32),
    Quit,
}

/// Playback information published by the audio thread.
#[derive(Debug, Default)]
pub(super) struct DeviceInfo {
    pub duration: Option<Duration>,
    pub elapsed: Duration,
    pub playing: bool,
    pub ended: bool,
    pub events: Vec<MediaEvent>,
}

pub(super) type DeviceHandle = Arc<Mutex<DeviceInfo>>;

struct DeviceState {
    stream: Result<OutputStream, String>,
    info: DeviceHandle,
    path: Option<PathBuf>,
    duration: Option<Duration>,
    load_error: Option<MediaError>,
    sink: Option<Sink>,
    paused: bool,
    ended: bool,
    // Track start time and accumulated elapsed when paused.
    started_at: Option<Instant>,
    accumulated: Duration,
    volume: f32,
}

impl DeviceState {
    fn emit(&self, event: MediaEvent) {
        if let Ok(mut info) = self.info.lock() {
            info.events.push(event);
        }
    }

    fn elapsed(&self) -> Duration {
        let elapsed = self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed());
        match self.duration {
            Some(d) => elapsed.min(d),
            None => elapsed,
        }
    }

    fn stop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn rebuild_sink(&mut self, start_at: Duration) -> Result<(), MediaError> {
        let stream = self.stream.as_ref().map_err(|e| MediaError::NoDevice(e.clone()))?;
        let path = self.path.as_ref().ok_or(MediaError::NoSource)?;
        let sink = create_sink_at(stream, path, start_at)?;
        sink.set_volume(self.volume);
        self.stop_sink();
        self.sink = Some(sink);
        Ok(())
    }

    fn load(&mut self, path: PathBuf) {
        self.stop_sink();
        self.duration = probe_duration(&path);
        self.path = Some(path);
        self.load_error = None;
        self.paused = true;
        self.ended = false;
        self.started_at = None;
        self.accumulated = Duration::ZERO;

        if let Ok(mut info) = self.info.lock() {
            info.events.clear();
            info.duration = self.duration;
        }
        if let Some(d) = self.duration {
            self.emit(MediaEvent::LoadedMetadata {
                duration_secs: d.as_secs_f64(),
            });
        }

        if let Err(e) = self.rebuild_sink(Duration::ZERO) {
            warn!(error = %e, "failed to prepare source");
            self.emit(MediaEvent::Error(e.clone()));
            self.load_error = Some(e);
        }
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if let Some(e) = &self.load_error {
            return Err(e.clone());
        }
        if !self.paused {
            return Ok(());
        }
        if self.ended || self.sink.is_none() {
            self.rebuild_sink(Duration::ZERO)?;
            self.accumulated = Duration::ZERO;
            self.ended = false;
        }
        let Some(sink) = self.sink.as_ref() else {
            return Err(MediaError::NoSource);
        };
        sink.play();
        self.paused = false;
        self.started_at = Some(Instant::now());
        self.emit(MediaEvent::Play);
        Ok(())
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
        self.paused = true;
        self.emit(MediaEvent::Pause);
    }

    fn seek(&mut self, target: Duration) {
        if self.path.is_none() || self.load_error.is_some() {
            return;
        }
        let target = match self.duration {
            Some(d) => target.min(d),
            None => target,
        };

        // Scrubbing: rebuild the current sink and skip into the file.
        if let Err(e) = self.rebuild_sink(target) {
            warn!(error = %e, "seek failed");
            self.emit(MediaEvent::Error(e));
            return;
        }
        if !self.paused {
            if let Some(s) = self.sink.as_ref() {
                s.play();
            }
            self.started_at = Some(Instant::now());
        }
        self.accumulated = target;
        self.ended = false;
    }

    fn set_volume(&mut self, gain: f32) {
        self.volume = gain.clamp(0.0, 1.0);
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(self.volume);
        }
    }

    /// Detect the end of the source and publish the current position.
    fn publish(&mut self) {
        let finished = !self.paused && self.sink.as_ref().is_some_and(Sink::empty);
        if finished {
            self.accumulated = self.duration.unwrap_or_else(|| self.elapsed());
            self.started_at = None;
            self.paused = true;
            self.ended = true;
            self.emit(MediaEvent::Ended);
        }

        let elapsed = self.elapsed();
        if let Ok(mut info) = self.info.lock() {
            info.elapsed = elapsed;
            info.playing = !self.paused;
            info.ended = self.ended;
        }
    }
}

pub(super) fn spawn_audio_thread(rx: Receiver<DeviceCmd>, info: DeviceHandle) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped, which would
                // scribble over the TUI.
                stream.log_on_drop(false);
                Ok(stream)
            }
            Err(e) => {
                warn!(error = %e, "no audio output device, local files will not play");
                Err(e.to_string())
            }
        };

        let mut state = DeviceState {
            stream,
            info,
            path: None,
            duration: None,
            load_error: None,
            sink: None,
            paused: true,
            ended: false,
            started_at: None,
            accumulated: Duration::ZERO,
            volume: 1.0,
        };

        loop {
            match rx.recv_timeout(Duration::from_millis(50)) {
                Ok(DeviceCmd::Quit) => {
                    state.stop_sink();
                    debug!("audio thread quitting");
                    break;
                }
                Ok(DeviceCmd::Load(path)) => state.load(path),
                Ok(DeviceCmd::Play(reply)) => {
                    let result = state.play();
                    let _ = reply.send(result);
                }
                Ok(DeviceCmd::Pause) => state.pause(),
                Ok(DeviceCmd::Seek(target)) => state.seek(target),
                Ok(DeviceCmd::SetVolume(gain)) => state.set_volume(gain),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            state.publish();
        }
    })
}
