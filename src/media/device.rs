use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::warn;

use super::hybrid::local_path;
use super::thread::{DeviceCmd, DeviceHandle, DeviceInfo, spawn_audio_thread};
use super::types::{Media, MediaError, MediaEvent};

/// How long a play request may wait for the audio thread to answer.
const PLAY_REPLY_TIMEOUT: Duration = Duration::from_secs(2);

/// Local-file playback on the default output device.
///
/// A proxy for the audio thread: commands go over a channel and playback
/// information comes back through a shared handle.
pub struct DeviceMedia {
    tx: Sender<DeviceCmd>,
    info: DeviceHandle,
    join: Option<JoinHandle<()>>,
}

impl DeviceMedia {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<DeviceCmd>();
        let info: DeviceHandle = Arc::new(Mutex::new(DeviceInfo::default()));
        let join = spawn_audio_thread(rx, info.clone());

        Self {
            tx,
            info,
            join: Some(join),
        }
    }

    fn send(&self, cmd: DeviceCmd) {
        if self.tx.send(cmd).is_err() {
            warn!("audio thread is gone, dropping command");
        }
    }
}

impl Media for DeviceMedia {
    fn load(&mut self, src: &str, _duration_hint: Option<Duration>) {
        let path = local_path(src).unwrap_or_else(|| PathBuf::from(src));
        // Forget the old source right away so nothing stale is polled before
        // the audio thread picks the command up.
        if let Ok(mut info) = self.info.lock() {
            *info = DeviceInfo::default();
        }
        self.send(DeviceCmd::Load(path));
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.tx
            .send(DeviceCmd::Play(reply_tx))
            .map_err(|_| MediaError::Disconnected)?;
        reply_rx
            .recv_timeout(PLAY_REPLY_TIMEOUT)
            .map_err(|_| MediaError::Disconnected)?
    }

    fn pause(&mut self) {
        self.send(DeviceCmd::Pause);
    }

    fn seek(&mut self, secs: f64) {
        if secs.is_finite() {
            self.send(DeviceCmd::Seek(Duration::from_secs_f64(secs.max(0.0))));
        }
    }

    fn set_volume(&mut self, gain: f32) {
        self.send(DeviceCmd::SetVolume(gain));
    }

    fn current_time(&self) -> f64 {
        self.info
            .lock()
            .map(|info| info.elapsed.as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.info
            .lock()
            .ok()
            .and_then(|info| info.duration.map(|d| d.as_secs_f64()))
    }

    fn ended(&self) -> bool {
        self.info.lock().map(|info| info.ended).unwrap_or(false)
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        self.info
            .lock()
            .map(|mut info| std::mem::take(&mut info.events))
            .unwrap_or_default()
    }
}

impl Drop for DeviceMedia {
    fn drop(&mut self) {
        let _ = self.tx.send(DeviceCmd::Quit);
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}
