use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use super::device::DeviceMedia;
use super::simulated::SimulatedMedia;
use super::types::{Media, MediaError, MediaEvent};

/// Resolve `src` to an existing local file, accepting plain paths and `file://` URLs.
pub fn local_path(src: &str) -> Option<PathBuf> {
    let p = Path::new(src.strip_prefix("file://").unwrap_or(src));
    p.is_file().then(|| p.to_path_buf())
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Backend {
    Simulated,
    Device,
}

/// Routes each loaded source to the backend able to play it: local files go
/// to the output device (when one was spawned), everything else is simulated.
pub struct HybridMedia {
    simulated: SimulatedMedia,
    device: Option<DeviceMedia>,
    active: Backend,
}

impl HybridMedia {
    pub fn new(device: Option<DeviceMedia>) -> Self {
        Self {
            simulated: SimulatedMedia::new(),
            device,
            active: Backend::Simulated,
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> Backend {
        self.active
    }

    fn route(&self, src: &str) -> Backend {
        if self.device.is_some() && local_path(src).is_some() {
            Backend::Device
        } else {
            Backend::Simulated
        }
    }

    fn current(&self) -> &dyn Media {
        match (self.active, self.device.as_ref()) {
            (Backend::Device, Some(d)) => d,
            _ => &self.simulated,
        }
    }

    fn current_mut(&mut self) -> &mut dyn Media {
        match (self.active, self.device.as_mut()) {
            (Backend::Device, Some(d)) => d,
            _ => &mut self.simulated,
        }
    }
}

impl Media for HybridMedia {
    fn load(&mut self, src: &str, duration_hint: Option<Duration>) {
        let target = self.route(src);
        if target != self.active {
            // Silence the old backend; its pending notifications belong to the old source.
            let old = self.current_mut();
            old.pause();
            old.poll_events();
            debug!(from = ?self.active, to = ?target, "switching media backend");
            self.active = target;
        }
        self.current_mut().load(src, duration_hint);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.current_mut().play()
    }

    fn pause(&mut self) {
        self.current_mut().pause();
    }

    fn seek(&mut self, secs: f64) {
        self.current_mut().seek(secs);
    }

    fn set_volume(&mut self, gain: f32) {
        self.current_mut().set_volume(gain);
    }

    fn current_time(&self) -> f64 {
        self.current().current_time()
    }

    fn duration(&self) -> Option<f64> {
        self.current().duration()
    }

    fn ended(&self) -> bool {
        self.current().ended()
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        self.current_mut().poll_events()
    }
}
