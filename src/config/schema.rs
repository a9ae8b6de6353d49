use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/soundwave/config.toml` or `~/.config/soundwave/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SOUNDWAVE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Delay between loading a track and the first play attempt (milliseconds).
    pub autoplay_delay_ms: u64,
    /// Whether a newly selected track should start on its own at all.
    pub autoplay: bool,
    /// Period of the progress sampler while playing (milliseconds).
    pub poll_interval_ms: u64,
    /// Volume every player session starts with, 0..=100.
    pub initial_volume: u8,
    /// Volume change per `+` / `-` key press.
    pub volume_step: u8,
    /// Seek distance per `H` / `L` key press, in percent of the track.
    pub seek_step_percent: f64,
    /// Source used when a track does not carry its own audio reference.
    pub fallback_source: String,
    /// Route every track to the clock-driven backend, even local files.
    pub simulated_only: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: 300,
            autoplay: true,
            poll_interval_ms: 100,
            initial_volume: 80,
            volume_step: 5,
            seek_step_percent: 5.0,
            fallback_source: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3"
                .to_string(),
            simulated_only: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Brand shown in the navigation bar.
    pub brand: String,
    /// Scroll offset (rows) after which the navigation bar switches to its compact style.
    pub scroll_threshold: u16,
    /// Number of featured-track cards per grid row.
    pub track_columns: u16,
    /// Number of playlist cards per grid row.
    pub playlist_columns: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            brand: "SoundWave".to_string(),
            scroll_threshold: 20,
            track_columns: 4,
            playlist_columns: 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Log file location. When unset, a file under the XDG state dir is used.
    pub file: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
