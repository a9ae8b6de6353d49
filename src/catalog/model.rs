use std::time::Duration;

/// A single playable item with its display metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub cover_art: String,
    /// Display label such as `"3:24"`; not used for timing.
    pub duration: String,
    pub genre: String,
    pub mood: String,
    pub audio_src: Option<String>,
}

impl Track {
    /// Parse the `m:ss` duration label. Returns `None` for anything malformed.
    pub fn duration_hint(&self) -> Option<Duration> {
        parse_duration_label(&self.duration)
    }
}

/// A named collection shown on the landing page. `track_count` is display-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_art: String,
    pub track_count: u32,
}

pub fn parse_duration_label(label: &str) -> Option<Duration> {
    let (minutes, seconds) = label.trim().split_once(':')?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(Duration::from_secs(minutes * 60 + seconds))
}
