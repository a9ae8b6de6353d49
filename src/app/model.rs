//! Application model types: `App` and `Section`.
//!
//! The `App` struct is the page composition: it owns the catalog, the single
//! "current track" selection handed to the player, the keyboard cursor over
//! the card grids and the navigation/scroll state.

use rand::{rng, seq::SliceRandom};
use tracing::info;

use crate::catalog::{Playlist, Track};

use super::nav::NavState;

/// Bar heights (1..=8) of the waveform drawn on the current track's card.
const WAVEFORM_BARS: [u8; 13] = [2, 5, 3, 7, 4, 8, 6, 3, 5, 7, 2, 6, 4];

/// Which card grid the cursor is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Tracks,
    Playlists,
}

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    pub playlists: Vec<Playlist>,
    current: Option<String>,

    pub section: Section,
    pub track_cursor: usize,
    pub playlist_cursor: usize,

    pub nav: NavState,
    pub scroll: u16,

    pub last_playlist: Option<String>,
    pub waveform: Vec<u8>,
}

impl App {
    /// Create a new `App` over the provided catalog.
    pub fn new(tracks: Vec<Track>, playlists: Vec<Playlist>) -> Self {
        Self {
            tracks,
            playlists,
            current: None,
            section: Section::Tracks,
            track_cursor: 0,
            playlist_cursor: 0,
            nav: NavState::default(),
            scroll: 0,
            last_playlist: None,
            waveform: WAVEFORM_BARS.to_vec(),
        }
    }

    pub fn current_track_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The track handed to the player, if any.
    pub fn current_track(&self) -> Option<&Track> {
        let id = self.current_track_id()?;
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    /// Exclusive selection: the current track's id clears the selection,
    /// any other known id replaces it. Returns true when the selection changed.
    pub fn toggle_track(&mut self, id: &str) -> bool {
        if self.is_current(id) {
            info!(id, "track deselected");
            self.current = None;
            return true;
        }
        if !self.tracks.iter().any(|t| t.id == id) {
            return false;
        }
        info!(id, "track selected");
        self.current = Some(id.to_string());
        self.waveform.shuffle(&mut rng());
        true
    }

    /// Record a playlist click. Playlists carry no playback.
    pub fn select_playlist(&mut self, id: &str) -> Option<&Playlist> {
        let playlist = self.playlists.iter().find(|p| p.id == id)?;
        info!(id, title = %playlist.title, "playlist selected");
        self.last_playlist = Some(playlist.id.clone());
        Some(playlist)
    }

    /// Activate the card under the cursor.
    pub fn activate(&mut self) {
        match self.section {
            Section::Tracks => {
                if let Some(id) = self.tracks.get(self.track_cursor).map(|t| t.id.clone()) {
                    self.toggle_track(&id);
                }
            }
            Section::Playlists => {
                if let Some(id) = self
                    .playlists
                    .get(self.playlist_cursor)
                    .map(|p| p.id.clone())
                {
                    self.select_playlist(&id);
                }
            }
        }
    }

    pub fn toggle_section(&mut self) {
        self.section = match self.section {
            Section::Tracks if !self.playlists.is_empty() => Section::Playlists,
            Section::Playlists if !self.tracks.is_empty() => Section::Tracks,
            s => s,
        };
    }

    /// Move the cursor inside the focused grid of `columns` cards per row.
    /// Moving past the top or bottom row hops to the neighbouring grid.
    pub fn move_cursor(&mut self, dx: i32, dy: i32, columns: usize) {
        let columns = columns.max(1);
        let (len, cursor) = match self.section {
            Section::Tracks => (self.tracks.len(), self.track_cursor),
            Section::Playlists => (self.playlists.len(), self.playlist_cursor),
        };
        if len == 0 {
            return;
        }

        let row = (cursor / columns) as i32;
        let col = (cursor % columns) as i32;
        let last_row = ((len - 1) / columns) as i32;
        let new_row = row + dy;

        if new_row > last_row && self.section == Section::Tracks && !self.playlists.is_empty() {
            self.section = Section::Playlists;
            self.playlist_cursor = (col as usize).min(self.playlists.len() - 1);
            return;
        }
        if new_row < 0 && self.section == Section::Playlists && !self.tracks.is_empty() {
            self.section = Section::Tracks;
            let last = self.tracks.len() - 1;
            self.track_cursor = ((last / columns) * columns + col as usize).min(last);
            return;
        }

        let new_row = new_row.clamp(0, last_row);
        let new_col = (col + dx).clamp(0, columns as i32 - 1);
        let next = (new_row as usize * columns + new_col as usize).min(len - 1);
        match self.section {
            Section::Tracks => self.track_cursor = next,
            Section::Playlists => self.playlist_cursor = next,
        }
    }

    /// Scroll by `delta` rows within `0..=max`.
    pub fn scroll_by(&mut self, delta: i32, max: u16, threshold: u16) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(max));
        self.set_scroll(next as u16, threshold);
    }

    /// Scroll the minimum amount that makes rows `top..bottom` visible in a
    /// viewport of `height` rows.
    pub fn scroll_to_show(&mut self, top: u16, bottom: u16, height: u16, threshold: u16) {
        if top < self.scroll {
            self.set_scroll(top, threshold);
        } else if bottom > self.scroll.saturating_add(height) {
            self.set_scroll(bottom.saturating_sub(height).min(top), threshold);
        }
    }

    fn set_scroll(&mut self, offset: u16, threshold: u16) {
        self.scroll = offset;
        self.nav.update_scroll(offset, threshold);
    }
}
