/// Links shown by the navigation bar and its menu. Presentational only.
pub const NAV_LINKS: [&str; 5] = ["Discover", "Genres", "Playlists", "For Artists", "Pricing"];

/// Navigation bar state: compact style once scrolled, and the menu overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Track the page scroll offset against the threshold.
    pub fn update_scroll(&mut self, offset: u16, threshold: u16) {
        self.scrolled = offset > threshold;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
