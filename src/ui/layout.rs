//! Page geometry shared by rendering and the event loop's scroll handling.
//!
//! All rects are in page coordinates: the page is as wide as the body
//! viewport and as tall as its content, then scrolled through the viewport.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::UiSettings;

pub const NAV_HEIGHT: u16 = 3;
pub const PLAYER_BAR_HEIGHT: u16 = 4;
pub const PLAYER_PANEL_HEIGHT: u16 = 14;
pub const CONTROLS_HEIGHT: u16 = 3;

pub const HERO_HEIGHT: u16 = 13;
pub const SECTION_HEADER_HEIGHT: u16 = 4;
pub const TRACK_CARD_HEIGHT: u16 = 7;
pub const PLAYLIST_CARD_HEIGHT: u16 = 7;
pub const CTA_HEIGHT: u16 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub hero: Rect,
    pub tracks_header: Rect,
    pub tracks: Vec<Rect>,
    pub playlists_header: Rect,
    pub playlists: Vec<Rect>,
    pub cta: Rect,
    pub height: u16,
}

fn grid(y: u16, width: u16, count: usize, columns: u16, card_height: u16) -> (Vec<Rect>, u16) {
    let columns = columns.max(1);
    let card_width = (width / columns).max(1);
    let rects: Vec<Rect> = (0..count)
        .map(|i| {
            let row = (i / columns as usize) as u16;
            let col = (i % columns as usize) as u16;
            Rect::new(col * card_width, y + row * card_height, card_width, card_height)
        })
        .collect();
    let rows = count.div_ceil(columns as usize) as u16;
    (rects, rows * card_height)
}

/// Lay out every page section for a viewport `width` columns wide.
pub fn page_layout(width: u16, tracks: usize, playlists: usize, ui: &UiSettings) -> PageLayout {
    let mut y = 0;

    let hero = Rect::new(0, y, width, HERO_HEIGHT);
    y += HERO_HEIGHT;

    let tracks_header = Rect::new(0, y, width, SECTION_HEADER_HEIGHT);
    y += SECTION_HEADER_HEIGHT;
    let (track_rects, h) = grid(y, width, tracks, ui.track_columns, TRACK_CARD_HEIGHT);
    y += h;

    let playlists_header = Rect::new(0, y, width, SECTION_HEADER_HEIGHT);
    y += SECTION_HEADER_HEIGHT;
    let (playlist_rects, h) = grid(y, width, playlists, ui.playlist_columns, PLAYLIST_CARD_HEIGHT);
    y += h;

    let cta = Rect::new(0, y, width, CTA_HEIGHT);
    y += CTA_HEIGHT;

    PageLayout {
        hero,
        tracks_header,
        tracks: track_rects,
        playlists_header,
        playlists: playlist_rects,
        cta,
        height: y,
    }
}

/// Split the terminal into navigation bar, page viewport, player bar and controls.
pub struct Screen {
    pub nav: Rect,
    pub body: Rect,
    pub player: Rect,
    pub controls: Rect,
}

pub fn screen(area: Rect, player_visible: bool) -> Screen {
    let player_height = if player_visible { PLAYER_BAR_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(player_height),
            Constraint::Length(CONTROLS_HEIGHT),
        ])
        .split(area);
    Screen {
        nav: chunks[0],
        body: chunks[1],
        player: chunks[2],
        controls: chunks[3],
    }
}

/// The expanded player panel, anchored to the bottom of body + player bar.
pub fn panel_area(screen: &Screen) -> Rect {
    let bottom = screen.player.bottom().max(screen.body.bottom());
    let top = screen.body.y;
    let height = PLAYER_PANEL_HEIGHT.min(bottom.saturating_sub(top));
    Rect::new(screen.body.x, bottom - height, screen.body.width, height)
}
