//! UI rendering for the terminal landing page.
//!
//! The page (hero, card grids, call to action) is rendered into an
//! off-screen buffer as tall as its content and the visible slice is copied
//! into the frame, which gives row-precise scrolling. Navigation bar, player
//! bar and controls stay fixed around it.

mod cards;
mod layout;
mod player;
mod sections;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, NAV_LINKS, Section};
use crate::config::Settings;
use crate::media::Media;
use crate::player::{Player, PlayerState};

pub use layout::{PageLayout, page_layout, panel_area, screen};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("hjkl", "move");
    map.insert("tab", "section");
    map.insert("enter", "play/stop card");
    map.insert("space/p", "play/pause");
    map.insert("+/-", "volume");
    map.insert("0-9", "seek to %");
    map.insert("e", "expand player");
    map.insert("esc", "close");
    map.insert("m", "menu");
    map.insert("pgup/pgdn", "scroll");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_step_percent: f64) -> String {
    let order = [
        "hjkl", "tab", "enter", "space/p", "H/L", "0-9", "+/-", "e", "esc", "m", "pgup/pgdn", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] seek -/+{seek_step_percent}%"))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{k}] {v}"))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

fn render_nav<M: Media>(frame: &mut Frame, area: Rect, app: &App, player: &Player<M>, brand: &str) {
    let mut spans = vec![Span::styled(
        brand,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if app.nav.scrolled {
        // Compact style once the page has scrolled: brand plus now-playing hint.
        if let Some(track) = player.track() {
            let state = if player.state() == PlayerState::Playing {
                "♪"
            } else {
                "‖"
            };
            spans.push(Span::raw(format!("   {state} {}", track.title)));
        }
    } else {
        spans.push(Span::raw("   "));
        for link in NAV_LINKS {
            spans.push(Span::raw(format!("{link}  ")));
        }
        spans.push(Span::styled("⌕  Sign In  ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            " Start Free Trial ",
            Style::default().fg(Color::Black).bg(Color::Blue),
        ));
    }

    let border = if app.nav.scrolled {
        Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(border)
            .title_alignment(Alignment::Right)
            .title(if app.nav.menu_open { " ✕ " } else { " ☰ " }),
    );
    frame.render_widget(nav, area);
}

fn render_menu(frame: &mut Frame, body: Rect, brand: &str) {
    let width = 30.min(body.width);
    let area = Rect::new(body.right() - width, body.y, width, body.height);
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            brand,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for link in NAV_LINKS {
        lines.push(Line::from(link));
        lines.push(Line::default());
    }
    lines.push(Line::from("⌕ Search"));
    lines.push(Line::from("Sign In"));
    lines.push(Line::from(Span::styled(
        "Start Free Trial",
        Style::default().fg(Color::Blue),
    )));

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" menu (m closes) ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(menu, area);
}

/// Render the full page for a viewport `width` columns wide.
fn render_page(app: &App, width: u16, page: &PageLayout) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, page.height));

    sections::render_hero(&mut buf, page.hero);
    sections::render_tracks_header(&mut buf, page.tracks_header);
    for (i, (track, area)) in app.tracks.iter().zip(page.tracks.iter()).enumerate() {
        let focused = app.section == Section::Tracks && app.track_cursor == i;
        cards::render_track_card(
            &mut buf,
            *area,
            track,
            app.is_current(&track.id),
            focused,
            &app.waveform,
        );
    }
    sections::render_playlists_header(&mut buf, page.playlists_header);
    for (i, (playlist, area)) in app.playlists.iter().zip(page.playlists.iter()).enumerate() {
        let focused = app.section == Section::Playlists && app.playlist_cursor == i;
        let opened = app.last_playlist.as_deref() == Some(playlist.id.as_str());
        cards::render_playlist_card(&mut buf, *area, playlist, focused, opened);
    }
    sections::render_cta(&mut buf, page.cta);

    buf
}

/// Copy rows `scroll..scroll + body.height` of `page` into the frame.
fn blit(frame: &mut Frame, page: &Buffer, body: Rect, scroll: u16) {
    let out = frame.buffer_mut();
    for y in 0..body.height {
        let src_y = scroll + y;
        if src_y >= page.area.height {
            break;
        }
        for x in 0..body.width.min(page.area.width) {
            out[(body.x + x, body.y + y)] = page[(x, src_y)].clone();
        }
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw<M: Media>(frame: &mut Frame, app: &App, player: &Player<M>, settings: &Settings) {
    let player_visible = player.track().is_some();
    let screen = screen(frame.area(), player_visible);

    render_nav(frame, screen.nav, app, player, &settings.ui.brand);

    let page = page_layout(
        screen.body.width,
        app.tracks.len(),
        app.playlists.len(),
        &settings.ui,
    );
    let buf = render_page(app, screen.body.width, &page);
    let max_scroll = page.height.saturating_sub(screen.body.height);
    blit(frame, &buf, screen.body, app.scroll.min(max_scroll));

    if player_visible {
        player::render_bar(frame, screen.player, player);
        if player.is_expanded() {
            player::render_panel(frame, panel_area(&screen), player);
        }
    }

    if app.nav.menu_open {
        render_menu(frame, screen.body, &settings.ui.brand);
    }

    let footer = Paragraph::new(controls_text(settings.player.seek_step_percent))
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, screen.controls);
}
