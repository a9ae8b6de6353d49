use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use crate::app::{App, Section};
use crate::config;
use crate::media::Media;
use crate::player::Player;
use crate::ui;

/// Rows moved by PageUp/PageDown and Ctrl-d/Ctrl-u.
const SCROLL_PAGE: i32 = 10;

/// Main terminal event loop: advances the player clock, hands the page's
/// current track to the player, draws, and handles input. Returns `Ok(())`
/// when shutdown is requested.
pub fn run<M: Media>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player<M>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();
        // The page is the single writer of the current track.
        player.set_track(app.current_track(), now);
        player.tick(now);

        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, app, player, settings);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player, area) {
                    break;
                }
            }
        }
    }

    player.teardown();
    Ok(())
}

/// Page geometry for the last drawn frame: scroll bound and viewport height.
fn viewport(
    app: &App,
    player_visible: bool,
    area: Rect,
    settings: &config::Settings,
) -> (ui::PageLayout, u16) {
    let screen = ui::screen(area, player_visible);
    let page = ui::page_layout(
        screen.body.width,
        app.tracks.len(),
        app.playlists.len(),
        &settings.ui,
    );
    (page, screen.body.height)
}

fn reveal_cursor(app: &mut App, page: &ui::PageLayout, height: u16, threshold: u16) {
    let rect = match app.section {
        Section::Tracks => page.tracks.get(app.track_cursor),
        Section::Playlists => page.playlists.get(app.playlist_cursor),
    };
    if let Some(rect) = rect.copied() {
        app.scroll_to_show(rect.y, rect.bottom(), height, threshold);
    }
}

/// Handle a single key press. Returns `true` when the app should quit.
fn handle_key_event<M: Media>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player<M>,
    area: Rect,
) -> bool {
    let now = Instant::now();
    let threshold = settings.ui.scroll_threshold;
    let (page, height) = viewport(app, player.track().is_some(), area, settings);
    let max_scroll = page.height.saturating_sub(height);
    let columns = match app.section {
        Section::Tracks => settings.ui.track_columns,
        Section::Playlists => settings.ui.playlist_columns,
    } as usize;

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_by(SCROLL_PAGE, max_scroll, threshold);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_by(-SCROLL_PAGE, max_scroll, threshold);
        }
        KeyCode::PageDown => app.scroll_by(SCROLL_PAGE, max_scroll, threshold),
        KeyCode::PageUp => app.scroll_by(-SCROLL_PAGE, max_scroll, threshold),
        KeyCode::Home => app.scroll_by(-i32::from(max_scroll), max_scroll, threshold),
        KeyCode::End => app.scroll_by(i32::from(max_scroll), max_scroll, threshold),
        KeyCode::Char('h') | KeyCode::Left => {
            app.move_cursor(-1, 0, columns);
            reveal_cursor(app, &page, height, threshold);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.move_cursor(1, 0, columns);
            reveal_cursor(app, &page, height, threshold);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_cursor(0, -1, columns);
            reveal_cursor(app, &page, height, threshold);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_cursor(0, 1, columns);
            reveal_cursor(app, &page, height, threshold);
        }
        KeyCode::Tab => {
            app.toggle_section();
            reveal_cursor(app, &page, height, threshold);
        }
        KeyCode::Enter => app.activate(),
        KeyCode::Char(' ') | KeyCode::Char('p') => player.toggle_play_pause(now),
        KeyCode::Char('L') => player.seek_by_percent(settings.player.seek_step_percent),
        KeyCode::Char('H') => player.seek_by_percent(-settings.player.seek_step_percent),
        KeyCode::Char(c @ '0'..='9') => {
            if let Some(d) = c.to_digit(10) {
                player.seek_percent(f64::from(d) * 10.0);
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            player.nudge_volume(i16::from(settings.player.volume_step));
        }
        KeyCode::Char('-') => player.nudge_volume(-i16::from(settings.player.volume_step)),
        KeyCode::Char('e') => player.toggle_expanded(),
        KeyCode::Char('m') => app.nav.toggle_menu(),
        KeyCode::Esc => {
            if app.nav.menu_open {
                app.nav.close_menu();
            } else {
                player.collapse();
            }
        }
        _ => {}
    }

    false
}
