use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::catalog;
use crate::media::{DeviceMedia, HybridMedia};
use crate::player::Player;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (mut settings, fallback_reason) = settings::load_settings();
    logging::init(&settings.log);
    if let Some(reason) = fallback_reason {
        warn!("{reason}");
    }

    if env::args().skip(1).any(|a| a == "--simulated") {
        settings.player.simulated_only = true;
    }

    let device = if settings.player.simulated_only {
        None
    } else {
        Some(DeviceMedia::spawn())
    };
    let media = HybridMedia::new(device);
    info!(
        simulated_only = settings.player.simulated_only,
        "soundwave starting"
    );

    let mut app = App::new(catalog::featured_tracks(), catalog::playlists());
    let mut player = Player::new(media, settings.player.clone());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("soundwave exiting");
    run_result
}
