//! Bottom player bar and the expanded player panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph},
};

use crate::catalog::Track;
use crate::media::Media;
use crate::player::{Player, PlayerState, format_time};

/// Text progress bar `width` cells wide.
pub fn progress_bar(width: usize, percent: f64) -> String {
    let ratio = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = ((width as f64) * ratio).round() as usize;
    let mut bar = "━".repeat(filled);
    bar.push_str(&"─".repeat(width - filled));
    bar
}

fn volume_glyph(volume: u8) -> &'static str {
    match volume {
        0 => "🔇",
        1..=49 => "🔉",
        _ => "🔊",
    }
}

fn total_label<M: Media>(player: &Player<M>, track: &Track) -> String {
    let d = player.session().duration_secs;
    if d > 0.0 {
        format_time(d)
    } else {
        track.duration.clone()
    }
}

fn play_glyph(state: PlayerState) -> &'static str {
    if state == PlayerState::Playing {
        "⏸"
    } else {
        "▶"
    }
}

/// Compact bar shown while a track is loaded.
pub fn render_bar<M: Media>(frame: &mut Frame, area: Rect, player: &Player<M>) {
    let Some(track) = player.track() else {
        return;
    };
    let session = player.session();
    let elapsed = format_time(session.current_time_secs);
    let total = total_label(player, track);

    let fixed = elapsed.chars().count() + total.chars().count() + 6;
    let bar_width = (area.width as usize).saturating_sub(fixed + 4).max(4);

    let lines = vec![
        Line::from(vec![
            Span::styled(track.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(track.artist.as_str(), Style::default().fg(Color::Gray)),
            Span::raw(format!(
                "   {} {}%",
                volume_glyph(player.volume()),
                player.volume()
            )),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} ", play_glyph(player.state())),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{elapsed} ")),
            Span::styled(
                progress_bar(bar_width, session.progress_percent),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" {total}")),
        ]),
    ];

    let title = if player.autoplay_pending() {
        " starting… (e expands) "
    } else {
        " now playing (e expands) "
    };
    let par = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(par, area);
}

/// Expanded panel drawn over the bottom of the page.
pub fn render_panel<M: Media>(frame: &mut Frame, area: Rect, player: &Player<M>) {
    let Some(track) = player.track() else {
        return;
    };
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" player (esc closes) ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(10)])
        .split(inner);

    let details = Paragraph::new(vec![
        Line::from(Span::styled(
            track.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(track.artist.as_str()),
        Line::default(),
        Line::from(Span::styled(
            format!("#{} #{}", track.genre, track.mood),
            Style::default().fg(Color::Blue),
        )),
        Line::default(),
        Line::from(Span::styled("cover", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            track.cover_art.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().padding(Padding {
        left: 1,
        right: 1,
        top: 0,
        bottom: 0,
    }));
    frame.render_widget(details, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let transport = Line::from(vec![
        Span::raw("⇄   ⏮   "),
        Span::styled(
            play_glyph(player.state()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   ⏭   ⟳"),
    ]);
    frame.render_widget(
        Paragraph::new(transport).alignment(Alignment::Center),
        rows[0],
    );

    let session = player.session();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((session.progress_percent / 100.0).clamp(0.0, 1.0))
        .label(format!(
            "{} / {}",
            format_time(session.current_time_secs),
            total_label(player, track)
        ));
    frame.render_widget(gauge, rows[1]);

    let volume = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio(f64::from(player.volume()) / 100.0)
        .label(format!("{} {}%", volume_glyph(player.volume()), player.volume()));
    frame.render_widget(volume, rows[3]);

    frame.render_widget(
        Paragraph::new("♡ Like   ⤴ Share   ＋ Add   ☰ Queue")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        rows[5],
    );
}
