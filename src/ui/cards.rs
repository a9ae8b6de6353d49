//! Featured-track and playlist cards.
//!
//! Cards only present a record. The "current" flag comes from the page and
//! the "focused" flag is the keyboard cursor standing in for hover.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::catalog::{Playlist, Track};

const BAR_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render waveform bar heights (1..=8) as block glyphs.
pub fn waveform_line(bars: &[u8]) -> String {
    bars.iter()
        .map(|&h| BAR_GLYPHS[usize::from(h.clamp(1, 8)) - 1])
        .collect()
}

fn card_block(title: &str, focused: bool, current: bool) -> Block<'_> {
    let border = if current {
        Style::default().fg(Color::Cyan)
    } else if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {title} "))
}

pub fn render_track_card(
    buf: &mut Buffer,
    area: Rect,
    track: &Track,
    current: bool,
    focused: bool,
    waveform: &[u8],
) {
    let mut lines = vec![
        Line::from(Span::styled(
            track.artist.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(format!("#{}", track.genre), Style::default().fg(Color::Blue)),
            Span::raw(" "),
            Span::styled(format!("#{}", track.mood), Style::default().fg(Color::Magenta)),
            Span::raw(format!("  ◷ {}", track.duration)),
        ]),
    ];

    if current {
        lines.push(Line::from(Span::styled(
            waveform_line(waveform),
            Style::default().fg(Color::Cyan),
        )));
    } else {
        lines.push(Line::default());
    }

    // The play affordance shows on hover, and stays while the card is current.
    if current {
        lines.push(Line::from(Span::styled(
            "⏸ Pause",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
    } else if focused {
        lines.push(Line::from("▶ Play"));
    }

    Paragraph::new(lines)
        .block(card_block(&track.title, focused, current))
        .render(area, buf);
}

/// `opened` marks the playlist picked last; playlists carry no playback.
pub fn render_playlist_card(
    buf: &mut Buffer,
    area: Rect,
    playlist: &Playlist,
    focused: bool,
    opened: bool,
) {
    let mut header = vec![Span::raw(format!("♫ {} tracks", playlist.track_count))];
    if focused {
        header.push(Span::styled("  ▶", Style::default().add_modifier(Modifier::BOLD)));
    }
    let lines = vec![
        Line::from(header),
        Line::from(Span::styled(
            playlist.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];

    Paragraph::new(lines)
        .block(card_block(&playlist.title, focused, opened))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
