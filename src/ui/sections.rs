//! Static page sections: hero, section headers and the closing call to action.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const FEATURES: [(&str, &str); 3] = [
    ("Unlimited Downloads", "Access thousands of tracks"),
    ("Premium Quality", "Studio-grade audio files"),
    ("Commercial License", "Use in any project"),
];

const GENRE_CHIPS: [&str; 5] = ["Electronic", "Ambient", "Pop", "Hip-Hop", "Rock"];

fn badge(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!(" {text} "),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ))
}

fn button(text: &str, primary: bool) -> Span<'_> {
    let style = if primary {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("[ {text} ]"), style)
}

pub fn render_hero(buf: &mut Buffer, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let copy = vec![
        Line::default(),
        badge("The Future of Royalty-Free Music"),
        Line::default(),
        Line::from(vec![
            Span::styled("Unleash the Perfect ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                "Sound",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" for Your Creation", Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            "High-quality royalty-free music for all your projects. One subscription, unlimited possibilities.",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(vec![
            button("Start Free Trial", true),
            Span::raw("  "),
            button("Explore Library", false),
        ]),
    ];
    Paragraph::new(copy)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[0], buf);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);
    for ((title, blurb), col) in FEATURES.iter().zip(columns.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(*title, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(*blurb, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP))
        .render(*col, buf);
    }
}

pub fn render_tracks_header(buf: &mut Buffer, area: Rect) {
    let mut chips = vec![Span::raw("Filters: ")];
    for genre in GENRE_CHIPS {
        chips.push(Span::styled(format!("({genre})"), Style::default().fg(Color::Gray)));
        chips.push(Span::raw(" "));
    }
    Paragraph::new(vec![
        badge("Explore Our Collection"),
        Line::from(vec![
            Span::styled("Featured Tracks", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("   Trending | Latest | All"),
        ]),
        Line::from(chips),
    ])
    .render(area, buf);
}

pub fn render_playlists_header(buf: &mut Buffer, area: Rect) {
    Paragraph::new(vec![
        badge("Ready-Made Collections"),
        Line::from(vec![
            Span::styled("Curated Playlists", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            button("View All Playlists", false),
        ]),
    ])
    .render(area, buf);
}

pub fn render_cta(buf: &mut Buffer, area: Rect) {
    Paragraph::new(vec![
        Line::default(),
        badge("Start Creating Today"),
        Line::from(Span::styled(
            "Unlimited Music for Your Creative Projects",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Get access to thousands of high-quality tracks with simple licensing for all your content needs.",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(vec![
            button("Start Free Trial", true),
            Span::raw("  "),
            button("Explore Pricing Plans", false),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::TOP))
    .render(area, buf);
}
