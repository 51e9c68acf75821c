// src/ui/widgets/navbar.rs

use crate::app::{App, Screen};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

const NAV_ITEMS: &[(Screen, &str)] = &[
    (Screen::Scan, "Scan"),
    (Screen::Chatbot, "AI Assistant"),
    (Screen::Doctors, "Find Doctors"),
    (Screen::Profile, "Profile"),
];

/// Renders the navigation bar: one tab per section, switched with F1-F4.
pub fn render_navbar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(index, (_, label))| {
            Line::from(vec![
                Span::styled(format!("F{} ", index + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(*label),
            ])
        })
        .collect();

    let selected = NAV_ITEMS
        .iter()
        .position(|(screen, _)| *screen == app.screen)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" SIO — AI Eye Care Assistant "),
        )
        .highlight_style(Style::new().bold().fg(Color::Cyan))
        .select(selected);

    frame.render_widget(tabs, area);
}
