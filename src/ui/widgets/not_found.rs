// src/ui/widgets/not_found.rs

use crate::ui::widgets::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// The catch-all screen for unknown deep-link paths.
pub fn render_not_found(frame: &mut Frame, area: Rect) {
    let card = centered_rect(40, 40, area);

    let text = Text::from(vec![
        Line::from(""),
        Line::from("404".bold().red()),
        Line::from(""),
        Line::from("Oops! Page not found"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to return to sign-in.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, card);
}
