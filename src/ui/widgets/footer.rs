// src/ui/widgets/footer.rs

use crate::app::{App, ScanPhase, Screen};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer: the live key hints for the current screen.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = match app.screen {
        Screen::Login => Line::from(vec![
            key("Tab"),
            Span::raw(" switch field, "),
            key("Enter"),
            Span::raw(" sign in, "),
            key("Ctrl+G"),
            Span::raw(" Google, "),
            key("Ctrl+P"),
            Span::raw(" show password, "),
            key("Esc"),
            Span::raw(" quit."),
        ]),
        Screen::Scan => match app.scan.phase {
            ScanPhase::Idle => Line::from(vec![
                key("[U]"),
                Span::raw("pload image, "),
                key("[C]"),
                Span::raw("amera capture, "),
                key("Esc"),
                Span::raw(" logout."),
            ]),
            ScanPhase::Scanning => Line::from("Analyzing... Ctrl+C to quit."),
            ScanPhase::Finished => Line::from(vec![
                key("[N]"),
                Span::raw("ew scan, "),
                key("[E]"),
                Span::raw("xport report, "),
                key("[D]"),
                Span::raw("octors nearby, "),
                key("Esc"),
                Span::raw(" logout."),
            ]),
        },
        Screen::Chatbot => Line::from(vec![
            key("Enter"),
            Span::raw(" send, "),
            key("↑/↓"),
            Span::raw(" quick questions, "),
            key("Ctrl+U"),
            Span::raw(" attach image, "),
            key("Ctrl+G"),
            Span::raw(" voice, "),
            key("PgUp/PgDn"),
            Span::raw(" scroll."),
        ]),
        Screen::Doctors => Line::from(vec![
            key("Tab"),
            Span::raw(" next control, "),
            key("←/→"),
            Span::raw(" change value, "),
            key("Space"),
            Span::raw(" toggle, "),
            key("↑/↓"),
            Span::raw(" scroll results."),
        ]),
        Screen::Profile => {
            if app.profile.is_editing() {
                Line::from(vec![
                    key("Tab"),
                    Span::raw(" next field, "),
                    key("Ctrl+S"),
                    Span::raw(" save, "),
                    key("Esc"),
                    Span::raw(" cancel."),
                ])
            } else {
                Line::from(vec![
                    key("[E]"),
                    Span::raw("dit profile, "),
                    key("1-4"),
                    Span::raw(" toggle notifications, "),
                    key("Esc"),
                    Span::raw(" logout."),
                ])
            }
        }
        Screen::NotFound => Line::from(vec![
            key("Enter"),
            Span::raw(" return to sign-in."),
        ]),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
