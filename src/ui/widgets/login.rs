// src/ui/widgets/login.rs

use crate::app::{App, LoginField};
use crate::ui::widgets::centered_rect;
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the sign-in card: email and password fields with a focus cursor,
/// the masked password toggle, and the demo sign-in hints.
pub fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let card_area = centered_rect(50, 70, area);

    let card = Block::default()
        .borders(Borders::ALL)
        .title(" SIO ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = card.inner(card_area);
    frame.render_widget(card, card_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Welcome heading
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Email field
            Constraint::Length(3), // Password field
            Constraint::Length(2), // Spacer
            Constraint::Min(0),    // Secondary actions
        ])
        .split(inner);

    let heading = Paragraph::new("Welcome Back".bold()).alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let subtitle = Paragraph::new("Sign in to your AI Eye Care Assistant")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    render_field(
        frame,
        "Email",
        &app.login.email,
        app.login.focus == LoginField::Email,
        chunks[2],
    );

    let password_display = if app.login.show_password {
        app.login.password.clone()
    } else {
        "•".repeat(app.login.password.chars().count())
    };
    render_field(
        frame,
        "Password",
        &password_display,
        app.login.focus == LoginField::Password,
        chunks[3],
    );

    let actions = Paragraph::new(vec![
        Line::from("── or continue with ──").style(Style::default().fg(Color::DarkGray)),
        Line::from(vec![
            Span::styled("Ctrl+G", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" Continue with Google"),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(actions, chunks[5]);

    // Cursor sits at the end of the focused field.
    let (field_area, value) = match app.login.focus {
        LoginField::Email => (chunks[2], app.login.email.as_str()),
        LoginField::Password => (chunks[3], password_display.as_str()),
    };
    frame.set_cursor_position(Position::new(
        field_area.x + value.chars().count() as u16 + 1,
        field_area.y + 1,
    ));
}

fn render_field(frame: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let field = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(field, area);
}
