// src/ui/widgets/chat.rs

use crate::app::{App, SPINNER_CHARS};
use crate::core::knowledge_base::QUICK_QUESTIONS;
use crate::core::models::{Message, MessageKind, Sender};
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn render_chat(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    render_quick_questions(frame, app, columns[0]);

    let chat_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(columns[1]);

    render_messages(frame, app, chat_rows[0]);
    render_input(frame, app, chat_rows[1]);
}

fn render_quick_questions(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = QUICK_QUESTIONS
        .iter()
        .map(|question| ListItem::new(*question))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quick Questions (↑/↓)"),
        )
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    state.select(app.chat.quick_question);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_messages(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" AI Assistant — Online ");
    let inner = block.inner(area);

    let mut lines: Vec<Line> = Vec::new();
    for message in &app.chat.messages {
        lines.extend(message_lines(message));
    }
    if app.chat.waiting {
        let spinner = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
        lines.push(Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(Color::Cyan)),
            Span::styled("AI is thinking...", Style::default().fg(Color::DarkGray)),
        ]));
    }

    // Anchor to the bottom, then apply the manual scroll offset. Row counts
    // are estimated against the wrapped width.
    let width = inner.width.max(1) as usize;
    let total_rows: usize = lines
        .iter()
        .map(|line| (line.width().max(1)).div_ceil(width))
        .sum();
    let offset = total_rows
        .saturating_sub(inner.height as usize)
        .saturating_sub(app.chat.scroll as usize);

    let messages = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0))
        .block(block);
    frame.render_widget(messages, area);
}

fn message_lines(message: &Message) -> Vec<Line<'_>> {
    let (label, label_style, align) = match message.sender {
        Sender::User => ("You", Style::default().fg(Color::Cyan), Alignment::Right),
        Sender::Assistant => ("AI Assistant", Style::default().fg(Color::Green), Alignment::Left),
    };

    let mut header_spans = vec![
        Span::styled(label, label_style.bold()),
        Span::styled(
            format!(" · {}", message.timestamp.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if message.kind == MessageKind::Image {
        header_spans.push(Span::styled(" [image]", Style::default().fg(Color::Magenta)));
    }

    let mut lines = vec![Line::from(header_spans).alignment(align)];
    for content_line in message.content.lines() {
        lines.push(Line::from(content_line.to_string()).alignment(align));
    }
    lines.push(Line::from(""));
    lines
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.chat.listening {
        "Listening..."
    } else {
        "Message"
    };

    let (text, style) = if app.chat.input.is_empty() {
        (
            "Ask about eye health, symptoms, or treatments...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.chat.input.as_str(), Style::default())
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    frame.set_cursor_position(Position::new(
        area.x + app.chat.input.chars().count() as u16 + 1,
        area.y + 1,
    ));
}
