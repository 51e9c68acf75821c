// src/ui/widgets/doctors.rs

use crate::app::{App, DoctorsFocus};
use crate::core::models::{Availability, Doctor};
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn render_doctors(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    render_filters(frame, app, columns[0]);
    render_results(frame, app, columns[1]);
}

fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Filters (Tab)");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Length(3), // Specialization
            Constraint::Length(3), // Max distance
            Constraint::Length(1), // Available only
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Sort
            Constraint::Min(0),
        ])
        .split(inner);

    let focus = app.doctors.focus;

    let search = Paragraph::new(app.doctors.query.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(focus_style(focus == DoctorsFocus::Search)),
    );
    frame.render_widget(search, chunks[0]);
    if focus == DoctorsFocus::Search {
        frame.set_cursor_position(Position::new(
            chunks[0].x + app.doctors.query.chars().count() as u16 + 1,
            chunks[0].y + 1,
        ));
    }

    render_select(
        frame,
        "Specialization",
        app.doctors.specialization_label(),
        focus == DoctorsFocus::Specialization,
        chunks[1],
    );
    render_select(
        frame,
        "Max Distance",
        &format!("Within {} km", app.doctors.max_distance_km()),
        focus == DoctorsFocus::Distance,
        chunks[2],
    );

    let checkbox = Line::from(vec![
        Span::raw(if app.doctors.available_only { "[x] " } else { "[ ] " }),
        Span::raw("Available today only"),
    ])
    .style(focus_style(focus == DoctorsFocus::AvailableOnly));
    frame.render_widget(Paragraph::new(checkbox), chunks[3]);

    render_select(
        frame,
        "Sort",
        &format!("Sort by {}", app.doctors.sort_by),
        focus == DoctorsFocus::Sort,
        chunks[5],
    );
}

fn render_select(frame: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let select = Paragraph::new(format!("◂ {value} ▸")).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(focus_style(focused)),
    );
    frame.render_widget(select, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let results = app.doctors.results();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Find Eye Care Specialists");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let count = Paragraph::new(format!("Found {} doctors near you", results.len()))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(count, chunks[0]);

    if results.is_empty() {
        frame.render_widget(
            Paragraph::new("No doctors match the current filters.")
                .alignment(Alignment::Center),
            chunks[1],
        );
        return;
    }

    let items: Vec<ListItem> = results.iter().map(|doctor| doctor_card(doctor)).collect();
    let list = List::new(items)
        .highlight_style(Style::new().bg(Color::DarkGray))
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, chunks[1], &mut app.doctors.list_state);
}

fn doctor_card(doctor: &Doctor) -> ListItem<'static> {
    let lines = vec![
        Line::from(vec![
            Span::styled(doctor.name, Style::new().bold()),
            Span::raw("  "),
            availability_badge(doctor.availability),
        ]),
        Line::from(Span::styled(doctor.clinic, Style::default().fg(Color::DarkGray))),
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(Color::Yellow)),
            Span::raw(format!(
                "{} ({} reviews) · {} years exp.",
                doctor.rating, doctor.reviews, doctor.experience_years
            )),
        ]),
        Line::from(Span::styled(
            doctor.specializations.join(" | "),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(format!(
            "{} km away · Next: {}",
            doctor.distance_km, doctor.next_slot
        )),
        Line::from(Span::styled(doctor.address, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            format!("{} · {}", doctor.phone, doctor.email),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    ListItem::new(Text::from(lines))
}

fn availability_badge(availability: Availability) -> Span<'static> {
    let style = match availability {
        Availability::Available => Style::default().fg(Color::Green),
        Availability::Busy => Style::default().fg(Color::Yellow),
        Availability::Unavailable => Style::default().fg(Color::Red),
    };
    Span::styled(format!("[{availability}]"), style.bold())
}
