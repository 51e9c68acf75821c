// src/ui/widgets/profile.rs

use crate::app::{App, ProfileField};
use crate::core::knowledge_base::{DAYS_SINCE_LAST_SCAN, SCAN_HISTORY};
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, LineGauge, Paragraph},
};

pub fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Personal information
            Constraint::Length(6),  // Notification preferences
            Constraint::Min(0),     // Scan history
        ])
        .split(columns[0]);

    render_personal_info(frame, app, left[0]);
    render_notifications(frame, app, left[1]);
    render_history(frame, left[2]);
    render_stats(frame, columns[1]);
}

fn render_personal_info(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.profile.is_editing();
    let title = if editing {
        "Personal Information — editing"
    } else {
        "Personal Information (E to edit)"
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The draft is shown while editing; the saved profile otherwise.
    let shown = app.profile.draft.as_ref().unwrap_or(&app.profile.profile);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Avatar line
            Constraint::Length(3), // Name / date of birth
            Constraint::Length(3), // Email / phone
            Constraint::Min(0),
        ])
        .split(inner);

    let member_line = Line::from(vec![
        Span::styled(
            format!(" {} ", shown.initials()),
            Style::new().bold().bg(Color::Cyan).fg(Color::Black),
        ),
        Span::raw(format!(
            "  {} · Member since {}",
            shown.name,
            shown.join_date.format("%b %d, %Y")
        )),
    ]);
    frame.render_widget(Paragraph::new(member_line), chunks[0]);

    let name_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let contact_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let fields = [
        (ProfileField::Name, "Full Name", shown.name.as_str(), name_row[0]),
        (ProfileField::DateOfBirth, "Date of Birth", shown.date_of_birth.as_str(), name_row[1]),
        (ProfileField::Email, "Email", shown.email.as_str(), contact_row[0]),
        (ProfileField::Phone, "Phone", shown.phone.as_str(), contact_row[1]),
    ];

    for (field, label, value, rect) in fields {
        let focused = editing && app.profile.focus == field;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else if editing {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let widget = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(border_style),
        );
        frame.render_widget(widget, rect);

        if focused {
            frame.set_cursor_position(Position::new(
                rect.x + value.chars().count() as u16 + 1,
                rect.y + 1,
            ));
        }
    }
}

fn render_notifications(frame: &mut Frame, app: &App, area: Rect) {
    let prefs = &app.profile.prefs;
    let entries = [
        (1, prefs.scan_reminders, "Scan Reminders", "Get reminded to perform regular eye scans"),
        (2, prefs.health_tips, "Eye Health Tips", "Receive weekly eye health tips and advice"),
        (3, prefs.appointment_alerts, "Appointment Alerts", "Get notified about upcoming appointments"),
        (4, prefs.newsletter, "Newsletter", "Monthly newsletter with health updates"),
    ];

    let lines: Vec<Line> = entries
        .iter()
        .map(|(slot, enabled, label, description)| {
            let toggle = if *enabled {
                Span::styled("[on] ", Style::default().fg(Color::Green))
            } else {
                Span::styled("[off]", Style::default().fg(Color::DarkGray))
            };
            Line::from(vec![
                Span::styled(format!("{slot} "), Style::default().fg(Color::Yellow)),
                toggle,
                Span::styled(format!(" {label}"), Style::new().bold()),
                Span::styled(format!(" — {description}"), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Notification Preferences (1-4)"),
    );
    frame.render_widget(widget, area);
}

fn render_history(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Recent Scan History");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); SCAN_HISTORY.len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (record, row) in SCAN_HISTORY.iter().zip(rows.iter()) {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(14),
                Constraint::Min(0),
                Constraint::Length(24),
            ])
            .split(*row);

        let date_label = record
            .parsed_date()
            .map(|d| d.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| record.date.to_string());
        frame.render_widget(Paragraph::new(date_label), parts[0]);

        let result_style = if record.result == "Healthy" {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(record.result, result_style)),
            parts[1],
        );

        let gauge = LineGauge::default()
            .ratio(f64::from(record.confidence_pct) / 100.0)
            .label(format!("{}%", record.confidence_pct))
            .filled_style(Style::default().fg(Color::Cyan));
        frame.render_widget(gauge, parts[2]);
    }
}

fn render_stats(frame: &mut Frame, area: Rect) {
    let total = SCAN_HISTORY.len();
    let average = if total == 0 {
        0
    } else {
        SCAN_HISTORY
            .iter()
            .map(|r| usize::from(r.confidence_pct))
            .sum::<usize>()
            / total
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(0)])
        .split(area);

    let stats = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("{total}").bold().cyan()).alignment(Alignment::Center),
        Line::from("Total Scans").alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!("{average}%").bold().green()).alignment(Alignment::Center),
        Line::from("Avg. Health Score").alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!("{DAYS_SINCE_LAST_SCAN}").bold().yellow()).alignment(Alignment::Center),
        Line::from("Days Since Last Scan").alignment(Alignment::Center),
    ])
    .block(Block::default().borders(Borders::ALL).title("Your Health Stats"));
    frame.render_widget(stats, chunks[0]);

    let actions = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Ctrl+S", Style::new().bold().fg(Color::Yellow)),
            Span::raw("  New Eye Scan"),
        ]),
        Line::from(vec![
            Span::styled("F3    ", Style::new().bold().fg(Color::Yellow)),
            Span::raw("  Find Doctors"),
        ]),
        Line::from(vec![
            Span::styled("F2    ", Style::new().bold().fg(Color::Yellow)),
            Span::raw("  Ask the Assistant"),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Quick Actions"));
    frame.render_widget(actions, chunks[1]);
}
