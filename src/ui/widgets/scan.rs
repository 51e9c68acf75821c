// src/ui/widgets/scan.rs

use crate::app::{App, ExportStatus, ScanPhase, SPINNER_CHARS};
use crate::core::knowledge_base::MEDICAL_DISCLAIMER;
use crate::core::models::Severity;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

pub fn render_scan(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_upload_panel(frame, app, columns[0]);
    render_results_panel(frame, app, columns[1]);
    render_disclaimer(frame, rows[1]);
}

fn render_upload_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Upload Eye Image");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5), // Drop target / selected image
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Progress
        ])
        .split(inner);

    let target_text = match &app.scan.source {
        Some(source) => Text::from(vec![
            Line::from("Selected image:".bold()),
            Line::from(Span::styled(source.label(), Style::default().fg(Color::Cyan))),
            Line::from(""),
            Line::from("Press U to change the image.").style(Style::default().fg(Color::DarkGray)),
        ]),
        None => Text::from(vec![
            Line::from("Drop your eye image here".bold()),
            Line::from(""),
            Line::from("U  browse image files"),
            Line::from("C  capture with the camera"),
        ]),
    };
    frame.render_widget(
        Paragraph::new(target_text).alignment(Alignment::Center),
        chunks[0],
    );

    if app.scan.phase == ScanPhase::Scanning {
        let progress_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(chunks[2]);

        let spinner = SPINNER_CHARS[app.spinner_frame % SPINNER_CHARS.len()];
        let headline = Line::from(vec![
            Span::styled(format!("{spinner} "), Style::default().fg(Color::Cyan)),
            Span::raw("AI Analysis in Progress..."),
        ]);
        frame.render_widget(Paragraph::new(headline), progress_chunks[0]);

        let gauge = Gauge::default()
            .percent(u16::from(app.scan.progress))
            .label(format!("{}%", app.scan.progress))
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(gauge, progress_chunks[1]);

        frame.render_widget(
            Paragraph::new("Processing image with advanced AI algorithms")
                .style(Style::default().fg(Color::DarkGray)),
            progress_chunks[2],
        );
    }
}

fn render_results_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Analysis Results");

    let Some(result) = app.scan.result else {
        let placeholder = match app.scan.phase {
            ScanPhase::Scanning => "Analyzing...",
            _ => "Upload an image to see analysis results",
        };
        frame.render_widget(
            Paragraph::new(placeholder)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Detected condition
            Constraint::Length(1), // Confidence gauge
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Detail lists
            Constraint::Length(1), // Export status
        ])
        .split(inner);

    let condition = Text::from(vec![
        Line::from("Detected Condition".bold()),
        Line::from(vec![
            Span::styled(result.disease, Style::new().bold()),
            Span::raw("  "),
            severity_badge(result.severity),
        ]),
    ]);
    frame.render_widget(Paragraph::new(condition), chunks[0]);

    let confidence = Gauge::default()
        .percent(u16::from(result.confidence_pct))
        .label(format!("Confidence: {}%", result.confidence_pct))
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(confidence, chunks[1]);

    let mut details = vec![Line::from("Common Symptoms".bold())];
    for symptom in result.symptoms {
        details.push(Line::from(format!("• {symptom}")));
    }
    details.push(Line::from(""));
    details.push(Line::from("Prevention Tips".bold()));
    for tip in result.prevention {
        details.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw(*tip),
        ]));
    }
    details.push(Line::from(""));
    details.push(Line::from("Treatment Options".bold()));
    for option in result.treatment {
        details.push(Line::from(format!("• {option}")));
    }
    frame.render_widget(Paragraph::new(details).wrap(Wrap { trim: true }), chunks[3]);

    let status_line = match &app.scan.export_status {
        ExportStatus::Idle => Line::from(""),
        ExportStatus::Success(path) => Line::from(Span::styled(
            format!("Report saved to {path}"),
            Style::default().fg(Color::Green),
        )),
        ExportStatus::Error(message) => Line::from(Span::styled(
            format!("Export failed: {message}"),
            Style::default().fg(Color::Red),
        )),
    };
    frame.render_widget(Paragraph::new(status_line), chunks[4]);
}

fn severity_badge(severity: Severity) -> Span<'static> {
    let style = match severity {
        Severity::Mild => Style::default().fg(Color::Green),
        Severity::Moderate => Style::default().fg(Color::Yellow),
        Severity::Severe => Style::default().fg(Color::Red),
    };
    Span::styled(format!("[{severity}]"), style.bold())
}

fn render_disclaimer(frame: &mut Frame, area: Rect) {
    let disclaimer = Paragraph::new(MEDICAL_DISCLAIMER)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(disclaimer, area);
}
