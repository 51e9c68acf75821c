// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The three vertical regions of every screen. The navbar row collapses on
/// screens that hide it (login, not-found).
pub struct AppLayout {
    pub navbar: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn create_layout(frame_size: Rect, show_navbar: bool) -> AppLayout {
    let constraints = if show_navbar {
        vec![
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ]
    } else {
        vec![Constraint::Min(0), Constraint::Length(1)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame_size);

    if show_navbar {
        AppLayout {
            navbar: chunks[0],
            body: chunks[1],
            footer: chunks[2],
        }
    } else {
        AppLayout {
            navbar: Rect::default(),
            body: chunks[0],
            footer: chunks[1],
        }
    }
}
