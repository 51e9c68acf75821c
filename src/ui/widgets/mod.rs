// src/ui/widgets/mod.rs

pub mod chat;
pub mod doctors;
pub mod footer;
pub mod login;
pub mod navbar;
pub mod not_found;
pub mod profile;
pub mod scan;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centers a `percent_x` by `percent_y` area inside `r`. Used by the
/// card-style screens (login, not-found).
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
