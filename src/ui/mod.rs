// src/ui/mod.rs

use crate::app::{App, Screen};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    // The login and catch-all screens render without the navbar, like the
    // pages they reproduce.
    let show_navbar = !matches!(app.screen, Screen::Login | Screen::NotFound);
    let layout = layout::create_layout(frame.area(), show_navbar);

    if show_navbar {
        widgets::navbar::render_navbar(frame, app, layout.navbar);
    }

    match app.screen {
        Screen::Login => widgets::login::render_login(frame, app, layout.body),
        Screen::Scan => widgets::scan::render_scan(frame, app, layout.body),
        Screen::Chatbot => widgets::chat::render_chat(frame, app, layout.body),
        Screen::Doctors => widgets::doctors::render_doctors(frame, app, layout.body),
        Screen::Profile => widgets::profile::render_profile(frame, app, layout.body),
        Screen::NotFound => widgets::not_found::render_not_found(frame, layout.body),
    }

    widgets::footer::render_footer(frame, app, layout.footer);
}
