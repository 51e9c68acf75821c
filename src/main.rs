// src/main.rs

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

mod app;
mod core;
mod logging;
mod ui;

use app::{App, AppEvent, DoctorsFocus, ScanPhase, Screen, UploadSource};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    // Optional deep link: `sio-eyecare /doctors` opens directly on that
    // screen; unknown paths land on the catch-all, just like the router
    // this app reproduces.
    let start = std::env::args()
        .nth(1)
        .map(|path| Screen::from_path(&path))
        .unwrap_or(Screen::Login);

    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new(start);
    let (tx, mut rx) = mpsc::channel(32);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx)?;
        }

        // Deferred work (canned replies, scan steps, the file dialog)
        // reports back here; drain everything that arrived this frame.
        while let Ok(event) = rx.try_recv() {
            app.apply(event, &tx);
        }

        app.on_tick();
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn handle_events(app: &mut App, tx: &mpsc::Sender<AppEvent>) -> std::io::Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            if handle_global_key(app, key) {
                return Ok(());
            }
            match app.screen {
                Screen::Login => handle_login_key(app, key),
                Screen::Scan => handle_scan_key(app, key, tx),
                Screen::Chatbot => handle_chat_key(app, key, tx),
                Screen::Doctors => handle_doctors_key(app, key),
                Screen::Profile => handle_profile_key(app, key),
                Screen::NotFound => handle_not_found_key(app, key),
            }
        }
    }
    Ok(())
}

/// Shortcuts that work on every screen: quit, the navbar function keys, and
/// the floating "new scan" action.
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.quit();
            true
        }
        KeyCode::F(1) => {
            app.navigate(Screen::Scan);
            true
        }
        KeyCode::F(2) => {
            app.navigate(Screen::Chatbot);
            true
        }
        KeyCode::F(3) => {
            app.navigate(Screen::Doctors);
            true
        }
        KeyCode::F(4) => {
            app.navigate(Screen::Profile);
            true
        }
        // The floating scan button. Hidden on the scan screen itself, and
        // the profile editor owns Ctrl+S for saving.
        KeyCode::Char('s')
            if ctrl
                && app.screen != Screen::Scan
                && !(app.screen == Screen::Profile && app.profile.is_editing()) =>
        {
            app.navigate(Screen::Scan);
            true
        }
        _ => false,
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('p') => app.login.show_password = !app.login.show_password,
            // "Continue with Google": straight to the scan screen.
            KeyCode::Char('g') => {
                info!("google sign-in shortcut used");
                app.navigate(Screen::Scan);
            }
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Tab => app.login.toggle_focus(),
        KeyCode::Char(c) => app.login.focused_field_mut().push(c),
        KeyCode::Backspace => {
            app.login.focused_field_mut().pop();
        }
        KeyCode::Enter => {
            // Empty fields: no error message, nothing happens.
            if app.login.can_submit() {
                info!("signed in");
                app.navigate(Screen::Scan);
            }
        }
        KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_scan_key(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
    match (app.scan.phase, key.code) {
        (ScanPhase::Idle | ScanPhase::Finished, KeyCode::Char('u')) => open_image_dialog(tx),
        (ScanPhase::Idle | ScanPhase::Finished, KeyCode::Char('c')) => {
            app.start_scan(UploadSource::Camera, tx);
        }
        (ScanPhase::Finished, KeyCode::Char('n')) => app.reset_scan(),
        (ScanPhase::Finished, KeyCode::Char('e')) => app.export_scan(),
        (ScanPhase::Finished, KeyCode::Char('d')) => app.navigate(Screen::Doctors),
        (_, KeyCode::Esc) => app.navigate(Screen::Login),
        _ => {}
    }
}

/// Opens the native picker on a background task; the selection (or
/// cancellation) comes back through the event channel.
fn open_image_dialog(tx: &mpsc::Sender<AppEvent>) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let picked = rfd::AsyncFileDialog::new()
            .set_title("Select an eye image")
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "webp"])
            .pick_file()
            .await;
        let _ = tx
            .send(AppEvent::ImagePicked(
                picked.map(|file| file.path().to_path_buf()),
            ))
            .await;
    });
}

fn handle_chat_key(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('u') => app.attach_chat_image(tx),
            KeyCode::Char('g') => app.start_voice_capture(tx),
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Enter => app.send_chat_message(tx),
        KeyCode::Char(c) => app.chat.input.push(c),
        KeyCode::Backspace => {
            app.chat.input.pop();
        }
        KeyCode::Up => app.chat.cycle_quick_question(false),
        KeyCode::Down => app.chat.cycle_quick_question(true),
        KeyCode::PageUp => app.chat.scroll = app.chat.scroll.saturating_add(5),
        KeyCode::PageDown => app.chat.scroll = app.chat.scroll.saturating_sub(5),
        KeyCode::Esc => app.navigate(Screen::Login),
        _ => {}
    }
}

fn handle_doctors_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => {
            app.doctors.focus = app.doctors.focus.next();
            return;
        }
        KeyCode::Esc => {
            app.navigate(Screen::Login);
            return;
        }
        _ => {}
    }
    // Remaining keys go to whichever filter control holds focus.
    match app.doctors.focus {
        DoctorsFocus::Search => match key.code {
            KeyCode::Char(c) => app.doctors.query_push(c),
            KeyCode::Backspace => app.doctors.query_pop(),
            _ => {}
        },
        DoctorsFocus::Specialization => match key.code {
            KeyCode::Right => app.doctors.cycle_specialization(true),
            KeyCode::Left => app.doctors.cycle_specialization(false),
            _ => {}
        },
        DoctorsFocus::Distance => match key.code {
            KeyCode::Right => app.doctors.cycle_distance(true),
            KeyCode::Left => app.doctors.cycle_distance(false),
            _ => {}
        },
        DoctorsFocus::AvailableOnly => {
            if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                app.doctors.toggle_available_only();
            }
        }
        DoctorsFocus::Sort => match key.code {
            KeyCode::Right => app.doctors.sort_by = app.doctors.sort_by.next(),
            KeyCode::Left => app.doctors.sort_by = app.doctors.sort_by.prev(),
            _ => {}
        },
        DoctorsFocus::Results => match key.code {
            KeyCode::Down => app.doctors.scroll_results(true),
            KeyCode::Up => app.doctors.scroll_results(false),
            _ => {}
        },
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    if app.profile.is_editing() {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            app.profile.save_edit();
            info!("profile saved");
            return;
        }
        match key.code {
            KeyCode::Esc => app.profile.cancel_edit(),
            KeyCode::Tab => app.profile.focus = app.profile.focus.next(),
            KeyCode::Char(c) => {
                if let Some(field) = app.profile.focused_field_mut() {
                    field.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = app.profile.focused_field_mut() {
                    field.pop();
                }
            }
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Char('e') => app.profile.start_edit(),
        KeyCode::Char(c @ '1'..='4') => app.profile.toggle_pref(c as u8 - b'0'),
        KeyCode::Esc => app.navigate(Screen::Login),
        _ => {}
    }
}

fn handle_not_found_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        app.navigate(Screen::Login);
    }
}
