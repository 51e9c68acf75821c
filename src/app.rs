// src/app.rs

use crate::core::assistant;
use crate::core::directory::{DoctorFilter, SortBy, filter_doctors};
use crate::core::knowledge_base::{
    self, DISTANCE_CHOICES_KM, DOCTORS, QUICK_QUESTIONS, SPECIALIZATIONS,
};
use crate::core::models::{Doctor, Message, MessageKind, NotificationPrefs, Profile, ScanResult, Sender};
use crate::core::scanner;
use crate::core::timer::{self, TaskHandle};
use crate::logging;
use chrono::Local;
use ratatui::widgets::ListState;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub const SPINNER_CHARS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// --- Screens ---

/// The application's route table. One variant per page of the original
/// navigation shell, plus the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Scan,
    Chatbot,
    Doctors,
    Profile,
    NotFound,
}

impl Screen {
    /// Resolves a deep-link path. Unknown paths land on the catch-all
    /// screen, never on an error.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Screen::Login,
            "/scan" => Screen::Scan,
            "/chatbot" => Screen::Chatbot,
            "/doctors" => Screen::Doctors,
            "/profile" => Screen::Profile,
            _ => Screen::NotFound,
        }
    }
}

// --- Deferred Events ---

/// Everything spawned tasks can report back to the main loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Outcome of the native file dialog. `None` means the user cancelled.
    ImagePicked(Option<PathBuf>),
    ScanProgress(u8),
    ScanFinished,
    AssistantReply(&'static str),
    VoiceTranscript(&'static str),
}

// --- Login ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub show_password: bool,
}

impl LoginState {
    /// Both fields non-empty. There is no credential check beyond this;
    /// submitting with a blank field silently does nothing.
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

// --- Scan ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
    Finished,
}

/// Where the "image" came from. The camera variant records only the canned
/// placeholder name; neither variant is ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    File(PathBuf),
    Camera,
}

impl UploadSource {
    pub fn label(&self) -> String {
        match self {
            UploadSource::File(path) => path.display().to_string(),
            UploadSource::Camera => knowledge_base::CAMERA_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub enum ExportStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct ScanState {
    pub phase: ScanPhase,
    pub source: Option<UploadSource>,
    pub progress: u8,
    pub result: Option<&'static ScanResult>,
    pub export_status: ExportStatus,
    task: Option<TaskHandle>,
}

// --- Chat ---

pub struct ChatState {
    pub messages: Vec<Message>,
    pub input: String,
    /// A reply timer is running; the UI shows the thinking row.
    pub waiting: bool,
    /// The simulated voice capture is running.
    pub listening: bool,
    /// Index into `QUICK_QUESTIONS` last cycled into the input line.
    pub quick_question: Option<usize>,
    pub scroll: u16,
    next_id: u64,
    pending: Vec<TaskHandle>,
}

impl Default for ChatState {
    fn default() -> Self {
        let mut state = Self {
            messages: Vec::new(),
            input: String::new(),
            waiting: false,
            listening: false,
            quick_question: None,
            scroll: 0,
            next_id: 1,
            pending: Vec::new(),
        };
        state.push_message(Sender::Assistant, knowledge_base::GREETING.to_string(), MessageKind::Text);
        state
    }
}

impl ChatState {
    pub fn push_message(&mut self, sender: Sender, content: String, kind: MessageKind) {
        self.messages.push(Message {
            id: self.next_id,
            content,
            sender,
            timestamp: Local::now(),
            kind,
        });
        self.next_id += 1;
    }

    /// Cycles the suggested prompts into the input line, wrapping at both
    /// ends.
    pub fn cycle_quick_question(&mut self, forward: bool) {
        let len = QUICK_QUESTIONS.len();
        let next = match (self.quick_question, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.quick_question = Some(next);
        self.input = QUICK_QUESTIONS[next].to_string();
    }
}

// --- Doctors ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoctorsFocus {
    #[default]
    Search,
    Specialization,
    Distance,
    AvailableOnly,
    Sort,
    Results,
}

impl DoctorsFocus {
    pub fn next(self) -> Self {
        match self {
            DoctorsFocus::Search => DoctorsFocus::Specialization,
            DoctorsFocus::Specialization => DoctorsFocus::Distance,
            DoctorsFocus::Distance => DoctorsFocus::AvailableOnly,
            DoctorsFocus::AvailableOnly => DoctorsFocus::Sort,
            DoctorsFocus::Sort => DoctorsFocus::Results,
            DoctorsFocus::Results => DoctorsFocus::Search,
        }
    }
}

pub struct DoctorsState {
    pub query: String,
    /// 0 selects "All Specializations", otherwise 1-based into
    /// `SPECIALIZATIONS`.
    pub spec_index: usize,
    pub dist_index: usize,
    pub available_only: bool,
    pub sort_by: SortBy,
    pub focus: DoctorsFocus,
    pub list_state: ListState,
}

impl Default for DoctorsState {
    fn default() -> Self {
        Self {
            query: String::new(),
            spec_index: 0,
            dist_index: 1, // 10 km
            available_only: false,
            sort_by: SortBy::Distance,
            focus: DoctorsFocus::default(),
            list_state: ListState::default(),
        }
    }
}

impl DoctorsState {
    pub fn filter(&self) -> DoctorFilter {
        DoctorFilter {
            query: self.query.clone(),
            specialization: self
                .spec_index
                .checked_sub(1)
                .and_then(|i| SPECIALIZATIONS.get(i).copied()),
            max_distance_km: DISTANCE_CHOICES_KM.get(self.dist_index).copied().unwrap_or(10),
            available_only: self.available_only,
        }
    }

    pub fn results(&self) -> Vec<&'static Doctor> {
        filter_doctors(DOCTORS, &self.filter())
    }

    pub fn specialization_label(&self) -> &'static str {
        self.spec_index
            .checked_sub(1)
            .and_then(|i| SPECIALIZATIONS.get(i).copied())
            .unwrap_or("All Specializations")
    }

    pub fn max_distance_km(&self) -> u8 {
        DISTANCE_CHOICES_KM.get(self.dist_index).copied().unwrap_or(10)
    }

    pub fn cycle_specialization(&mut self, forward: bool) {
        let choices = SPECIALIZATIONS.len() + 1;
        self.spec_index = if forward {
            (self.spec_index + 1) % choices
        } else {
            (self.spec_index + choices - 1) % choices
        };
        self.clamp_selection();
    }

    pub fn cycle_distance(&mut self, forward: bool) {
        let choices = DISTANCE_CHOICES_KM.len();
        self.dist_index = if forward {
            (self.dist_index + 1) % choices
        } else {
            (self.dist_index + choices - 1) % choices
        };
        self.clamp_selection();
    }

    pub fn toggle_available_only(&mut self) {
        self.available_only = !self.available_only;
        self.clamp_selection();
    }

    pub fn query_push(&mut self, c: char) {
        self.query.push(c);
        self.clamp_selection();
    }

    pub fn query_pop(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    pub fn scroll_results(&mut self, down: bool) {
        let count = self.results().len();
        if count == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if down {
            (current + 1).min(count - 1)
        } else {
            current.saturating_sub(1)
        };
        self.list_state.select(Some(next));
    }

    /// Keeps the highlighted row inside the (possibly shrunken) result set
    /// after a filter change.
    fn clamp_selection(&mut self) {
        let count = self.results().len();
        match self.list_state.selected() {
            Some(i) if i >= count => self.list_state.select(count.checked_sub(1)),
            _ => {}
        }
    }
}

// --- Profile ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    Name,
    DateOfBirth,
    Email,
    Phone,
}

impl ProfileField {
    pub fn next(self) -> Self {
        match self {
            ProfileField::Name => ProfileField::DateOfBirth,
            ProfileField::DateOfBirth => ProfileField::Email,
            ProfileField::Email => ProfileField::Phone,
            ProfileField::Phone => ProfileField::Name,
        }
    }
}

pub struct ProfileState {
    pub profile: Profile,
    /// Editable copy while edit mode is active. Saving replaces `profile`;
    /// cancelling drops it.
    pub draft: Option<Profile>,
    pub focus: ProfileField,
    pub prefs: NotificationPrefs,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile: knowledge_base::seed_profile(),
            draft: None,
            focus: ProfileField::default(),
            prefs: NotificationPrefs::default(),
        }
    }
}

impl ProfileState {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn start_edit(&mut self) {
        self.draft = Some(self.profile.clone());
        self.focus = ProfileField::Name;
    }

    pub fn save_edit(&mut self) {
        if let Some(draft) = self.draft.take() {
            self.profile = draft;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut String> {
        let focus = self.focus;
        self.draft.as_mut().map(|draft| match focus {
            ProfileField::Name => &mut draft.name,
            ProfileField::DateOfBirth => &mut draft.date_of_birth,
            ProfileField::Email => &mut draft.email,
            ProfileField::Phone => &mut draft.phone,
        })
    }

    pub fn toggle_pref(&mut self, slot: u8) {
        match slot {
            1 => self.prefs.scan_reminders = !self.prefs.scan_reminders,
            2 => self.prefs.health_tips = !self.prefs.health_tips,
            3 => self.prefs.appointment_alerts = !self.prefs.appointment_alerts,
            4 => self.prefs.newsletter = !self.prefs.newsletter,
            _ => {}
        }
    }
}

// --- Application ---

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub spinner_frame: usize,
    pub login: LoginState,
    pub scan: ScanState,
    pub chat: ChatState,
    pub doctors: DoctorsState,
    pub profile: ProfileState,
}

impl App {
    pub fn new(start: Screen) -> Self {
        Self {
            should_quit: false,
            screen: start,
            spinner_frame: 0,
            login: LoginState::default(),
            scan: ScanState::default(),
            chat: ChatState::default(),
            doctors: DoctorsState::default(),
            profile: ProfileState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
    }

    /// Switches screens. The screen being left has its pending timers
    /// cancelled and its state reset; every view starts fresh.
    pub fn navigate(&mut self, to: Screen) {
        if to == self.screen {
            return;
        }
        self.teardown_current();
        info!(from = ?self.screen, to = ?to, "navigating");
        self.screen = to;
    }

    fn teardown_current(&mut self) {
        match self.screen {
            Screen::Login => self.login = LoginState::default(),
            Screen::Scan => {
                if let Some(task) = self.scan.task.take() {
                    task.cancel();
                }
                self.scan = ScanState::default();
            }
            Screen::Chatbot => {
                for task in self.chat.pending.drain(..) {
                    task.cancel();
                }
                self.chat = ChatState::default();
            }
            Screen::Doctors => self.doctors = DoctorsState::default(),
            Screen::Profile => self.profile = ProfileState::default(),
            Screen::NotFound => {}
        }
    }

    // --- Scan flow ---

    /// Starts the simulated analysis: a spawned task walks the progress
    /// steps and reports each one back, then signals completion.
    pub fn start_scan(&mut self, source: UploadSource, tx: &mpsc::Sender<AppEvent>) {
        if let Some(task) = self.scan.task.take() {
            task.cancel();
        }
        info!(source = %source.label(), "starting scan simulation");
        self.scan.phase = ScanPhase::Scanning;
        self.scan.source = Some(source);
        self.scan.progress = 0;
        self.scan.result = None;
        self.scan.export_status = ExportStatus::Idle;

        let tx = tx.clone();
        let handle = tokio::spawn(async move {
            for pct in scanner::progress_steps() {
                tokio::time::sleep(scanner::PROGRESS_INTERVAL).await;
                if tx.send(AppEvent::ScanProgress(pct)).await.is_err() {
                    return;
                }
            }
            let _ = tx.send(AppEvent::ScanFinished).await;
        });
        self.scan.task = Some(TaskHandle::from(handle));
    }

    pub fn reset_scan(&mut self) {
        if let Some(task) = self.scan.task.take() {
            task.cancel();
        }
        self.scan = ScanState::default();
    }

    /// Writes the completed result to the data directory. Only reachable
    /// from the Finished phase.
    pub fn export_scan(&mut self) {
        let Some(result) = self.scan.result else { return };
        match scanner::export_result(result, &logging::get_data_dir()) {
            Ok(path) => {
                info!(path = %path.display(), "scan report exported");
                self.scan.export_status = ExportStatus::Success(path.display().to_string());
            }
            Err(err) => {
                warn!(error = %err, "scan report export failed");
                self.scan.export_status = ExportStatus::Error(err.to_string());
            }
        }
    }

    // --- Chat flow ---

    /// Appends the typed message and schedules its canned reply. Blank
    /// input is ignored without feedback.
    pub fn send_chat_message(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let content = self.chat.input.trim().to_string();
        if content.is_empty() {
            return;
        }
        let reply = assistant::reply_for(&content);
        debug!(chars = content.len(), "chat message sent");
        self.chat.push_message(Sender::User, content, MessageKind::Text);
        self.chat.input.clear();
        self.chat.quick_question = None;
        self.chat.waiting = true;
        self.chat.pending.push(timer::schedule(
            assistant::REPLY_DELAY,
            tx,
            AppEvent::AssistantReply(reply),
        ));
    }

    /// Simulates attaching an eye image: the canned caption goes in as a
    /// user message and the fixed "cannot diagnose from images" answer is
    /// scheduled.
    pub fn attach_chat_image(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.chat.push_message(
            Sender::User,
            knowledge_base::IMAGE_UPLOAD_CAPTION.to_string(),
            MessageKind::Image,
        );
        self.chat.pending.push(timer::schedule(
            assistant::IMAGE_REPLY_DELAY,
            tx,
            AppEvent::AssistantReply(knowledge_base::IMAGE_UPLOAD_REPLY),
        ));
    }

    /// Simulates voice input: after the capture delay the fixed transcript
    /// lands in the input line.
    pub fn start_voice_capture(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if self.chat.listening {
            return;
        }
        self.chat.listening = true;
        self.chat.pending.push(timer::schedule(
            assistant::VOICE_CAPTURE_DELAY,
            tx,
            AppEvent::VoiceTranscript(knowledge_base::VOICE_TRANSCRIPT),
        ));
    }

    // --- Deferred event application ---

    /// Applies a task-reported event. Events addressed to a screen that is
    /// no longer current are dropped; their state was already reset.
    pub fn apply(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) {
        match event {
            AppEvent::ImagePicked(Some(path)) if self.screen == Screen::Scan => {
                self.start_scan(UploadSource::File(path), tx);
            }
            // Dialog cancelled: nothing happens, no feedback.
            AppEvent::ImagePicked(None) => {}
            AppEvent::ScanProgress(pct)
                if self.screen == Screen::Scan && self.scan.phase == ScanPhase::Scanning =>
            {
                self.scan.progress = pct;
            }
            AppEvent::ScanFinished
                if self.screen == Screen::Scan && self.scan.phase == ScanPhase::Scanning =>
            {
                self.scan.phase = ScanPhase::Finished;
                self.scan.progress = 100;
                self.scan.result = Some(scanner::analysis_result());
                self.scan.task = None;
                info!("scan simulation finished");
            }
            AppEvent::AssistantReply(text) if self.screen == Screen::Chatbot => {
                self.chat.waiting = false;
                self.chat.push_message(Sender::Assistant, text.to_string(), MessageKind::Text);
            }
            AppEvent::VoiceTranscript(text) if self.screen == Screen::Chatbot => {
                self.chat.listening = false;
                self.chat.input = text.to_string();
                self.chat.quick_question = None;
            }
            other => debug!(event = ?other, "dropping event for inactive screen"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Severity;

    #[test]
    fn routes_resolve_like_the_original_router() {
        assert_eq!(Screen::from_path("/"), Screen::Login);
        assert_eq!(Screen::from_path("/scan"), Screen::Scan);
        assert_eq!(Screen::from_path("/chatbot"), Screen::Chatbot);
        assert_eq!(Screen::from_path("/doctors"), Screen::Doctors);
        assert_eq!(Screen::from_path("/profile"), Screen::Profile);
    }

    #[test]
    fn unknown_paths_hit_the_catch_all() {
        assert_eq!(Screen::from_path("/settings"), Screen::NotFound);
        assert_eq!(Screen::from_path(""), Screen::NotFound);
        assert_eq!(Screen::from_path("/scan/"), Screen::NotFound);
    }

    #[test]
    fn login_submit_requires_both_fields() {
        let mut login = LoginState::default();
        assert!(!login.can_submit());
        login.email.push_str("a@b.c");
        assert!(!login.can_submit());
        login.password.push('x');
        assert!(login.can_submit());
    }

    #[test]
    fn chat_seeds_the_greeting() {
        let chat = ChatState::default();
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].sender, Sender::Assistant);
        assert_eq!(chat.messages[0].content, knowledge_base::GREETING);
    }

    #[test]
    fn quick_questions_wrap_both_ways() {
        let mut chat = ChatState::default();
        chat.cycle_quick_question(false);
        assert_eq!(chat.quick_question, Some(QUICK_QUESTIONS.len() - 1));
        chat.cycle_quick_question(true);
        assert_eq!(chat.quick_question, Some(0));
        assert_eq!(chat.input, QUICK_QUESTIONS[0]);
    }

    #[tokio::test]
    async fn chat_messages_get_increasing_ids() {
        let (tx, _rx) = mpsc::channel(4);
        let mut app = App::new(Screen::Chatbot);
        app.chat.input = "first".to_string();
        app.send_chat_message(&tx);
        app.chat.input = "second".to_string();
        app.send_chat_message(&tx);
        let ids: Vec<u64> = app.chat.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn blank_chat_input_is_silently_ignored() {
        let (tx, _rx) = mpsc::channel(4);
        let mut app = App::new(Screen::Chatbot);
        app.chat.input = "   ".to_string();
        app.send_chat_message(&tx);
        assert_eq!(app.chat.messages.len(), 1);
        assert!(!app.chat.waiting);
    }

    #[tokio::test]
    async fn navigation_resets_the_departed_screen() {
        let (tx, _rx) = mpsc::channel(4);
        let mut app = App::new(Screen::Chatbot);
        app.chat.input = "cataract".to_string();
        app.send_chat_message(&tx);
        assert_eq!(app.chat.messages.len(), 2);

        app.navigate(Screen::Doctors);
        app.navigate(Screen::Chatbot);
        assert_eq!(app.chat.messages.len(), 1);
        assert!(!app.chat.waiting);
    }

    #[tokio::test]
    async fn stale_events_are_dropped() {
        let (tx, _rx) = mpsc::channel(4);
        let mut app = App::new(Screen::Doctors);
        app.apply(AppEvent::AssistantReply("late"), &tx);
        assert_eq!(app.chat.messages.len(), 1);
        app.apply(AppEvent::ScanProgress(50), &tx);
        assert_eq!(app.scan.progress, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn scan_always_terminates_with_the_mock_result() {
        let (tx, mut rx) = mpsc::channel(64);
        let mut app = App::new(Screen::Scan);
        app.start_scan(UploadSource::Camera, &tx);
        assert_eq!(app.scan.phase, ScanPhase::Scanning);

        loop {
            let event = rx.recv().await.expect("scan task died");
            let finished = matches!(event, AppEvent::ScanFinished);
            app.apply(event, &tx);
            if finished {
                break;
            }
        }

        assert_eq!(app.scan.phase, ScanPhase::Finished);
        assert_eq!(app.scan.progress, 100);
        let result = app.scan.result.expect("no result revealed");
        assert_eq!(result.disease, "Diabetic Retinopathy");
        assert_eq!(result.severity, Severity::Moderate);
    }

    #[test]
    fn doctors_filter_tracks_the_control_indices() {
        let mut doctors = DoctorsState::default();
        assert_eq!(doctors.filter().max_distance_km, 10);
        assert_eq!(doctors.filter().specialization, None);

        doctors.cycle_specialization(true);
        assert_eq!(doctors.filter().specialization, Some("Retinal Diseases"));
        doctors.cycle_specialization(false);
        assert_eq!(doctors.filter().specialization, None);

        doctors.cycle_distance(false);
        assert_eq!(doctors.filter().max_distance_km, 5);
    }

    #[test]
    fn profile_edit_saves_or_discards_the_draft() {
        let mut state = ProfileState::default();
        state.start_edit();
        if let Some(field) = state.focused_field_mut() {
            field.push('!');
        }
        state.cancel_edit();
        assert_eq!(state.profile.name, "John Smith");

        state.start_edit();
        if let Some(field) = state.focused_field_mut() {
            field.clear();
            field.push_str("Jane Doe");
        }
        state.save_edit();
        assert_eq!(state.profile.name, "Jane Doe");
        assert!(!state.is_editing());
    }
}
