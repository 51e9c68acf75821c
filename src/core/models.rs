// src/core/models.rs

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use strum::Display;

// --- Chat Models ---

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sender {
    User,
    Assistant,
}

/// What a chat message carries. Image messages hold only the canned caption;
/// no pixel data ever leaves the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageKind {
    Text,
    Image,
}

/// A single entry in the session's message list. Messages exist only for the
/// lifetime of the chat view and are never persisted.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    pub kind: MessageKind,
}

// --- Doctor Directory Models ---

/// Booking status shown as a colored badge on each doctor card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
}

/// One entry of the static doctor directory. All records are seed data,
/// so the fields borrow from the binary rather than allocating.
#[derive(Debug, Clone, Serialize)]
pub struct Doctor {
    pub id: u8,
    pub name: &'static str,
    pub clinic: &'static str,
    pub specializations: &'static [&'static str],
    pub rating: f64,
    pub reviews: u32,
    pub distance_km: f64,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub availability: Availability,
    pub next_slot: &'static str,
    pub experience_years: u8,
}

// --- Scan Models ---

/// Severity of a detected condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// The analysis record revealed when a scan completes. There is exactly one
/// of these in the whole application; the uploaded image never influences it.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub disease: &'static str,
    pub severity: Severity,
    pub confidence_pct: u8,
    pub symptoms: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub treatment: &'static [&'static str],
}

/// A past scan shown in the profile's history list.
#[derive(Debug, Clone, Serialize)]
pub struct ScanRecord {
    pub date: &'static str,
    pub result: &'static str,
    pub confidence_pct: u8,
}

impl ScanRecord {
    /// Parses the seed date, falling back to `None` if it is malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }
}

// --- Profile Models ---

/// Editable account details. Local form state only; saving replaces the
/// in-memory copy and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub join_date: NaiveDate,
}

impl Profile {
    /// Initials used for the avatar badge ("John Smith" -> "JS").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// Notification toggles on the profile screen. Purely cosmetic; no delivery
/// mechanism exists behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub scan_reminders: bool,
    pub health_tips: bool,
    pub appointment_alerts: bool,
    pub newsletter: bool,
}

impl Default for NotificationPrefs {
    // Seed values: everything on except the newsletter.
    fn default() -> Self {
        Self {
            scan_reminders: true,
            health_tips: true,
            appointment_alerts: true,
            newsletter: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        let profile = Profile {
            name: "John Smith".to_string(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: String::new(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        assert_eq!(profile.initials(), "JS");
    }

    #[test]
    fn scan_record_date_parses() {
        let record = ScanRecord { date: "2024-01-20", result: "Healthy", confidence_pct: 98 };
        assert_eq!(record.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 20));
        let bad = ScanRecord { date: "not-a-date", result: "Healthy", confidence_pct: 98 };
        assert_eq!(bad.parsed_date(), None);
    }
}
