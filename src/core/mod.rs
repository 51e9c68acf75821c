// src/core/mod.rs

/// Data structures shared across the application: chat messages, doctor
/// records, scan results, and the profile form state.
pub mod models;

/// Static seed content: the doctor directory, the assistant's script, the
/// mock scan verdict, and the profile defaults.
pub mod knowledge_base;

/// Doctor-directory filtering.
pub mod directory;

/// Canned-reply selection for the chat assistant.
pub mod assistant;

/// The scan progress simulation and report export.
pub mod scanner;

/// Deferred task scheduling for all timer-driven simulations.
pub mod timer;
