//! Core domain crate for the Ramadhan mutabaah journal.
//!
//! Holds the canonical data model shared with the spreadsheet backend, the
//! derived-statistics and badge engine, the Ramadhan-day/edit-window
//! calendar rules, and the on-device session context. Networking lives in
//! the sibling `mutabaah-sheets-client` crate.

pub mod calendar;
pub mod errors;
pub mod gamification;
pub mod models;
pub mod session;

pub use errors::{Error, Result};
pub use gamification::{evaluate_badges, ProgressStats};
pub use models::{
    Badge, Gender, Goal, GoalError, GoalType, JournalEntry, PrayerStatus, Role, Student,
    StudentStats, TeacherStats,
};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionContext, SessionStore};
