use async_trait::async_trait;
use chrono::NaiveDate;

use mutabaah_core::models::{Goal, JournalEntry, Student, TeacherStats};

use crate::errors::Result;

/// The backend operations every screen talks to.
///
/// Implemented by [`SheetsClient`](crate::SheetsClient) against the live
/// spreadsheet web app and by [`MockBackend`](crate::MockBackend) for
/// offline/demo use, so screens depend only on this seam.
#[async_trait]
pub trait JournalApi: Send + Sync {
    /// Resolve a NIS to a student. Unknown or rejected credentials are
    /// `Ok(None)`, not an error.
    async fn login(&self, nis: &str) -> Result<Option<Student>>;

    /// The goal catalog. Rejections degrade to an empty list.
    async fn get_goals(&self) -> Result<Vec<Goal>>;

    /// The entry for one calendar day, if any was submitted.
    async fn get_journal(&self, date: NaiveDate) -> Result<Option<JournalEntry>>;

    /// Create or overwrite the entry for the entry's day. Rejections are
    /// surfaced: the student must see that the submission did not stick.
    async fn submit_journal(&self, entry: &JournalEntry) -> Result<()>;

    /// Push an edited profile/preferences snapshot. Write semantics as for
    /// [`submit_journal`](Self::submit_journal).
    async fn update_profile(&self, student: &Student) -> Result<()>;

    /// A student's journal history, most recent days included first or last
    /// as the backend pleases. Rejections degrade to an empty list.
    async fn get_history(&self, student_id: &str) -> Result<Vec<JournalEntry>>;

    /// Monitoring aggregates for the teacher dashboard. Rejections degrade
    /// to zeroed stats.
    async fn get_teacher_stats(&self) -> Result<TeacherStats>;

    /// All students ordered by points, highest first. Rejections degrade to
    /// an empty list.
    async fn get_leaderboard(&self) -> Result<Vec<Student>>;
}
