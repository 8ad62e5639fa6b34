pub mod badge;
pub mod goal;
pub mod journal;
pub mod student;

pub use badge::Badge;
pub use goal::{Goal, GoalError, GoalType};
pub use journal::{
    Fasting, IbadahSunnah, IbadahWajib, JournalEntry, JournalValidationError, PrayerStatus,
    Prayers, QURAN_TOTAL_PAGES,
};
pub use student::{
    default_start_ramadhan, Gender, Role, Student, StudentStats, TeacherStats,
    DEFAULT_START_RAMADHAN,
};
