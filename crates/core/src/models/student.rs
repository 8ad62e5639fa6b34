use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// App-wide default when a student has not configured their own start date.
pub const DEFAULT_START_RAMADHAN: &str = "2026-02-18";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

/// Cumulative practice snapshot owned by the backend. Used as a fallback
/// when the supplied journal history is sparse.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentStats {
    pub fasting_days: u32,
    pub prayer_percentage: f64,
    pub jamaah_ratio: f64,
    pub current_juz: u32,
}

/// Canonical student record.
///
/// The spreadsheet backend is inconsistent about field casing; the aliases
/// below fold every known variant onto this schema once, at deserialization,
/// so nothing downstream ever sees `nama`/`kelas`/`NIS` spellings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    #[serde(alias = "nama", alias = "Nama")]
    pub name: String,
    #[serde(alias = "NIS")]
    pub nis: String,
    #[serde(rename = "class", alias = "kelas", alias = "Kelas")]
    pub class_name: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub streak: u32,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub journal_completion: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ramadhan_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StudentStats>,
}

impl Student {
    /// Configured start of Ramadhan, falling back to the app default.
    pub fn start_date(&self) -> NaiveDate {
        self.start_ramadhan_date
            .unwrap_or_else(default_start_ramadhan)
    }

    pub fn is_teacher(&self) -> bool {
        self.role == Some(Role::Teacher)
    }
}

pub fn default_start_ramadhan() -> NaiveDate {
    NaiveDate::parse_from_str(DEFAULT_START_RAMADHAN, "%Y-%m-%d")
        .expect("default start date is valid")
}

/// Aggregates shown on the teacher monitoring dashboard. Defaults to
/// zeros/empty so read failures can degrade silently.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherStats {
    pub avg_completion: f64,
    pub total_points: i64,
    pub students: Vec<Student>,
}
