//! In-memory backend for offline demos and tests.
//!
//! Mirrors the live endpoint's semantics behind the same [`JournalApi`]
//! seam: journal entries are upserted per calendar day, the leaderboard is
//! ordered by points, and the teacher dashboard aggregates the roster.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use mutabaah_core::models::{
    Gender, Goal, GoalType, JournalEntry, Role, Student, StudentStats, TeacherStats,
};

use crate::api::JournalApi;
use crate::errors::Result;

struct MockState {
    students: Vec<Student>,
    goals: Vec<Goal>,
    journals: HashMap<NaiveDate, JournalEntry>,
}

/// Offline stand-in for the spreadsheet backend, seeded with the demo
/// roster and goal catalog.
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    pub fn new() -> Self {
        MockBackend {
            state: Mutex::new(MockState {
                students: seed_students(),
                goals: seed_goals(),
                journals: HashMap::new(),
            }),
        }
    }

    /// Empty backend for tests that want to control every record.
    pub fn empty() -> Self {
        MockBackend {
            state: Mutex::new(MockState {
                students: Vec::new(),
                goals: Vec::new(),
                journals: HashMap::new(),
            }),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JournalApi for MockBackend {
    async fn login(&self, nis: &str) -> Result<Option<Student>> {
        let state = self.state.lock().await;
        Ok(state
            .students
            .iter()
            .find(|s| s.nis.eq_ignore_ascii_case(nis))
            .cloned())
    }

    async fn get_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.state.lock().await.goals.clone())
    }

    async fn get_journal(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        Ok(self.state.lock().await.journals.get(&date).cloned())
    }

    async fn submit_journal(&self, entry: &JournalEntry) -> Result<()> {
        entry.validate()?;
        let day = entry.day_key()?;
        self.state.lock().await.journals.insert(day, entry.clone());
        Ok(())
    }

    async fn update_profile(&self, student: &Student) -> Result<()> {
        let mut state = self.state.lock().await;
        match state.students.iter_mut().find(|s| s.id == student.id) {
            Some(existing) => *existing = student.clone(),
            None => state.students.push(student.clone()),
        }
        Ok(())
    }

    async fn get_history(&self, _student_id: &str) -> Result<Vec<JournalEntry>> {
        let state = self.state.lock().await;
        let mut days: Vec<&NaiveDate> = state.journals.keys().collect();
        days.sort_unstable_by(|a, b| b.cmp(a));
        Ok(days
            .into_iter()
            .filter_map(|d| state.journals.get(d).cloned())
            .collect())
    }

    async fn get_teacher_stats(&self) -> Result<TeacherStats> {
        let state = self.state.lock().await;
        let students: Vec<Student> = state
            .students
            .iter()
            .filter(|s| !s.is_teacher())
            .cloned()
            .collect();
        let total_points: i64 = students.iter().map(|s| s.points).sum();
        let avg_completion = if students.is_empty() {
            0.0
        } else {
            students.iter().map(|s| s.journal_completion).sum::<f64>() / students.len() as f64
        };
        Ok(TeacherStats {
            avg_completion,
            total_points,
            students,
        })
    }

    async fn get_leaderboard(&self) -> Result<Vec<Student>> {
        let state = self.state.lock().await;
        let mut students: Vec<Student> = state
            .students
            .iter()
            .filter(|s| !s.is_teacher())
            .cloned()
            .collect();
        students.sort_by_key(|s| std::cmp::Reverse(s.points));
        Ok(students)
    }
}

fn seed_students() -> Vec<Student> {
    vec![
        student(
            "1",
            "Ahmad Fauzi",
            "2024019",
            "9-A (Unggulan)",
            1250,
            7,
            Gender::Male,
            Some(StudentStats {
                fasting_days: 14,
                prayer_percentage: 98.0,
                jamaah_ratio: 85.0,
                current_juz: 14,
            }),
        ),
        student(
            "2",
            "Siti Aminah",
            "2024022",
            "9-A (Unggulan)",
            1450,
            7,
            Gender::Female,
            Some(StudentStats {
                fasting_days: 14,
                prayer_percentage: 90.0,
                jamaah_ratio: 20.0,
                current_juz: 8,
            }),
        ),
        student(
            "3",
            "Budi Santoso",
            "2024041",
            "9-B",
            980,
            7,
            Gender::Male,
            Some(StudentStats {
                fasting_days: 10,
                prayer_percentage: 60.0,
                jamaah_ratio: 15.0,
                current_juz: 2,
            }),
        ),
        student(
            "4",
            "Lia Permata",
            "2024056",
            "9-A (Unggulan)",
            1320,
            7,
            Gender::Female,
            Some(StudentStats {
                fasting_days: 15,
                prayer_percentage: 100.0,
                jamaah_ratio: 90.0,
                current_juz: 15,
            }),
        ),
        student(
            "5",
            "Rizky Ramadhan",
            "2024088",
            "9-B",
            850,
            7,
            Gender::Male,
            Some(StudentStats {
                fasting_days: 12,
                prayer_percentage: 80.0,
                jamaah_ratio: 40.0,
                current_juz: 5,
            }),
        ),
        teacher_account(),
    ]
}

#[allow(clippy::too_many_arguments)]
fn student(
    id: &str,
    name: &str,
    nis: &str,
    class_name: &str,
    points: i64,
    streak: u32,
    gender: Gender,
    stats: Option<StudentStats>,
) -> Student {
    let avatar = match gender {
        Gender::Male => "male",
        Gender::Female => "female",
    };
    Student {
        id: id.to_string(),
        name: name.to_string(),
        nis: nis.to_string(),
        class_name: class_name.to_string(),
        points,
        streak,
        gender,
        avatar_id: Some(avatar.to_string()),
        avatar_url: format!("/avatars/{}.svg", avatar),
        journal_completion: 0.0,
        start_ramadhan_date: NaiveDate::from_ymd_opt(2026, 2, 18),
        role: Some(Role::Student),
        stats,
    }
}

fn teacher_account() -> Student {
    let mut t = student(
        "teacher",
        "Pak Budi",
        "TEACHER01",
        "Teacher",
        0,
        0,
        Gender::Male,
        None,
    );
    t.role = Some(Role::Teacher);
    t
}

fn seed_goals() -> Vec<Goal> {
    let catalog: [(&str, &str, &str, GoalType, &str, Option<&str>, bool); 14] = [
        ("1", "Shalat 5 Waktu", "Putra Berjamaah di Masjid, Putri Tepat Waktu", GoalType::Mandatory, "mosque", None, true),
        ("2", "Puasa Ramadhan", "Menahan lapar & hawa nafsu", GoalType::Mandatory, "no_meals", None, true),
        ("3", "Tilawah Al-Quran", "Membaca Al-Quran", GoalType::Mandatory, "menu_book", None, true),
        ("4", "Shalat Dhuha", "Minimal 2 rakaat", GoalType::Mandatory, "wb_sunny", Some("orange"), true),
        ("5", "Shalat Tarawih", "Menghidupkan malam Ramadhan", GoalType::Mandatory, "nights_stay", Some("blue"), true),
        ("6", "Shalat Witir", "1 atau 3 rakaat setelah Tarawih", GoalType::Mandatory, "dark_mode", Some("purple"), true),
        ("7", "Zakat Fitrah", "1x dalam bulan Ramadhan", GoalType::Mandatory, "payments", Some("green"), true),
        ("8", "Shalat Jumat", "1x dalam 1 pekan (Putra)", GoalType::Mandatory, "event", Some("teal"), true),
        ("9", "Shalat Rawatib", "Sunnah Qobliyah & Ba'diyah", GoalType::Optional, "prayer_times", Some("zinc"), false),
        ("10", "Iktikaf", "Berdiam diri di masjid (akhir Ramadhan)", GoalType::Optional, "accessibility_new", Some("zinc"), false),
        ("11", "Sedekah", "Infaq atau berbagi takjil", GoalType::Optional, "volunteer_activism", Some("pink"), true),
        ("12", "Membantu Orang Tua", "Menyiapkan sahur/buka", GoalType::Optional, "family_restroom", Some("green"), true),
        ("13", "Ceramah Islami", "Mendengarkan kajian/tausiyah", GoalType::Optional, "campaign", Some("blue"), false),
        ("14", "Shalat Idul Fitri", "Di akhir Ramadhan", GoalType::Optional, "celebration", Some("yellow"), false),
    ];

    catalog
        .into_iter()
        .map(
            |(id, title, description, goal_type, icon, color, is_selected)| Goal {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                goal_type,
                icon: icon.to_string(),
                color: color.map(str::to_string),
                is_selected,
            },
        )
        .collect()
}
