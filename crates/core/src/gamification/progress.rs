use serde::Serialize;

use crate::models::{JournalEntry, Student};

/// Aggregate numbers shown on the progress screen.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    /// Fasting-true entries in the supplied history.
    pub total_fasting: u32,
    pub total_points: i64,
    pub streak: u32,
    /// Read from the student snapshot, never recomputed from history.
    pub completion_rate: f64,
    /// Display approximation carried over from the shipped product: the
    /// counter advances with fasting days, not with the calendar. The real
    /// calendar position lives in [`crate::calendar::ramadhan_day_number`].
    pub current_day: u32,
}

impl ProgressStats {
    pub fn from_history(history: &[JournalEntry], student: &Student) -> Self {
        let total_fasting = history.iter().filter(|e| e.fasting.is_fasting).count() as u32;
        ProgressStats {
            total_fasting,
            total_points: student.points,
            streak: student.streak,
            completion_rate: student.journal_completion,
            current_day: total_fasting + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Student {
        serde_json::from_str(
            r#"{"id":"1","name":"Ahmad","nis":"2024019","class":"9-A","gender":"male",
                "points":1250,"streak":7,"journalCompletion":42.0}"#,
        )
        .unwrap()
    }

    #[test]
    fn counts_fasting_entries_and_passes_snapshot_through() {
        let mut history = vec![JournalEntry::default(); 6];
        for e in history.iter_mut().take(4) {
            e.fasting.is_fasting = true;
        }

        let stats = ProgressStats::from_history(&history, &student());
        assert_eq!(stats.total_fasting, 4);
        assert_eq!(stats.current_day, 5);
        assert_eq!(stats.total_points, 1250);
        assert_eq!(stats.streak, 7);
        assert_eq!(stats.completion_rate, 42.0);
    }

    #[test]
    fn empty_history_yields_day_one() {
        let stats = ProgressStats::from_history(&[], &student());
        assert_eq!(stats.total_fasting, 0);
        assert_eq!(stats.current_day, 1);
    }
}
