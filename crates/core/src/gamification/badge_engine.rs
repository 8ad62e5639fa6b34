//! Badge unlock rules.
//!
//! Each rule is evaluated independently against the full supplied history,
//! with the backend's cumulative [`StudentStats`] snapshot as a fallback for
//! students whose history is sparse. The engine is total: it always returns
//! the full catalog in a stable order and never fails, whatever shape the
//! history is in.

use crate::models::{Badge, JournalEntry, Student};

const FASTING_BADGE_DAYS: usize = 5;
const TADARUS_PAGE_TARGET: u32 = 20;
const TADARUS_BADGE_DAYS: usize = 3;
const SEDEKAH_BADGE_DAYS: usize = 3;
const JAMAAH_BADGE_SLOTS: usize = 15;
const JAMAAH_RATIO_FALLBACK: f64 = 50.0;
const KHATAM_JUZ: u32 = 30;
const TARAWIH_BADGE_NIGHTS: usize = 5;

/// Evaluate the fixed badge catalog against a student's journal history.
pub fn evaluate_badges(history: &[JournalEntry], student: &Student) -> Vec<Badge> {
    let stats = student.stats.clone().unwrap_or_default();

    let fasting_days = history.iter().filter(|e| e.fasting.is_fasting).count();
    let tadarus_days = history
        .iter()
        .filter(|e| e.ibadah_wajib.tilawah_pages >= TADARUS_PAGE_TARGET)
        .count();
    let sedekah_days = history
        .iter()
        .filter(|e| e.ibadah_sunnah.sedekah)
        .count();
    let jamaah_slots: usize = history.iter().map(|e| e.prayers.jamaah_count()).sum();
    let tarawih_nights = history.iter().filter(|e| e.ibadah_wajib.tarawih).count();

    vec![
        badge(
            "1",
            "Ahli Puasa",
            "no_meals",
            "primary",
            fasting_days >= FASTING_BADGE_DAYS
                || stats.fasting_days as usize >= FASTING_BADGE_DAYS,
        ),
        badge(
            "2",
            "Tadarus Starter",
            "menu_book",
            "blue",
            tadarus_days >= TADARUS_BADGE_DAYS,
        ),
        badge(
            "3",
            "Dermawan",
            "volunteer_activism",
            "purple",
            sedekah_days >= SEDEKAH_BADGE_DAYS,
        ),
        badge(
            "4",
            "Pejuang Jamaah",
            "mosque",
            "zinc",
            jamaah_slots >= JAMAAH_BADGE_SLOTS || stats.jamaah_ratio > JAMAAH_RATIO_FALLBACK,
        ),
        badge(
            "5",
            "Khatam Quran",
            "emoji_events",
            "zinc",
            stats.current_juz >= KHATAM_JUZ,
        ),
        badge(
            "6",
            "Qiyamul Lail",
            "nightlight_round",
            "zinc",
            tarawih_nights >= TARAWIH_BADGE_NIGHTS,
        ),
    ]
}

fn badge(id: &str, name: &str, icon: &str, color: &str, is_unlocked: bool) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        is_unlocked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrayerStatus, StudentStats};

    fn student_without_stats() -> Student {
        serde_json::from_str(
            r#"{"id":"1","name":"Ahmad","nis":"2024019","class":"9-A","gender":"male"}"#,
        )
        .unwrap()
    }

    fn student_with_stats(stats: StudentStats) -> Student {
        let mut s = student_without_stats();
        s.stats = Some(stats);
        s
    }

    fn fasting_entry(is_fasting: bool) -> JournalEntry {
        let mut e = JournalEntry::default();
        e.fasting.is_fasting = is_fasting;
        e
    }

    fn find(badges: &[Badge], name: &str) -> Badge {
        badges
            .iter()
            .find(|b| b.name == name)
            .cloned()
            .unwrap_or_else(|| panic!("badge '{}' missing from catalog", name))
    }

    #[test]
    fn catalog_is_fixed_and_ordered() {
        let badges = evaluate_badges(&[], &student_without_stats());
        let names: Vec<&str> = badges.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Ahli Puasa",
                "Tadarus Starter",
                "Dermawan",
                "Pejuang Jamaah",
                "Khatam Quran",
                "Qiyamul Lail"
            ]
        );
    }

    #[test]
    fn ahli_puasa_unlocks_at_five_fasting_days() {
        let student = student_without_stats();

        let four: Vec<JournalEntry> = (0..4).map(|_| fasting_entry(true)).collect();
        assert!(!find(&evaluate_badges(&four, &student), "Ahli Puasa").is_unlocked);

        let five: Vec<JournalEntry> = (0..5).map(|_| fasting_entry(true)).collect();
        assert!(find(&evaluate_badges(&five, &student), "Ahli Puasa").is_unlocked);
    }

    #[test]
    fn ahli_puasa_falls_back_to_snapshot_fasting_days() {
        let student = student_with_stats(StudentStats {
            fasting_days: 5,
            ..Default::default()
        });
        assert!(find(&evaluate_badges(&[], &student), "Ahli Puasa").is_unlocked);
    }

    #[test]
    fn non_fasting_entries_do_not_count() {
        let student = student_without_stats();
        let mixed: Vec<JournalEntry> = (0..10).map(|i| fasting_entry(i % 2 == 0)).collect();
        // 5 fasting out of 10
        assert!(find(&evaluate_badges(&mixed, &student), "Ahli Puasa").is_unlocked);
    }

    #[test]
    fn tadarus_starter_needs_three_twenty_page_days() {
        let student = student_without_stats();
        let mut history = Vec::new();
        for pages in [20, 25, 19] {
            let mut e = JournalEntry::default();
            e.ibadah_wajib.tilawah_pages = pages;
            history.push(e);
        }
        assert!(!find(&evaluate_badges(&history, &student), "Tadarus Starter").is_unlocked);

        let mut e = JournalEntry::default();
        e.ibadah_wajib.tilawah_pages = 30;
        history.push(e);
        assert!(find(&evaluate_badges(&history, &student), "Tadarus Starter").is_unlocked);
    }

    #[test]
    fn dermawan_counts_sedekah_days() {
        let student = student_without_stats();
        let history: Vec<JournalEntry> = (0..3)
            .map(|_| {
                let mut e = JournalEntry::default();
                e.ibadah_sunnah.sedekah = true;
                e
            })
            .collect();
        assert!(find(&evaluate_badges(&history, &student), "Dermawan").is_unlocked);
    }

    #[test]
    fn pejuang_jamaah_sums_slots_across_entries() {
        let student = student_without_stats();
        // 3 entries x 5 jamaah slots = 15
        let history: Vec<JournalEntry> = (0..3)
            .map(|_| {
                let mut e = JournalEntry::default();
                e.prayers.subuh = PrayerStatus::Jamaah;
                e.prayers.dzuhur = PrayerStatus::Jamaah;
                e.prayers.ashar = PrayerStatus::Jamaah;
                e.prayers.maghrib = PrayerStatus::Jamaah;
                e.prayers.isya = PrayerStatus::Jamaah;
                e
            })
            .collect();
        assert!(find(&evaluate_badges(&history, &student), "Pejuang Jamaah").is_unlocked);

        // Munfarid prayers contribute nothing
        let munfarid: Vec<JournalEntry> = (0..3)
            .map(|_| {
                let mut e = JournalEntry::default();
                e.prayers.subuh = PrayerStatus::Munfarid;
                e
            })
            .collect();
        assert!(!find(&evaluate_badges(&munfarid, &student), "Pejuang Jamaah").is_unlocked);
    }

    #[test]
    fn pejuang_jamaah_ratio_fallback_is_strictly_greater() {
        let at_threshold = student_with_stats(StudentStats {
            jamaah_ratio: 50.0,
            ..Default::default()
        });
        assert!(!find(&evaluate_badges(&[], &at_threshold), "Pejuang Jamaah").is_unlocked);

        let above = student_with_stats(StudentStats {
            jamaah_ratio: 50.1,
            ..Default::default()
        });
        assert!(find(&evaluate_badges(&[], &above), "Pejuang Jamaah").is_unlocked);
    }

    #[test]
    fn khatam_quran_depends_only_on_snapshot_juz() {
        let finished = student_with_stats(StudentStats {
            current_juz: 30,
            ..Default::default()
        });
        assert!(find(&evaluate_badges(&[], &finished), "Khatam Quran").is_unlocked);

        // A history full of tilawah does not unlock it without the snapshot
        let mut e = JournalEntry::default();
        e.ibadah_wajib.tilawah_pages = 600;
        let history = vec![e; 30];
        assert!(
            !find(&evaluate_badges(&history, &student_without_stats()), "Khatam Quran")
                .is_unlocked
        );
    }

    #[test]
    fn qiyamul_lail_needs_five_tarawih_nights() {
        let student = student_without_stats();
        let history: Vec<JournalEntry> = (0..5)
            .map(|_| {
                let mut e = JournalEntry::default();
                e.ibadah_wajib.tarawih = true;
                e
            })
            .collect();
        assert!(find(&evaluate_badges(&history, &student), "Qiyamul Lail").is_unlocked);
        assert!(!find(&evaluate_badges(&history[..4], &student), "Qiyamul Lail").is_unlocked);
    }

    #[test]
    fn malformed_entries_evaluate_as_zero_defaults() {
        // tilawahPages and most sub-records missing entirely
        let entry: JournalEntry = serde_json::from_str(
            r#"{"date":"2026-02-20T06:00:00.000Z","ibadahWajib":{"dhuha":true}}"#,
        )
        .unwrap();
        let student = student_without_stats();
        let badges = evaluate_badges(&[entry], &student);
        assert_eq!(badges.len(), 6);
        assert!(badges.iter().all(|b| !b.is_unlocked));
    }
}
