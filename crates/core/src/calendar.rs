//! Ramadhan day numbering and the journal edit window.
//!
//! "Today" is always passed in by the caller (screens use the local
//! wall-clock date) so these stay pure functions.

use chrono::NaiveDate;

/// Day number of `viewed` within Ramadhan for a given start date.
///
/// Both dates are plain calendar days (already midnight-normalized), so the
/// difference is a whole number of days. The start date itself is day 1; the
/// day before it is day 0.
pub fn ramadhan_day_number(start: NaiveDate, viewed: NaiveDate) -> i64 {
    (viewed - start).num_days() + 1
}

/// A day's entry may be created or overwritten until the end of that
/// calendar day: today and earlier are editable, future days are not.
pub fn is_editable(entry_date: NaiveDate, today: NaiveDate) -> bool {
    entry_date <= today
}

/// The journal screen can step forward only while the viewed day is still
/// behind today.
pub fn can_navigate_forward(viewed: NaiveDate, today: NaiveDate) -> bool {
    viewed < today
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_date_is_day_one() {
        let start = date(2026, 2, 18);
        assert_eq!(ramadhan_day_number(start, date(2026, 2, 18)), 1);
        assert_eq!(ramadhan_day_number(start, date(2026, 2, 19)), 2);
        assert_eq!(ramadhan_day_number(start, date(2026, 2, 17)), 0);
    }

    #[test]
    fn day_number_spans_month_boundaries() {
        let start = date(2026, 2, 18);
        assert_eq!(ramadhan_day_number(start, date(2026, 3, 1)), 12);
    }

    #[test]
    fn today_and_earlier_are_editable() {
        let today = date(2026, 2, 20);
        assert!(is_editable(today, today));
        assert!(is_editable(date(2026, 2, 19), today));
        assert!(!is_editable(date(2026, 2, 21), today));
    }

    #[test]
    fn forward_navigation_stops_at_today() {
        let today = date(2026, 2, 20);
        assert!(can_navigate_forward(date(2026, 2, 19), today));
        assert!(!can_navigate_forward(today, today));
    }
}
