//! Duration calculation for inclusive calendar date ranges.

use chrono::NaiveDate;

/// The only duration values a vacation period may have, in days.
///
/// Membership here is independent of quota state: a 20-day request is
/// rejected even for an employee with 30 unused days.
pub const LEGAL_DURATIONS: [i64; 4] = [5, 10, 15, 30];

/// Computes the inclusive day count of a calendar date range.
///
/// Both endpoints count, so a period starting and ending on the same date
/// has duration 1. Callers must ensure `start_date <= end_date` before
/// calling; [`VacationPeriod::new`](crate::models::VacationPeriod::new)
/// enforces that precondition for the rest of the crate. `NaiveDate` carries
/// no time-of-day component, so there is no timezone or truncation concern.
///
/// # Examples
///
/// ```
/// use vacation_engine::validation::duration_in_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
/// assert_eq!(duration_in_days(start, end), 5);
/// assert_eq!(duration_in_days(start, start), 1);
/// ```
pub fn duration_in_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days() + 1
}

/// Returns true if `duration` is one of the legal vacation durations.
///
/// # Examples
///
/// ```
/// use vacation_engine::validation::is_legal_duration;
///
/// assert!(is_legal_duration(15));
/// assert!(!is_legal_duration(7));
/// ```
pub fn is_legal_duration(duration: i64) -> bool {
    LEGAL_DURATIONS.contains(&duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_has_duration_one() {
        let d = date(2025, 1, 15);
        assert_eq!(duration_in_days(d, d), 1);
    }

    #[test]
    fn test_five_day_range_is_inclusive() {
        assert_eq!(duration_in_days(date(2025, 1, 1), date(2025, 1, 5)), 5);
    }

    #[test]
    fn test_range_across_month_boundary() {
        assert_eq!(duration_in_days(date(2025, 1, 28), date(2025, 2, 6)), 10);
    }

    #[test]
    fn test_range_across_year_boundary() {
        assert_eq!(duration_in_days(date(2025, 12, 27), date(2026, 1, 10)), 15);
    }

    #[test]
    fn test_range_over_leap_day() {
        // 2024-02-28 through 2024-03-03 includes Feb 29.
        assert_eq!(duration_in_days(date(2024, 2, 28), date(2024, 3, 3)), 5);
    }

    #[test]
    fn test_legal_durations_accepted() {
        for d in LEGAL_DURATIONS {
            assert!(is_legal_duration(d), "{} should be legal", d);
        }
    }

    #[test]
    fn test_illegal_durations_rejected() {
        for d in [-5, -1, 0, 1, 4, 6, 7, 14, 16, 20, 29, 31, 60] {
            assert!(!is_legal_duration(d), "{} should be illegal", d);
        }
    }

    proptest! {
        #[test]
        fn prop_duration_matches_day_offset(offset in 0i64..10_000) {
            let start = date(2000, 1, 1);
            let end = start + chrono::Duration::days(offset);
            prop_assert_eq!(duration_in_days(start, end), offset + 1);
        }

        #[test]
        fn prop_only_four_durations_are_legal(d in -100i64..100) {
            prop_assert_eq!(is_legal_duration(d), matches!(d, 5 | 10 | 15 | 30));
        }
    }
}
