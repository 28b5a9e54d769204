//! Inclusive date-interval helpers.
//!
//! Every interval here is a closed range of calendar days. An absent end date
//! means the interval is still running and extends indefinitely.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Check whether two inclusive intervals share at least one day.
pub fn overlaps(
    a_start: NaiveDate,
    a_end: Option<NaiveDate>,
    b_start: NaiveDate,
    b_end: Option<NaiveDate>,
) -> bool {
    let a_reaches_b = a_end.map_or(true, |end| end >= b_start);
    let b_reaches_a = b_end.map_or(true, |end| end >= a_start);
    a_reaches_b && b_reaches_a
}

/// Check whether `day` falls inside an inclusive interval.
pub fn contains(start: NaiveDate, end: Option<NaiveDate>, day: NaiveDate) -> bool {
    day >= start && end.map_or(true, |end| day <= end)
}

/// Count Monday–Friday days in the inclusive range `[start, end]`.
///
/// Public holidays are not modelled; every weekday counts. Returns 0 when
/// `end` is before `start`.
pub fn working_days_in_window(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        return 0;
    }

    let total_days = (end - start).num_days() + 1;
    let full_weeks = total_days / 7;
    let mut count = full_weeks * 5;

    // Walk the leftover days (at most six)
    let mut day = start + Duration::days(full_weeks * 7);
    while day <= end {
        if is_working_day(day) {
            count += 1;
        }
        day += Duration::days(1);
    }

    count
}

/// Intersect an interval with a window.
///
/// Returns `None` when they are disjoint.
pub fn clamp_overlap(
    start: NaiveDate,
    end: Option<NaiveDate>,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    if !overlaps(start, end, window_start, Some(window_end)) {
        return None;
    }

    let clamped_start = start.max(window_start);
    let clamped_end = end.map_or(window_end, |end| end.min(window_end));
    if clamped_end < clamped_start {
        return None;
    }
    Some((clamped_start, clamped_end))
}

fn is_working_day(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_overlaps_closed_intervals() {
        assert!(overlaps(d(2024, 1, 1), Some(d(2024, 1, 10)), d(2024, 1, 5), Some(d(2024, 1, 20))));
        assert!(!overlaps(d(2024, 1, 1), Some(d(2024, 1, 4)), d(2024, 1, 5), Some(d(2024, 1, 20))));
    }

    #[test]
    fn test_overlaps_touching_endpoints() {
        // Closed ranges: sharing a single day counts
        assert!(overlaps(d(2024, 1, 1), Some(d(2024, 1, 5)), d(2024, 1, 5), Some(d(2024, 1, 9))));
    }

    #[test]
    fn test_overlaps_open_ended() {
        assert!(overlaps(d(2020, 1, 1), None, d(2099, 1, 1), Some(d(2099, 2, 1))));
        assert!(overlaps(d(2024, 3, 1), None, d(2024, 1, 1), None));
        assert!(!overlaps(d(2024, 3, 1), None, d(2024, 1, 1), Some(d(2024, 2, 28))));
    }

    #[test]
    fn test_contains() {
        assert!(contains(d(2024, 1, 1), Some(d(2024, 1, 3)), d(2024, 1, 3)));
        assert!(!contains(d(2024, 1, 1), Some(d(2024, 1, 3)), d(2024, 1, 4)));
        assert!(contains(d(2024, 1, 1), None, d(2030, 1, 1)));
        assert!(!contains(d(2024, 1, 1), None, d(2023, 12, 31)));
    }

    #[test]
    fn test_working_days_single_week() {
        // 2024-01-01 is a Monday
        assert_eq!(working_days_in_window(d(2024, 1, 1), d(2024, 1, 7)), 5);
        assert_eq!(working_days_in_window(d(2024, 1, 1), d(2024, 1, 5)), 5);
        assert_eq!(working_days_in_window(d(2024, 1, 6), d(2024, 1, 7)), 0);
    }

    #[test]
    fn test_working_days_partial_weeks() {
        // Wednesday through the following Tuesday
        assert_eq!(working_days_in_window(d(2024, 1, 3), d(2024, 1, 9)), 5);
        // Friday through Monday
        assert_eq!(working_days_in_window(d(2024, 1, 5), d(2024, 1, 8)), 2);
        // January 2024 has 23 weekdays
        assert_eq!(working_days_in_window(d(2024, 1, 1), d(2024, 1, 31)), 23);
    }

    #[test]
    fn test_working_days_empty_and_single() {
        assert_eq!(working_days_in_window(d(2024, 1, 10), d(2024, 1, 9)), 0);
        assert_eq!(working_days_in_window(d(2024, 1, 10), d(2024, 1, 10)), 1);
        assert_eq!(working_days_in_window(d(2024, 1, 13), d(2024, 1, 13)), 0);
    }

    #[test]
    fn test_clamp_overlap() {
        let window = (d(2024, 1, 10), d(2024, 1, 20));
        assert_eq!(
            clamp_overlap(d(2024, 1, 1), Some(d(2024, 1, 15)), window.0, window.1),
            Some((d(2024, 1, 10), d(2024, 1, 15)))
        );
        assert_eq!(
            clamp_overlap(d(2024, 1, 12), None, window.0, window.1),
            Some((d(2024, 1, 12), d(2024, 1, 20)))
        );
        assert_eq!(
            clamp_overlap(d(2024, 1, 21), Some(d(2024, 1, 25)), window.0, window.1),
            None
        );
    }
}
