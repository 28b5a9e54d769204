//! Property tests for the capacity engine.

use benchload_core::interval::{clamp_overlap, overlaps, working_days_in_window};
use benchload_core::{
    calculate_aggregate_availability, calculate_period_availability, check_engagement_capacity,
    AvailabilityBucket, CapacityViolation, Engagement, EngagementDraft, MemberCapacityProfile,
    TimeOffEntry, TimeOffKind,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn arb_engagement() -> impl Strategy<Value = Engagement> {
    (
        0u32..1000,
        1u32..=400,
        0i64..365,
        proptest::option::of(1i64..200),
        any::<bool>(),
    )
        .prop_map(|(id, quarter_hours, offset, length, active)| {
            let start = base() + Duration::days(offset);
            let mut e = Engagement::new(format!("e{id}"), "p", f64::from(quarter_hours) / 4.0, start);
            if let Some(len) = length {
                e = e.ending(start + Duration::days(len));
            }
            if !active {
                e = e.inactive();
            }
            e
        })
}

fn arb_time_off() -> impl Strategy<Value = TimeOffEntry> {
    (0i64..365, 0i64..30).prop_map(|(offset, len)| {
        let start = base() + Duration::days(offset);
        TimeOffEntry::new("t", TimeOffKind::Vacation, start, start + Duration::days(len)).approved()
    })
}

fn arb_profile() -> impl Strategy<Value = MemberCapacityProfile> {
    (
        0u32..=60,
        proptest::collection::vec(arb_engagement(), 0..8),
        proptest::collection::vec(arb_time_off(), 0..4),
    )
        .prop_map(|(hours, engagements, time_off)| {
            MemberCapacityProfile::new(f64::from(hours))
                .with_engagements(engagements)
                .with_time_off(time_off)
        })
}

proptest! {
    #[test]
    fn engaged_hours_is_sum_of_active(profile in arb_profile()) {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let result = calculate_aggregate_availability(&profile, now).unwrap();
        let expected: f64 = profile.engagements.iter().filter(|e| e.is_active).map(|e| e.hours_per_week).sum();
        prop_assert_eq!(result.engaged_hours, expected);
        prop_assert!(result.available_hours >= 0.0);
        prop_assert_eq!(result.available_hours, (result.capacity - result.engaged_hours).max(0.0));
        prop_assert_eq!(result.overallocated, result.engaged_hours > result.capacity);
    }

    #[test]
    fn calculations_are_idempotent(profile in arb_profile(), offset in 0i64..365, len in 0i64..60) {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let start = base() + Duration::days(offset);
        let end = start + Duration::days(len);
        prop_assert_eq!(
            calculate_aggregate_availability(&profile, now).unwrap(),
            calculate_aggregate_availability(&profile, now).unwrap()
        );
        prop_assert_eq!(
            calculate_period_availability(&profile, start, end).unwrap(),
            calculate_period_availability(&profile, start, end).unwrap()
        );
    }

    #[test]
    fn period_capacity_stays_within_bounds(profile in arb_profile(), offset in 0i64..365, len in 0i64..90) {
        let start = base() + Duration::days(offset);
        let end = start + Duration::days(len);
        let result = calculate_period_availability(&profile, start, end).unwrap();
        prop_assert!(result.effective_capacity >= 0.0);
        prop_assert!(result.effective_capacity <= result.capacity);
        prop_assert!(result.available_hours >= 0.0);
        prop_assert_eq!(result.overallocated, result.engaged_hours > result.effective_capacity);
    }

    #[test]
    fn open_ended_engagement_always_in_period(start_offset in 0i64..365, far in 0i64..20_000) {
        let start = base() + Duration::days(start_offset);
        let profile = MemberCapacityProfile::new(40.0)
            .with_engagements(vec![Engagement::new("e", "p", 6.0, start)]);
        let window_end = start + Duration::days(far);
        let window_start = window_end - Duration::days(3);
        let result = calculate_period_availability(&profile, window_start, window_end).unwrap();
        prop_assert_eq!(result.engaged_hours, 6.0);
    }

    #[test]
    fn validator_is_empty_iff_rules_pass(
        profile in arb_profile(),
        quarter_hours in -40i32..=300,
        start_offset in proptest::option::of(0i64..60),
        end_offset in proptest::option::of(0i64..60),
    ) {
        let hours = f64::from(quarter_hours) / 4.0;
        let draft = EngagementDraft::new(hours).with_dates(
            start_offset.map(|o| base() + Duration::days(o)),
            end_offset.map(|o| base() + Duration::days(o)),
        );
        let violations = check_engagement_capacity(&profile, &draft, None).unwrap();

        let active: f64 = profile.engagements.iter().filter(|e| e.is_active).map(|e| e.hours_per_week).sum();
        let working = profile.working_hours_per_week;
        let dates_ok = match (draft.start_date, draft.end_date) {
            (Some(s), Some(e)) => e > s,
            _ => true,
        };

        prop_assert_eq!(violations.contains(&CapacityViolation::NonPositiveHours), hours <= 0.0);
        prop_assert_eq!(violations.contains(&CapacityViolation::ExceedsWorkingHours), hours > working);
        prop_assert_eq!(violations.contains(&CapacityViolation::ExceedsRemainingCapacity), active + hours > working);
        prop_assert_eq!(violations.contains(&CapacityViolation::EndNotAfterStart), !dates_ok);
        prop_assert_eq!(
            violations.is_empty(),
            hours > 0.0 && hours <= working && active + hours <= working && dates_ok
        );
    }

    #[test]
    fn buckets_are_monotonic(a in 0.0f64..250.0, b in 0.0f64..250.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |bucket: AvailabilityBucket| match bucket {
            AvailabilityBucket::Low => 0,
            AvailabilityBucket::Moderate => 1,
            AvailabilityBucket::Good => 2,
            AvailabilityBucket::High => 3,
            AvailabilityBucket::Over => 4,
        };
        prop_assert!(rank(AvailabilityBucket::from_utilization(lo)) <= rank(AvailabilityBucket::from_utilization(hi)));
    }

    #[test]
    fn working_days_never_exceed_calendar_days(offset in 0i64..3650, len in 0i64..400) {
        let start = base() + Duration::days(offset);
        let end = start + Duration::days(len);
        let days = working_days_in_window(start, end);
        prop_assert!(days >= 0);
        prop_assert!(days <= len + 1);
        // Every full week contributes exactly five
        prop_assert!(days >= ((len + 1) / 7) * 5);
    }

    #[test]
    fn clamp_agrees_with_overlap(a in 0i64..100, a_len in proptest::option::of(0i64..50), w in 0i64..100, w_len in 0i64..50) {
        let start = base() + Duration::days(a);
        let end = a_len.map(|l| start + Duration::days(l));
        let ws = base() + Duration::days(w);
        let we = ws + Duration::days(w_len);
        let clamped = clamp_overlap(start, end, ws, we);
        prop_assert_eq!(clamped.is_some(), overlaps(start, end, ws, Some(we)));
        if let Some((cs, ce)) = clamped {
            prop_assert!(cs >= ws && ce <= we && cs <= ce);
        }
    }
}
