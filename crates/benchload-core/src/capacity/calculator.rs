//! Aggregate and period-scoped availability.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{available_hours, utilization_pct, CapacityFigures};
use crate::error::{Result, ValidationError};
use crate::interval::{clamp_overlap, working_days_in_window};
use crate::member::MemberCapacityProfile;

/// Availability of a member right now, counting every active commitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    /// Baseline weekly hours
    pub capacity: f64,
    /// Sum of hours over active engagements
    pub engaged_hours: f64,
    /// `max(0, capacity - engaged_hours)`
    pub available_hours: f64,
    pub utilization_pct: f64,
    pub overallocated: bool,
    /// An approved time-off entry covers the caller's current date
    pub on_approved_time_off_now: bool,
}

/// Availability inside an inclusive date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAvailability {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    /// Baseline weekly hours
    pub capacity: f64,
    /// Baseline minus the approved time-off share of the window
    pub effective_capacity: f64,
    pub time_off_reduction: f64,
    /// Hours of every engagement overlapping the window
    pub engaged_hours: f64,
    pub available_hours: f64,
    pub utilization_pct: f64,
    pub overallocated: bool,
    /// Monday–Friday days in the window
    pub working_days: i64,
}

impl CapacityFigures for AvailabilityResult {
    fn capacity(&self) -> f64 {
        self.capacity
    }
    fn engaged_hours(&self) -> f64 {
        self.engaged_hours
    }
    fn available_hours(&self) -> f64 {
        self.available_hours
    }
    fn utilization_pct(&self) -> f64 {
        self.utilization_pct
    }
    fn overallocated(&self) -> bool {
        self.overallocated
    }
}

impl CapacityFigures for PeriodAvailability {
    fn capacity(&self) -> f64 {
        self.effective_capacity
    }
    fn engaged_hours(&self) -> f64 {
        self.engaged_hours
    }
    fn available_hours(&self) -> f64 {
        self.available_hours
    }
    fn utilization_pct(&self) -> f64 {
        self.utilization_pct
    }
    fn overallocated(&self) -> bool {
        self.overallocated
    }
}

/// Compute a member's aggregate availability.
///
/// Engaged hours are "as-committed": every engagement still flagged active
/// counts in full, whatever its dates. `now` is only used to report whether
/// the member is on approved time-off today.
///
/// # Errors
///
/// Returns a validation error if the profile is malformed.
pub fn calculate_aggregate_availability(
    profile: &MemberCapacityProfile,
    now: DateTime<Utc>,
) -> Result<AvailabilityResult> {
    profile.check()?;

    let capacity = profile.working_hours_per_week;
    let engaged_hours: f64 = profile.active_engagements().map(|e| e.hours_per_week).sum();
    let today = now.date_naive();
    let on_approved_time_off_now = profile.approved_time_off().any(|t| t.covers(today));

    let result = AvailabilityResult {
        capacity,
        engaged_hours,
        available_hours: available_hours(engaged_hours, capacity),
        utilization_pct: utilization_pct(engaged_hours, capacity),
        overallocated: engaged_hours > capacity,
        on_approved_time_off_now,
    };

    tracing::debug!(
        capacity,
        engaged_hours,
        utilization_pct = result.utilization_pct,
        on_time_off = on_approved_time_off_now,
        "computed aggregate availability"
    );
    if result.overallocated {
        tracing::warn!(capacity, engaged_hours, "member is overallocated");
    }

    Ok(result)
}

/// Compute availability for the inclusive window `[window_start, window_end]`.
///
/// Every engagement overlapping the window counts, active or not. Approved
/// time-off shrinks capacity by the share of the window's working days it
/// covers; overlapping entries are merged first so no day is counted twice.
///
/// # Errors
///
/// Returns a validation error if the window ends before it starts or the
/// profile is malformed.
pub fn calculate_period_availability(
    profile: &MemberCapacityProfile,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Result<PeriodAvailability> {
    if window_end < window_start {
        return Err(ValidationError::InvalidWindow {
            start: window_start,
            end: window_end,
        }
        .into());
    }
    profile.check()?;

    let capacity = profile.working_hours_per_week;
    let engaged_hours: f64 = profile
        .engagements
        .iter()
        .filter(|e| e.overlaps_window(window_start, window_end))
        .map(|e| e.hours_per_week)
        .sum();

    let working_days = working_days_in_window(window_start, window_end);
    let time_off_reduction = time_off_reduction(profile, window_start, window_end, working_days);
    let effective_capacity = (capacity - time_off_reduction).max(0.0);

    let result = PeriodAvailability {
        window_start,
        window_end,
        capacity,
        effective_capacity,
        time_off_reduction,
        engaged_hours,
        available_hours: available_hours(engaged_hours, effective_capacity),
        utilization_pct: utilization_pct(engaged_hours, effective_capacity),
        overallocated: engaged_hours > effective_capacity,
        working_days,
    };

    tracing::debug!(
        %window_start,
        %window_end,
        effective_capacity,
        engaged_hours,
        working_days,
        "computed period availability"
    );

    Ok(result)
}

/// Hours of capacity lost to approved time-off inside the window, capped at
/// the baseline.
///
/// The share is counted in working days. A window with no working days is
/// measured in calendar days instead. Covering every counted day removes the
/// whole baseline.
fn time_off_reduction(
    profile: &MemberCapacityProfile,
    window_start: NaiveDate,
    window_end: NaiveDate,
    window_working_days: i64,
) -> f64 {
    let mut spans: Vec<(NaiveDate, NaiveDate)> = profile
        .approved_time_off()
        .filter_map(|t| clamp_overlap(t.start_date, Some(t.end_date), window_start, window_end))
        .collect();
    if spans.is_empty() {
        return 0.0;
    }
    spans.sort_by_key(|span| span.0);
    let merged = merge_spans(&spans);

    let (off_days, window_days) = if window_working_days > 0 {
        let off: i64 = merged
            .iter()
            .map(|&(start, end)| working_days_in_window(start, end))
            .sum();
        (off, window_working_days)
    } else {
        let off: i64 = merged.iter().map(|&(start, end)| calendar_days(start, end)).sum();
        (off, calendar_days(window_start, window_end))
    };

    let capacity = profile.working_hours_per_week;
    if off_days >= window_days {
        return capacity;
    }
    let reduction = capacity * off_days as f64 / window_days as f64;
    reduction.min(capacity)
}

fn calendar_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Merge sorted inclusive day spans that overlap.
fn merge_spans(sorted: &[(NaiveDate, NaiveDate)]) -> Vec<(NaiveDate, NaiveDate)> {
    let mut merged: Vec<(NaiveDate, NaiveDate)> = Vec::new();
    for &(start, end) in sorted {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }
    merged
}
