//! Capacity arithmetic and engagement validation.
//!
//! This module provides:
//! - Aggregate ("as-committed") availability for a member
//! - Availability scoped to a date window, net of approved time-off
//! - Rule checks for a proposed or edited engagement

mod calculator;
mod validator;

pub use calculator::{
    calculate_aggregate_availability, calculate_period_availability, AvailabilityResult,
    PeriodAvailability,
};
pub use validator::{check_engagement_capacity, validate_engagement_capacity, CapacityViolation};

/// Read access to the numbers every availability result carries.
///
/// Lets the presenter treat aggregate and period results the same way.
pub trait CapacityFigures {
    /// Capacity the utilization is measured against.
    fn capacity(&self) -> f64;
    fn engaged_hours(&self) -> f64;
    fn available_hours(&self) -> f64;
    fn utilization_pct(&self) -> f64;
    fn overallocated(&self) -> bool;
}

/// `engaged / capacity` as a percentage, or 0 when there is no capacity.
pub(crate) fn utilization_pct(engaged_hours: f64, capacity: f64) -> f64 {
    if capacity > 0.0 {
        engaged_hours * 100.0 / capacity
    } else {
        0.0
    }
}

pub(crate) fn available_hours(engaged_hours: f64, capacity: f64) -> f64 {
    (capacity - engaged_hours).max(0.0)
}
