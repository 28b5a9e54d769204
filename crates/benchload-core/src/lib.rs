//! # Benchload Core Library
//!
//! This library provides the member capacity and availability engine: how
//! many working hours an organization member has left, whether a new project
//! commitment fits, and how utilized the member is. Everything here is a
//! pure function over data the caller has already loaded; persistence,
//! transport and authorization live elsewhere.
//!
//! ## Architecture
//!
//! - **Interval**: inclusive date-range overlap, clamping and working-day counts
//! - **Member**: engagements, time-off entries and the per-call capacity profile
//! - **Capacity**: aggregate and period availability, engagement validation
//! - **Presenter**: utilization buckets and summary text
//! - **Query**: upcoming/ending engagements over a look-ahead horizon
//! - **Config**: TOML-backed caller defaults
//!
//! ## Key Components
//!
//! - [`calculate_aggregate_availability`]: "as-committed" availability
//! - [`calculate_period_availability`]: availability inside a date window
//! - [`validate_engagement_capacity`]: rule checks before an engagement is saved
//! - [`get_availability_status`]: utilization band for a result

pub mod capacity;
pub mod config;
pub mod error;
pub mod interval;
pub mod member;
pub mod presenter;
pub mod query;

pub use capacity::{
    calculate_aggregate_availability, calculate_period_availability, check_engagement_capacity,
    validate_engagement_capacity, AvailabilityResult, CapacityFigures, CapacityViolation,
    PeriodAvailability,
};
pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use member::{
    Engagement, EngagementDraft, MemberCapacityProfile, MemberCapacitySnapshot, TimeOffEntry,
    TimeOffKind, TimeOffStatus, DEFAULT_WORKING_HOURS_PER_WEEK,
};
pub use presenter::{
    format_availability_summary, get_availability_status, AvailabilityBucket, AvailabilityStatus,
};
pub use query::{
    get_ending_engagements, get_upcoming_engagements, EngagementHorizon, DEFAULT_HORIZON_DAYS,
};
