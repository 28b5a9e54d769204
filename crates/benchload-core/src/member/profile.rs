//! The per-call capacity input for one member.

use serde::{Deserialize, Serialize};

use super::{Engagement, TimeOffEntry};
use crate::error::ValidationError;

/// Baseline weekly capacity used when the store has no value for a member.
pub const DEFAULT_WORKING_HOURS_PER_WEEK: f64 = 40.0;

/// Member capacity as read from the store, before defaults are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberCapacitySnapshot {
    #[serde(default)]
    pub working_hours_per_week: Option<f64>,
    #[serde(default)]
    pub engagements: Vec<Engagement>,
    #[serde(default, alias = "time_off_entries")]
    pub time_off: Vec<TimeOffEntry>,
}

/// Everything the calculator and validator need about one member.
///
/// Assembled by the caller for each invocation and never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCapacityProfile {
    pub working_hours_per_week: f64,
    #[serde(default)]
    pub engagements: Vec<Engagement>,
    #[serde(default)]
    pub time_off: Vec<TimeOffEntry>,
}

impl MemberCapacityProfile {
    /// Create an empty profile with the given baseline.
    pub fn new(working_hours_per_week: f64) -> Self {
        Self {
            working_hours_per_week,
            engagements: Vec::new(),
            time_off: Vec::new(),
        }
    }

    /// Resolve a store snapshot, filling a missing baseline from `default_hours`.
    pub fn from_snapshot(snapshot: MemberCapacitySnapshot, default_hours: f64) -> Self {
        Self {
            working_hours_per_week: snapshot.working_hours_per_week.unwrap_or(default_hours),
            engagements: snapshot.engagements,
            time_off: snapshot.time_off,
        }
    }

    pub fn with_engagements(mut self, engagements: Vec<Engagement>) -> Self {
        self.engagements = engagements;
        self
    }

    pub fn with_time_off(mut self, time_off: Vec<TimeOffEntry>) -> Self {
        self.time_off = time_off;
        self
    }

    /// Engagements still flagged active, regardless of their dates.
    pub fn active_engagements(&self) -> impl Iterator<Item = &Engagement> {
        self.engagements.iter().filter(|e| e.is_active)
    }

    pub fn approved_time_off(&self) -> impl Iterator<Item = &TimeOffEntry> {
        self.time_off.iter().filter(|t| t.is_approved())
    }

    /// Check the input preconditions shared by every calculation.
    ///
    /// # Errors
    ///
    /// Returns the first malformed value found: a negative or non-finite
    /// baseline, an engagement with unusable hours or dates, or a time-off
    /// entry ending before it starts.
    pub fn check(&self) -> Result<(), ValidationError> {
        if !self.working_hours_per_week.is_finite() || self.working_hours_per_week < 0.0 {
            return Err(ValidationError::InvalidWorkingHours(self.working_hours_per_week));
        }
        for engagement in &self.engagements {
            engagement.check()?;
        }
        for entry in &self.time_off {
            entry.check()?;
        }
        Ok(())
    }
}

impl Default for MemberCapacityProfile {
    fn default() -> Self {
        Self::new(DEFAULT_WORKING_HOURS_PER_WEEK)
    }
}

impl From<MemberCapacitySnapshot> for MemberCapacityProfile {
    fn from(snapshot: MemberCapacitySnapshot) -> Self {
        Self::from_snapshot(snapshot, DEFAULT_WORKING_HOURS_PER_WEEK)
    }
}
