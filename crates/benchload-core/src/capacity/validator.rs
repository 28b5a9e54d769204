//! Rule checks for a proposed or edited engagement.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::member::{EngagementDraft, MemberCapacityProfile};

/// A business rule the candidate engagement breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityViolation {
    NonPositiveHours,
    ExceedsWorkingHours,
    ExceedsRemainingCapacity,
    EndNotAfterStart,
}

impl std::fmt::Display for CapacityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            CapacityViolation::NonPositiveHours => "Hours per week must be greater than 0",
            CapacityViolation::ExceedsWorkingHours => {
                "Hours per week cannot exceed total working hours"
            }
            CapacityViolation::ExceedsRemainingCapacity => {
                "Total engagement hours would exceed working hours per week"
            }
            CapacityViolation::EndNotAfterStart => "End date must be after start date",
        };
        f.write_str(message)
    }
}

/// Check a candidate engagement against the member's commitments.
///
/// Every rule is evaluated, so one call reports all problems at once. Pass
/// the id of the engagement being edited as `exclude_engagement_id` so its
/// current hours are not counted against its new value.
///
/// The answer is only as fresh as `profile`. Two concurrent additions can
/// each pass against the same snapshot, so the persistence layer must re-run
/// this check on a transaction-consistent read right before commit.
///
/// # Errors
///
/// Returns a validation error for malformed input (non-finite candidate
/// hours or a malformed profile). Rule violations are never errors.
pub fn check_engagement_capacity(
    profile: &MemberCapacityProfile,
    candidate: &EngagementDraft,
    exclude_engagement_id: Option<&str>,
) -> Result<Vec<CapacityViolation>> {
    if !candidate.hours_per_week.is_finite() {
        return Err(ValidationError::InvalidHours {
            id: "candidate".to_string(),
            hours: candidate.hours_per_week,
        }
        .into());
    }
    profile.check()?;

    let hours = candidate.hours_per_week;
    let working_hours = profile.working_hours_per_week;
    let mut violations = Vec::new();

    if hours <= 0.0 {
        violations.push(CapacityViolation::NonPositiveHours);
    }

    if hours > working_hours {
        violations.push(CapacityViolation::ExceedsWorkingHours);
    }

    let other_active_hours: f64 = profile
        .active_engagements()
        .filter(|e| exclude_engagement_id != Some(e.id.as_str()))
        .map(|e| e.hours_per_week)
        .sum();
    if other_active_hours + hours > working_hours {
        violations.push(CapacityViolation::ExceedsRemainingCapacity);
    }

    if let (Some(start), Some(end)) = (candidate.start_date, candidate.end_date) {
        if end <= start {
            violations.push(CapacityViolation::EndNotAfterStart);
        }
    }

    tracing::debug!(
        hours,
        working_hours,
        other_active_hours,
        excluded = exclude_engagement_id.unwrap_or(""),
        violations = violations.len(),
        "validated engagement capacity"
    );

    Ok(violations)
}

/// Same as [`check_engagement_capacity`], rendered as user-facing messages.
///
/// # Errors
///
/// See [`check_engagement_capacity`].
pub fn validate_engagement_capacity(
    profile: &MemberCapacityProfile,
    candidate: &EngagementDraft,
    exclude_engagement_id: Option<&str>,
) -> Result<Vec<String>> {
    let violations = check_engagement_capacity(profile, candidate, exclude_engagement_id)?;
    Ok(violations.iter().map(ToString::to_string).collect())
}
