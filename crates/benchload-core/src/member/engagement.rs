//! Project engagements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::interval;

/// A member's weekly-hour commitment to one project.
///
/// The store owns the lifecycle (`is_active` is flipped there when the
/// engagement ends or is cancelled). This crate only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engagement {
    pub id: String,
    pub project_id: String,
    #[serde(default)]
    pub role: Option<String>,
    pub hours_per_week: f64,
    pub start_date: NaiveDate,
    /// `None` while the engagement is ongoing.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Engagement {
    /// Create an active, open-ended engagement.
    pub fn new(
        id: impl Into<String>,
        project_id: impl Into<String>,
        hours_per_week: f64,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            role: None,
            hours_per_week,
            start_date,
            end_date: None,
            is_active: true,
        }
    }

    /// Set the end date.
    pub fn ending(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Set the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Mark the engagement inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// Check if this engagement shares any day with `[start, end]`.
    pub fn overlaps_window(&self, start: NaiveDate, end: NaiveDate) -> bool {
        interval::overlaps(self.start_date, self.end_date, start, Some(end))
    }

    /// Fail fast on records that break the stored-engagement invariants.
    pub(crate) fn check(&self) -> Result<(), ValidationError> {
        if !self.hours_per_week.is_finite() || self.hours_per_week <= 0.0 {
            return Err(ValidationError::InvalidHours {
                id: self.id.clone(),
                hours: self.hours_per_week,
            });
        }
        if let Some(end) = self.end_date {
            if end <= self.start_date {
                return Err(ValidationError::InvalidTimeRange {
                    id: self.id.clone(),
                    start: self.start_date,
                    end,
                });
            }
        }
        Ok(())
    }
}

/// A proposed or edited engagement, checked before it is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementDraft {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    pub hours_per_week: f64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl EngagementDraft {
    pub fn new(hours_per_week: f64) -> Self {
        Self {
            hours_per_week,
            ..Self::default()
        }
    }

    pub fn with_dates(mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }
}

impl From<&Engagement> for EngagementDraft {
    fn from(engagement: &Engagement) -> Self {
        Self {
            project_id: Some(engagement.project_id.clone()),
            role: engagement.role.clone(),
            hours_per_week: engagement.hours_per_week,
            start_date: Some(engagement.start_date),
            end_date: engagement.end_date,
        }
    }
}
