//! Time-off entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::interval;

/// Kind of leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffKind {
    Vacation,
    ParentalLeave,
    SickLeave,
    PaidTimeOff,
    UnpaidTimeOff,
    Other,
}

impl std::fmt::Display for TimeOffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeOffKind::Vacation => write!(f, "Vacation"),
            TimeOffKind::ParentalLeave => write!(f, "Parental leave"),
            TimeOffKind::SickLeave => write!(f, "Sick leave"),
            TimeOffKind::PaidTimeOff => write!(f, "Paid time off"),
            TimeOffKind::UnpaidTimeOff => write!(f, "Unpaid time off"),
            TimeOffKind::Other => write!(f, "Other"),
        }
    }
}

/// Approval status. `Pending` moves to `Approved` or `Rejected` in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl TimeOffStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, TimeOffStatus::Approved | TimeOffStatus::Rejected)
    }
}

/// A period during which a member is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TimeOffKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: TimeOffStatus,
    #[serde(default)]
    pub description: Option<String>,
}

impl TimeOffEntry {
    /// Create a pending entry.
    pub fn new(
        id: impl Into<String>,
        kind: TimeOffKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            start_date,
            end_date,
            status: TimeOffStatus::Pending,
            description: None,
        }
    }

    pub fn with_status(mut self, status: TimeOffStatus) -> Self {
        self.status = status;
        self
    }

    pub fn approved(self) -> Self {
        self.with_status(TimeOffStatus::Approved)
    }

    /// Only approved entries reduce capacity.
    pub fn is_approved(&self) -> bool {
        self.status == TimeOffStatus::Approved
    }

    pub fn covers(&self, day: NaiveDate) -> bool {
        interval::contains(self.start_date, Some(self.end_date), day)
    }

    pub(crate) fn check(&self) -> Result<(), ValidationError> {
        if self.end_date < self.start_date {
            return Err(ValidationError::InvalidTimeRange {
                id: self.id.clone(),
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}
