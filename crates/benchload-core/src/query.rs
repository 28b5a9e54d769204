//! Upcoming and ending engagement lookups.
//!
//! Both lookups are pure filters: they keep the caller's ordering and take
//! the current instant as an argument.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::member::Engagement;

/// Horizon used when the caller does not pick one.
pub const DEFAULT_HORIZON_DAYS: u32 = 14;

/// Look-ahead window for engagement queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementHorizon {
    days: u32,
}

impl EngagementHorizon {
    /// Create a horizon with the default look-ahead (14 days)
    pub fn new() -> Self {
        Self {
            days: DEFAULT_HORIZON_DAYS,
        }
    }

    /// Set the look-ahead in days
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Inclusive `[today, today + days]` for the given instant.
    ///
    /// A horizon reaching past the calendar saturates at `NaiveDate::MAX`.
    pub fn window(&self, now: DateTime<Utc>) -> (NaiveDate, NaiveDate) {
        let today = now.date_naive();
        let end = today
            .checked_add_signed(Duration::days(i64::from(self.days)))
            .unwrap_or(NaiveDate::MAX);
        (today, end)
    }

    /// Engagements starting inside the horizon.
    pub fn upcoming<'a>(&self, engagements: &'a [Engagement], now: DateTime<Utc>) -> Vec<&'a Engagement> {
        let (from, to) = self.window(now);
        engagements
            .iter()
            .filter(|e| e.start_date >= from && e.start_date <= to)
            .collect()
    }

    /// Engagements with an end date inside the horizon.
    pub fn ending<'a>(&self, engagements: &'a [Engagement], now: DateTime<Utc>) -> Vec<&'a Engagement> {
        let (from, to) = self.window(now);
        engagements
            .iter()
            .filter(|e| e.end_date.is_some_and(|end| end >= from && end <= to))
            .collect()
    }
}

impl Default for EngagementHorizon {
    fn default() -> Self {
        Self::new()
    }
}

/// Engagements starting within `horizon_days` (default 14) of `now`.
pub fn get_upcoming_engagements(
    engagements: &[Engagement],
    now: DateTime<Utc>,
    horizon_days: Option<u32>,
) -> Vec<&Engagement> {
    horizon(horizon_days).upcoming(engagements, now)
}

/// Engagements ending within `horizon_days` (default 14) of `now`.
pub fn get_ending_engagements(
    engagements: &[Engagement],
    now: DateTime<Utc>,
    horizon_days: Option<u32>,
) -> Vec<&Engagement> {
    horizon(horizon_days).ending(engagements, now)
}

fn horizon(days: Option<u32>) -> EngagementHorizon {
    EngagementHorizon::new().with_days(days.unwrap_or(DEFAULT_HORIZON_DAYS))
}
