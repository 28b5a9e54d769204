//! Shared helpers for loading member snapshots.

use std::path::Path;

use benchload_core::{Config, MemberCapacityProfile, MemberCapacitySnapshot};
use chrono::{DateTime, NaiveDate, Utc};

/// Read a member snapshot JSON file and resolve it against the configured
/// baseline hours.
pub fn load_profile(path: &Path, config: &Config) -> Result<MemberCapacityProfile, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read profile {}: {e}", path.display()))?;
    let snapshot: MemberCapacitySnapshot = serde_json::from_str(&content)
        .map_err(|e| format!("cannot parse profile {}: {e}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        engagements = snapshot.engagements.len(),
        time_off = snapshot.time_off.len(),
        "loaded member snapshot"
    );
    Ok(MemberCapacityProfile::from_snapshot(
        snapshot,
        config.capacity.default_working_hours_per_week,
    ))
}

/// `--now` as midnight UTC, or the system clock when absent.
pub fn resolve_now(date: Option<NaiveDate>) -> DateTime<Utc> {
    match date {
        Some(day) => day.and_time(chrono::NaiveTime::MIN).and_utc(),
        None => Utc::now(),
    }
}
