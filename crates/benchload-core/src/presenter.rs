//! Utilization buckets and summary text for availability results.

use serde::{Deserialize, Serialize};

use crate::capacity::CapacityFigures;

/// Utilization band of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityBucket {
    Low,      // [0, 40)
    Moderate, // [40, 70)
    Good,     // [70, 90)
    High,     // [90, 100]
    Over,     // above 100
}

impl AvailabilityBucket {
    /// Classify a utilization percentage.
    pub fn from_utilization(pct: f64) -> Self {
        if pct < 40.0 {
            Self::Low
        } else if pct < 70.0 {
            Self::Moderate
        } else if pct < 90.0 {
            Self::Good
        } else if pct <= 100.0 {
            Self::High
        } else {
            Self::Over
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low utilization",
            Self::Moderate => "Moderate utilization",
            Self::Good => "Good utilization",
            Self::High => "High utilization",
            Self::Over => "Overallocated",
        }
    }
}

impl std::fmt::Display for AvailabilityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityStatus {
    pub bucket: AvailabilityBucket,
    pub label: String,
}

/// Map a result's utilization to its status band.
pub fn get_availability_status(result: &impl CapacityFigures) -> AvailabilityStatus {
    let bucket = AvailabilityBucket::from_utilization(result.utilization_pct());
    AvailabilityStatus {
        bucket,
        label: bucket.label().to_string(),
    }
}

/// Render e.g. `Available 20h / 40h (50.0% utilized)`.
///
/// Rounding happens here only; the result keeps full precision.
pub fn format_availability_summary(result: &impl CapacityFigures) -> String {
    format!(
        "Available {}h / {}h ({:.1}% utilized)",
        format_hours(result.available_hours()),
        format_hours(result.capacity()),
        result.utilization_pct()
    )
}

/// Hours at one decimal, with a trailing `.0` dropped.
pub fn format_hours(hours: f64) -> String {
    let rounded = format!("{hours:.1}");
    match rounded.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => rounded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::AvailabilityResult;

    fn result(capacity: f64, engaged: f64) -> AvailabilityResult {
        AvailabilityResult {
            capacity,
            engaged_hours: engaged,
            available_hours: (capacity - engaged).max(0.0),
            utilization_pct: if capacity > 0.0 { engaged * 100.0 / capacity } else { 0.0 },
            overallocated: engaged > capacity,
            on_approved_time_off_now: false,
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(AvailabilityBucket::from_utilization(0.0), AvailabilityBucket::Low);
        assert_eq!(AvailabilityBucket::from_utilization(39.99), AvailabilityBucket::Low);
        assert_eq!(AvailabilityBucket::from_utilization(40.0), AvailabilityBucket::Moderate);
        assert_eq!(AvailabilityBucket::from_utilization(69.99), AvailabilityBucket::Moderate);
        assert_eq!(AvailabilityBucket::from_utilization(70.0), AvailabilityBucket::Good);
        assert_eq!(AvailabilityBucket::from_utilization(89.99), AvailabilityBucket::Good);
        assert_eq!(AvailabilityBucket::from_utilization(90.0), AvailabilityBucket::High);
        assert_eq!(AvailabilityBucket::from_utilization(100.0), AvailabilityBucket::High);
        assert_eq!(AvailabilityBucket::from_utilization(100.01), AvailabilityBucket::Over);
    }

    #[test]
    fn test_status_label() {
        let status = get_availability_status(&result(40.0, 20.0));
        assert_eq!(status.bucket, AvailabilityBucket::Moderate);
        assert_eq!(status.label, "Moderate utilization");

        let status = get_availability_status(&result(40.0, 50.0));
        assert_eq!(status.bucket, AvailabilityBucket::Over);
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(
            format_availability_summary(&result(40.0, 20.0)),
            "Available 20h / 40h (50.0% utilized)"
        );
        assert_eq!(
            format_availability_summary(&result(37.5, 12.5)),
            "Available 25h / 37.5h (33.3% utilized)"
        );
        assert_eq!(
            format_availability_summary(&result(40.0, 50.0)),
            "Available 0h / 40h (125.0% utilized)"
        );
    }

    #[test]
    fn test_format_hours_rounds_float_noise() {
        assert_eq!(format_hours(0.1 + 0.2), "0.3");
        assert_eq!(format_hours(40.300000000000004 - 40.0), "0.3");
        assert_eq!(format_hours(8.0), "8");
    }

    #[test]
    fn test_summary_does_not_mutate_precision() {
        let r = result(30.0, 10.0);
        let _ = format_availability_summary(&r);
        assert_eq!(r.utilization_pct, 10.0 * 100.0 / 30.0);
    }
}
