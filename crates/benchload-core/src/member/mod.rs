//! Member capacity records: engagements, time-off, and the profile that
//! bundles them for a single calculation.

mod engagement;
mod profile;
mod time_off;

pub use engagement::{Engagement, EngagementDraft};
pub use profile::{MemberCapacityProfile, MemberCapacitySnapshot, DEFAULT_WORKING_HOURS_PER_WEEK};
pub use time_off::{TimeOffEntry, TimeOffKind, TimeOffStatus};
