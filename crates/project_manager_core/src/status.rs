//! crates/project_manager_core/src/status.rs
//!
//! Deadline bands for projects.

use crate::domain::{Project, ProjectStatus};
use chrono::{DateTime, Utc};

const DAY_MS: i64 = 86_400_000;

/// Whole days from `now` until `due`, rounded up.
pub fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (due - now).num_milliseconds();
    // ceil(ms / DAY_MS) for a positive divisor
    -(-ms).div_euclid(DAY_MS)
}

/// Maps a remaining-day count onto its band.
pub fn status_for_days(days: i64) -> ProjectStatus {
    if days < 0 {
        ProjectStatus::Overdue
    } else if days <= 7 {
        ProjectStatus::Urgent
    } else {
        ProjectStatus::OnTime
    }
}

/// The status badge of `project` as seen at `now`.
pub fn status_of(project: &Project, now: DateTime<Utc>) -> ProjectStatus {
    status_for_days(days_until(project.due_at(), now))
}
