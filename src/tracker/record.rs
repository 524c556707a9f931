//! Active and closed leave records

use chrono::{DateTime, Local};

use super::UserId;

/// An active leave for one user.
///
/// Exists from an accepted start request until the matching close; there is
/// no archive, the record is dropped once closed. The deadline is advisory
/// only and is never enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRecord {
    /// Identity of the requesting user, fixed for the record's life
    pub owner_id: UserId,

    /// Activity label, copied from the chosen activity at creation time
    pub label: String,

    /// When the leave started
    pub started_at: DateTime<Local>,

    /// Advisory return-by time, absent for unbounded activities
    pub deadline: Option<DateTime<Local>>,
}

/// The outcome of closing a leave: the removed record plus its end time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedLeave {
    /// The record that was removed from the tracker
    pub record: LeaveRecord,

    /// When the leave was closed
    pub ended_at: DateTime<Local>,
}

impl ClosedLeave {
    /// Elapsed time in fractional minutes
    pub fn duration_minutes(&self) -> f64 {
        let elapsed = self.ended_at - self.record.started_at;
        elapsed.num_milliseconds() as f64 / 60_000.0
    }
}
