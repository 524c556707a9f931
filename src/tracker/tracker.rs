//! The identity → active-leave map and its guard rules
//!
//! At most one leave is active per user. A record is created only by an
//! accepted start request and removed only by a matching close from the
//! same identity; everything else is rejected with a `Denial` and leaves
//! the map untouched.

use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::core::Denial;

use super::{Activity, ClosedLeave, LeaveRecord, UserId};

/// Tracks the active leave of every user.
///
/// Callers pass the current time into each operation; the tracker itself
/// never reads the clock, which keeps deadline and duration math exact
/// under test.
#[derive(Debug, Default)]
pub struct LeaveTracker {
    active: HashMap<UserId, LeaveRecord>,
}

impl LeaveTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self {
            active: HashMap::new(),
        }
    }

    /// Open a leave for `claimed_owner_id`.
    ///
    /// Guard checks run in order, first failure wins:
    /// 1. the requester must be the owner embedded in the control,
    /// 2. the owner must not already have an active leave,
    /// 3. the activity key must be one of the static set.
    ///
    /// On success the record is stored and returned; its deadline is
    /// `now + limit` when the activity has a time limit, absent otherwise.
    pub fn request_start(
        &mut self,
        requester_id: UserId,
        claimed_owner_id: UserId,
        activity_key: &str,
        now: DateTime<Local>,
    ) -> Result<&LeaveRecord, Denial> {
        if requester_id != claimed_owner_id {
            return Err(Denial::OwnershipMismatch {
                owner_id: claimed_owner_id,
                requester_id,
            });
        }

        if let Some(existing) = self.active.get(&claimed_owner_id) {
            return Err(Denial::AlreadyActive {
                label: existing.label.clone(),
            });
        }

        let activity = Activity::from_key(activity_key).ok_or_else(|| Denial::UnknownActivity {
            key: activity_key.to_string(),
        })?;

        let record = LeaveRecord {
            owner_id: claimed_owner_id,
            label: activity.label().to_string(),
            started_at: now,
            deadline: activity.time_limit().map(|limit| now + limit),
        };

        Ok(self.active.entry(claimed_owner_id).or_insert(record))
    }

    /// Close the active leave of `claimed_owner_id`.
    ///
    /// The requester must be the embedded owner and a record must exist.
    /// On success the record is removed and returned with its end time;
    /// duration is derived from it, nothing is archived.
    pub fn request_end(
        &mut self,
        requester_id: UserId,
        claimed_owner_id: UserId,
        now: DateTime<Local>,
    ) -> Result<ClosedLeave, Denial> {
        if requester_id != claimed_owner_id {
            return Err(Denial::OwnershipMismatch {
                owner_id: claimed_owner_id,
                requester_id,
            });
        }

        let record = self
            .active
            .remove(&claimed_owner_id)
            .ok_or(Denial::NoActivePermission)?;

        Ok(ClosedLeave {
            record,
            ended_at: now,
        })
    }

    /// The active leave of `user`, if any
    pub fn active_leave(&self, user: UserId) -> Option<&LeaveRecord> {
        self.active.get(&user)
    }

    /// Number of currently active leaves
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    const ANI: UserId = 100;
    const BUDI: UserId = 200;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 10, h, m, s).unwrap()
    }

    #[test]
    fn test_start_then_duplicate_start() {
        let mut tracker = LeaveTracker::new();

        let record = tracker
            .request_start(ANI, ANI, "beli_makan", at(10, 0, 0))
            .unwrap();
        assert_eq!(record.owner_id, ANI);
        assert_eq!(record.label, "beli makan");

        // Any second start is rejected while the first is open, whatever the key
        let err = tracker
            .request_start(ANI, ANI, "ke_toilet", at(10, 1, 0))
            .unwrap_err();
        assert_eq!(
            err,
            Denial::AlreadyActive {
                label: "beli makan".into()
            }
        );
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn test_end_then_double_end() {
        let mut tracker = LeaveTracker::new();
        tracker
            .request_start(ANI, ANI, "ke_balkon", at(9, 0, 0))
            .unwrap();

        let closed = tracker.request_end(ANI, ANI, at(9, 4, 0)).unwrap();
        assert_eq!(closed.record.label, "ke balkon");
        assert_eq!(tracker.active_count(), 0);

        let err = tracker.request_end(ANI, ANI, at(9, 4, 1)).unwrap_err();
        assert_eq!(err, Denial::NoActivePermission);
    }

    #[test]
    fn test_start_by_non_owner_is_rejected() {
        let mut tracker = LeaveTracker::new();

        let err = tracker
            .request_start(BUDI, ANI, "beli_makan", at(10, 0, 0))
            .unwrap_err();
        assert_eq!(
            err,
            Denial::OwnershipMismatch {
                owner_id: ANI,
                requester_id: BUDI
            }
        );
        // The victim's state is untouched
        assert!(tracker.active_leave(ANI).is_none());
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_end_by_non_owner_keeps_record() {
        let mut tracker = LeaveTracker::new();
        tracker
            .request_start(ANI, ANI, "antar_barang", at(8, 0, 0))
            .unwrap();

        let err = tracker.request_end(BUDI, ANI, at(8, 5, 0)).unwrap_err();
        assert_eq!(
            err,
            Denial::OwnershipMismatch {
                owner_id: ANI,
                requester_id: BUDI
            }
        );
        assert!(tracker.active_leave(ANI).is_some());
    }

    #[test]
    fn test_ownership_checked_before_activity_key() {
        let mut tracker = LeaveTracker::new();

        // First failure wins: a foreign click on a bogus key reports the
        // ownership problem, not the unknown key
        let err = tracker
            .request_start(BUDI, ANI, "ke_pasar", at(10, 0, 0))
            .unwrap_err();
        assert!(matches!(err, Denial::OwnershipMismatch { .. }));
    }

    #[test]
    fn test_unknown_activity() {
        let mut tracker = LeaveTracker::new();

        let err = tracker
            .request_start(ANI, ANI, "ke_pasar", at(10, 0, 0))
            .unwrap_err();
        assert_eq!(
            err,
            Denial::UnknownActivity {
                key: "ke_pasar".into()
            }
        );
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_unbounded_activity_has_no_deadline() {
        let mut tracker = LeaveTracker::new();
        let record = tracker
            .request_start(ANI, ANI, "ke_toilet", at(10, 0, 0))
            .unwrap();
        assert_eq!(record.deadline, None);
    }

    #[test]
    fn test_limited_activity_deadline_is_exact() {
        let mut tracker = LeaveTracker::new();
        let start = at(10, 0, 0);
        let record = tracker
            .request_start(ANI, ANI, "beli_makan", start)
            .unwrap();
        assert_eq!(record.deadline, Some(start + Duration::minutes(15)));
    }

    #[test]
    fn test_duration_reported_on_close() {
        let mut tracker = LeaveTracker::new();
        tracker
            .request_start(ANI, ANI, "beli_makan", at(10, 0, 0))
            .unwrap();

        let closed = tracker.request_end(ANI, ANI, at(10, 7, 30)).unwrap();
        assert_eq!(format!("{:.2}", closed.duration_minutes()), "7.50");
    }

    #[test]
    fn test_users_are_independent() {
        let mut tracker = LeaveTracker::new();
        tracker
            .request_start(ANI, ANI, "beli_makan", at(10, 0, 0))
            .unwrap();
        tracker
            .request_start(BUDI, BUDI, "ke_toilet", at(10, 1, 0))
            .unwrap();
        assert_eq!(tracker.active_count(), 2);

        tracker.request_end(ANI, ANI, at(10, 5, 0)).unwrap();
        assert!(tracker.active_leave(ANI).is_none());
        assert!(tracker.active_leave(BUDI).is_some());
    }

    #[test]
    fn test_reopen_after_close() {
        let mut tracker = LeaveTracker::new();
        tracker
            .request_start(ANI, ANI, "ke_balkon", at(10, 0, 0))
            .unwrap();
        tracker.request_end(ANI, ANI, at(10, 3, 0)).unwrap();

        // absent → active is allowed again once the previous leave closed
        let record = tracker
            .request_start(ANI, ANI, "beli_makan", at(11, 0, 0))
            .unwrap();
        assert_eq!(record.label, "beli makan");
    }
}
