//! Leave-permission tracking
//!
//! This module provides the in-memory core of the bot:
//! - `Activity` - The fixed set of reasons a user may record a leave
//! - `LeaveRecord` / `ClosedLeave` - Active and closed leave values
//! - `LeaveTracker` - The identity → active-leave map and its guard rules

pub mod activity;
pub mod record;
pub mod tracker;

pub use activity::Activity;
pub use record::{ClosedLeave, LeaveRecord};
pub use tracker::LeaveTracker;

pub use crate::core::UserId;
