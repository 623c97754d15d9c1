//! Result assembler: package per-user scan outputs into the final collection.
//!
//! Pure reordering, no computation. The grouper already emits ascending
//! `user_id` order, so the sort here is a no-op today; it becomes load-bearing
//! the moment scans run concurrently and merge back out of order.

use crate::scan::UserStreak;

/// Assemble per-user streaks into the ordered result collection.
///
/// One entry per distinct user, ascending by `user_id`. Zero input events
/// produce an empty collection, not a placeholder.
#[must_use]
pub fn assemble(mut streaks: Vec<UserStreak>) -> Vec<UserStreak> {
    streaks.sort_by_key(|s| s.user_id);
    streaks
}
