//! Pipeline composition: raw events in, sorted streak results out.

use tracing::debug;

use crate::assemble::assemble;
use crate::event::LoginEvent;
use crate::group::group_by_user;
use crate::normalize::normalize;
use crate::scan::{UserStreak, scan};

/// Compute the longest contiguous login streak for every user in `events`.
///
/// Deterministic and side-effect-free: the same input sequence always yields
/// the same result collection, ordered ascending by `user_id` regardless of
/// input order. Per-user scans share no state, so this loop could fan out
/// across groups; results would only need the assembler's re-sort.
#[must_use]
pub fn longest_contiguous_sequence(events: &[LoginEvent]) -> Vec<UserStreak> {
    let normalized = events.iter().map(normalize).collect();
    let groups = group_by_user(normalized);
    debug!(events = events.len(), users = groups.len(), "grouped login events");

    let streaks = groups
        .iter()
        .map(|g| scan(g.user_id, &g.days))
        .collect();
    assemble(streaks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_collection() {
        assert!(longest_contiguous_sequence(&[]).is_empty());
    }

    #[test]
    fn results_sorted_by_user_regardless_of_input_order() {
        let events = vec![
            LoginEvent::new(4, "2024-11-05T11:00:00"),
            LoginEvent::new(1, "2024-11-01T08:00:00"),
            LoginEvent::undated(6),
            LoginEvent::new(1, "2024-11-02T09:00:00"),
        ];
        let out = longest_contiguous_sequence(&events);
        let ids: Vec<i64> = out.iter().map(|s| s.user_id).collect();
        assert_eq!(ids, vec![1, 4, 6]);
    }

    #[test]
    fn one_result_per_distinct_user() {
        let events = vec![
            LoginEvent::new(1, "2024-11-01T08:00:00"),
            LoginEvent::new(1, "2024-11-01T09:00:00"),
            LoginEvent::new(2, "2024-11-01T10:00:00"),
        ];
        assert_eq!(longest_contiguous_sequence(&events).len(), 2);
    }
}
