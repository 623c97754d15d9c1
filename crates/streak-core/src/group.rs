//! Entity grouper: partition normalized logins into per-user day sequences.
//!
//! Ordering invariants established here and relied on by the scanner:
//!
//! - groups come out ascending by `user_id` (the `BTreeMap` carries this
//!   structurally, regardless of input order);
//! - within a group, days are ascending, with undated entries first —
//!   `Option<NaiveDate>` orders `None` before any `Some`, so a plain sort
//!   gives the scanner its leading-missing-date short-circuit position.
//!
//! Duplicate same-day entries are kept, not collapsed; the scanner's
//! zero-day-gap rule owns that case.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::normalize::NormalizedLogin;

/// All of one user's login days, sorted ascending with `None` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGroup {
    /// The grouping key.
    pub user_id: i64,
    /// Sorted day sequence; may contain duplicates and `None` entries.
    pub days: Vec<Option<NaiveDate>>,
}

/// Partition a normalized record sequence into ordered per-user groups.
///
/// Empty input yields an empty group sequence, not an error.
#[must_use]
pub fn group_by_user(records: Vec<NormalizedLogin>) -> Vec<UserGroup> {
    let mut by_user: BTreeMap<i64, Vec<Option<NaiveDate>>> = BTreeMap::new();
    for rec in records {
        by_user.entry(rec.user_id).or_default().push(rec.day);
    }

    by_user
        .into_iter()
        .map(|(user_id, mut days)| {
            days.sort_unstable();
            UserGroup { user_id, days }
        })
        .collect()
}
