//! Streak scanner: the longest-contiguous-run algorithm.
//!
//! Single forward pass over one user's sorted day sequence, tracking the
//! current run and the best run seen so far. Two pieces of inherited policy
//! are load-bearing and must not be "fixed" without product sign-off, since
//! the golden fixtures assert them:
//!
//! - a missing date at position 0 blanks the whole user (zero result), even
//!   if later entries carry valid dates;
//! - a zero-day gap (duplicate same-day login) extends the run *length*
//!   without advancing the date window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The longest login streak found for one user.
///
/// `longest_sequence == 0` with both dates `None` iff the user had no usable
/// calendar dates at all. Serializes with `YYYY-MM-DD` date strings and JSON
/// `null` for absent dates, matching the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStreak {
    /// The user this streak belongs to.
    pub user_id: i64,
    /// Length of the longest run, in entries (see the duplicate-day policy).
    pub longest_sequence: u32,
    /// First day of the longest run.
    pub start_date: Option<NaiveDate>,
    /// Last day of the longest run.
    pub end_date: Option<NaiveDate>,
}

impl UserStreak {
    /// The zero result for a user with no usable dates.
    #[must_use]
    pub const fn empty(user_id: i64) -> Self {
        Self {
            user_id,
            longest_sequence: 0,
            start_date: None,
            end_date: None,
        }
    }
}

/// Scan one user's sorted day sequence for its longest contiguous run.
///
/// Adjacent entries with a day difference of 0 or 1 extend the current run;
/// a larger gap, or a missing date on either side of the pair, resets it.
/// `max` only advances on strict `>`, so when two runs tie for longest the
/// earlier-starting one is reported.
///
/// The scan is pure and total: any well-typed input, including empty and
/// single-element sequences, produces a result without error.
#[must_use]
pub fn scan(user_id: i64, days: &[Option<NaiveDate>]) -> UserStreak {
    // Leading missing date (or nothing at all): no usable data for this user.
    let Some(&Some(first)) = days.first() else {
        trace!(user_id, "no usable dates, emitting zero streak");
        return UserStreak::empty(user_id);
    };

    let mut current_run: u32 = 1;
    let mut current_start = Some(first);
    let mut max_run: u32 = 1;
    let mut max_start = Some(first);
    let mut max_end = Some(first);

    for pair in days.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        match (prev, curr) {
            (Some(p), Some(c)) if (c - p).num_days() <= 1 => {
                current_run += 1;
                if current_run > max_run {
                    max_run = current_run;
                    max_start = current_start;
                    max_end = Some(c);
                }
            }
            // Gap > 1 day, or a missing date on either side: the run breaks.
            // A mid-sequence missing date only resets the counter; it does
            // not terminate the scan.
            _ => {
                current_run = 1;
                current_start = curr;
            }
        }
    }

    trace!(user_id, longest = max_run, "scan complete");
    UserStreak {
        user_id,
        longest_sequence: max_run,
        start_date: max_start,
        end_date: max_end,
    }
}
