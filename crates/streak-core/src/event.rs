//! Raw login-event records as they arrive from the input JSON.
//!
//! One [`LoginEvent`] per input array element. The record is deliberately
//! loose: `login_date` may be missing entirely, and nothing forbids the same
//! user/timestamp pair appearing twice. Tightening happens downstream in the
//! normalizer, never here.

use serde::{Deserialize, Serialize};

/// A single raw login record.
///
/// `login_date` carries the timestamp exactly as it appeared in the source
/// file. A missing field deserializes to `None`; a present-but-garbage value
/// stays a `String` here and becomes a missing calendar date during
/// normalization. Malformed timestamps are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginEvent {
    /// The user this login belongs to.
    pub user_id: i64,

    /// Raw timestamp string, e.g. `2024-11-01T08:00:00`. Absent when the
    /// source record had no `login_date` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_date: Option<String>,
}

impl LoginEvent {
    /// Convenience constructor for a dated login.
    #[must_use]
    pub fn new(user_id: i64, login_date: impl Into<String>) -> Self {
        Self {
            user_id,
            login_date: Some(login_date.into()),
        }
    }

    /// Convenience constructor for a record with no timestamp.
    #[must_use]
    pub const fn undated(user_id: i64) -> Self {
        Self {
            user_id,
            login_date: None,
        }
    }
}
