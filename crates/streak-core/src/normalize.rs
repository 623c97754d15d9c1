//! Record normalizer: raw timestamp strings to calendar dates.
//!
//! Truncation to day granularity happens here and nowhere else. Anything the
//! parser cannot make sense of — absent field, empty string, junk text —
//! becomes `day = None` and flows on; the normalizer never fails.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::event::LoginEvent;

/// A login event with its timestamp reduced to a calendar date.
///
/// Exactly one per [`LoginEvent`]. `day` is `None` when the raw record had
/// no timestamp or the timestamp failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedLogin {
    /// The user this login belongs to.
    pub user_id: i64,
    /// The calendar day of the login, time-of-day discarded.
    pub day: Option<NaiveDate>,
}

/// Normalize one raw event into a dated (or explicitly undated) record.
#[must_use]
pub fn normalize(event: &LoginEvent) -> NormalizedLogin {
    let day = event.login_date.as_deref().and_then(|raw| {
        let parsed = parse_calendar_date(raw);
        if parsed.is_none() {
            debug!(user_id = event.user_id, raw, "unparseable login_date, treating as missing");
        }
        parsed
    });
    NormalizedLogin {
        user_id: event.user_id,
        day,
    }
}

/// Parse an ISO-8601-like timestamp down to its date component.
///
/// Accepts, in order of preference:
/// - naive date-times (`2024-11-01T08:00:00`, optional fractional seconds)
/// - offset date-times (`2024-11-01T08:00:00+01:00`, `...Z`)
/// - bare dates (`2024-11-01`)
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.parse::<NaiveDate>().ok()
}
