//! Employee id assignment.
//!
//! Ids are the current time in milliseconds, bumped past the largest id already
//! in the collection. Callers hold the service write lock, so ids are unique
//! within the collection and increase in insertion order even when the clock
//! stalls or steps backwards.

use models::Employee;

/// Wall-clock source used for new ids.
pub type Clock = fn() -> i64;

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `None` once the largest existing id is `i64::MAX`; there is no unused id left above it.
pub fn next_id(existing: &[Employee], now_ms: i64) -> Option<i64> {
    match existing.iter().map(|e| e.id).max() {
        Some(max) if max >= now_ms => max.checked_add(1),
        _ => Some(now_ms),
    }
}
