//! Time helpers shared across host contracts and the dashboard runtime.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, NaiveDate};

thread_local! {
    static LAST_ISSUED_TIMESTAMP_MS: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns a unix millisecond timestamp that is strictly greater than every value previously
/// returned on this thread.
///
/// Two calls inside the same clock tick still yield distinct values, which makes the result usable
/// as a unique identifier suffix.
pub fn next_monotonic_timestamp_ms() -> u64 {
    let now = unix_time_ms_now();
    LAST_ISSUED_TIMESTAMP_MS.with(|last| {
        let next = now.max(last.get().saturating_add(1));
        last.set(next);
        next
    })
}

/// Formats the calendar-day key for `date`, e.g. `Fri Oct 16 2026`.
///
/// The key is locale independent: English weekday and month abbreviations and a zero-padded day.
pub fn calendar_day_key(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Returns the calendar-day key for the local current date.
pub fn today_calendar_day_key() -> String {
    calendar_day_key(Local::now().date_naive())
}
