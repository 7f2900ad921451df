//! Clock widget formatting.

use chrono::{Local, NaiveDateTime, Timelike};

#[derive(Debug, Clone, PartialEq)]
/// Formatted clock face for one tick.
pub struct ClockReading {
    /// 24-hour `HH:MM`.
    pub time: String,
    /// `<Weekday> <day>, <Mon>`, e.g. `Friday 16, Oct`.
    pub date: String,
    /// Fraction of the current minute elapsed, in `[0, 1)`.
    pub minute_progress: f64,
}

/// Formats `now` as `HH:MM`.
pub fn format_time(now: &NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

/// Formats `now` as `Friday 16, Oct`.
pub fn format_date(now: &NaiveDateTime) -> String {
    now.format("%A %-d, %b").to_string()
}

/// Returns `(seconds + millis / 1000) / 60` for `now`.
pub fn minute_progress(now: &NaiveDateTime) -> f64 {
    // Leap seconds report nanoseconds past 1e9.
    let millis = (now.nanosecond() / 1_000_000).min(999);
    (f64::from(now.second()) + f64::from(millis) / 1000.0) / 60.0
}

/// Reads the clock face for `now`.
pub fn read_clock(now: &NaiveDateTime) -> ClockReading {
    ClockReading {
        time: format_time(now),
        date: format_date(now),
        minute_progress: minute_progress(now),
    }
}

/// Reads the clock face for the local current time.
pub fn read_local_clock() -> ClockReading {
    read_clock(&Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_milli_opt(h, m, s, ms))
            .expect("valid timestamp")
    }

    #[test]
    fn formats_time_and_date() {
        let reading = read_clock(&at(7, 5, 30, 0));
        assert_eq!(reading.time, "07:05");
        assert_eq!(reading.date, "Friday 16, Oct");
        assert_eq!(reading.minute_progress, 0.5);
    }

    #[test]
    fn single_digit_days_are_not_padded() {
        let now = NaiveDate::from_ymd_opt(2026, 3, 2)
            .and_then(|d| d.and_hms_opt(23, 59, 0))
            .expect("valid timestamp");
        assert_eq!(format_time(&now), "23:59");
        assert_eq!(format_date(&now), "Monday 2, Mar");
    }

    #[test]
    fn progress_includes_milliseconds() {
        assert_eq!(minute_progress(&at(0, 0, 0, 0)), 0.0);
        assert_eq!(minute_progress(&at(0, 0, 15, 0)), 0.25);
        assert_eq!(minute_progress(&at(0, 0, 30, 500)), 30.5 / 60.0);
    }
}
