//! Pure UTC label helpers for chart axes. Integer math only, so the same
//! code runs in the browser and in host-side tests.

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

// Day 0 of the unix epoch was a Thursday.
const WEEKDAYS: [&str; 7] = ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"];

/// `HH:MM` axis caption for an intraday point.
pub fn clock_label(timestamp_ms: u64) -> String {
    let minutes_total = timestamp_ms / 60_000;
    let hours = (minutes_total / 60) % 24;
    let minutes = minutes_total % 60;
    format!("{:02}:{:02}", hours, minutes)
}

/// Short weekday caption for a daily point.
pub fn weekday_label(timestamp_ms: u64) -> String {
    let days = timestamp_ms / DAY_MS;
    WEEKDAYS[(days % 7) as usize].to_string()
}

/// Weekday captions for the `count` days after `last_timestamp_ms`, used to
/// extend the axis under a forecast overlay.
pub fn future_weekday_labels(last_timestamp_ms: u64, count: usize) -> Vec<String> {
    (1..=count as u64).map(|offset| weekday_label(last_timestamp_ms + offset * DAY_MS)).collect()
}
