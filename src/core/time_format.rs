//! Relative time formatting
//!
//! Renders millisecond durations as human-readable relative time, e.g.
//! `"2d 3h 15m 42s"`. Used by the log ring buffer to display entry age and
//! available standalone for uptime-style displays.
//!
//! Formatting is allocation-free; results fit in a stack string.

use core::fmt::Write;

use heapless::String;

/// Maximum rendered length. A u64 millisecond count decomposes to at most
/// a 12-digit day count plus `"d 23h 59m 59s"`.
pub const TIME_STRING_SIZE: usize = 32;

/// Formats a millisecond duration as relative time (e.g. `"1m 30s"`).
///
/// Decomposes into days/hours/minutes/seconds and emits only the nonzero
/// components. A zero duration (or anything under one second) renders as
/// `"0s"`.
pub fn format_duration_ms(milliseconds: u64) -> String<TIME_STRING_SIZE> {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let mut result: String<TIME_STRING_SIZE> = String::new();

    if days > 0 {
        let _ = write!(result, "{}d ", days);
    }
    if hours % 24 > 0 {
        let _ = write!(result, "{}h ", hours % 24);
    }
    if minutes % 60 > 0 {
        let _ = write!(result, "{}m ", minutes % 60);
    }
    if seconds % 60 > 0 {
        let _ = write!(result, "{}s", seconds % 60);
    }

    if result.is_empty() {
        let _ = result.push_str("0s");
    } else {
        trim_trailing_space(&mut result);
    }

    result
}

/// Formats the difference between two absolute timestamps (e.g. `"2m 15s"`).
///
/// Same decomposition as [`format_duration_ms`], but the seconds component is
/// also emitted when everything else is zero, so the result is never empty.
pub fn format_between_ms(from_ms: u64, to_ms: u64) -> String<TIME_STRING_SIZE> {
    let diff_ms = to_ms.saturating_sub(from_ms);
    let seconds = diff_ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let mut result: String<TIME_STRING_SIZE> = String::new();

    if days > 0 {
        let _ = write!(result, "{}d ", days);
    }
    if hours % 24 > 0 {
        let _ = write!(result, "{}h ", hours % 24);
    }
    if minutes % 60 > 0 {
        let _ = write!(result, "{}m ", minutes % 60);
    }
    if seconds % 60 > 0 || result.is_empty() {
        let _ = write!(result, "{}s", seconds % 60);
    }

    trim_trailing_space(&mut result);
    result
}

fn trim_trailing_space(s: &mut String<TIME_STRING_SIZE>) {
    while s.ends_with(' ') {
        s.pop();
    }
}
