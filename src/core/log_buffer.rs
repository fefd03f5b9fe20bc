//! Log ring buffer
//!
//! Fixed-capacity circular store of timestamped log lines. When full, the
//! oldest entry is silently overwritten; overflow is normal operation, not an
//! error. Entries are retrieved oldest-first, rendered with a human-readable
//! relative age.
//!
//! Emptiness versus fullness is tracked by an explicit count (the length of
//! the backing vector), never inferred from index equality.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::core::time_format::format_between_ms;
use crate::platform::traits::Clock;

/// Conventional capacity for a web-facing log buffer, in lines.
pub const LOG_BUFFER_SIZE: usize = 50;

/// A single timestamped log line. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Clock reading (ms since system start) at the moment the line completed
    pub timestamp_ms: u64,
    /// Completed line text, never empty
    pub message: String,
}

/// Fixed-capacity ring buffer of [`LogEntry`] values.
///
/// Holds up to `N` entries. The `N+1`-th insertion overwrites the oldest
/// entry; there is no error and no eviction callback. Entries can never be
/// removed individually.
pub struct LogRingBuffer<const N: usize> {
    /// Stored entries; length below `N` means the buffer is still filling
    /// and `start` is 0
    entries: Vec<LogEntry>,
    /// Index of the oldest entry once the buffer is full
    start: usize,
    /// Number of entries lost to overwrite, for diagnostics
    overflow_count: u32,
}

impl<const N: usize> LogRingBuffer<N> {
    /// Create a new empty ring buffer.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            start: 0,
            overflow_count: 0,
        }
    }

    /// Record a completed line with the given timestamp.
    ///
    /// Empty messages are ignored. If the buffer is already full, the oldest
    /// entry is overwritten and `overflow_count` is incremented.
    pub fn add_line(&mut self, timestamp_ms: u64, message: &str) {
        if message.is_empty() {
            return;
        }

        let entry = LogEntry {
            timestamp_ms,
            message: String::from(message),
        };

        if self.entries.len() < N {
            self.entries.push(entry);
        } else {
            self.entries[self.start] = entry;
            self.start = (self.start + 1) % N;
            self.overflow_count = self.overflow_count.saturating_add(1);
        }
    }

    /// Return the number of currently stored entries (0 up to capacity).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if no entry has ever been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the number of entries lost to overwrite.
    pub fn overflow_count(&self) -> u32 {
        self.overflow_count
    }

    /// Iterate over stored entries in oldest-first order.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        let len = self.entries.len();
        let start = self.start;
        (0..len).map(move |i| &self.entries[(start + i) % N])
    }

    /// Render all entries oldest-first, one line each, as
    /// `"[<relative time> ago]<message>\n"`.
    ///
    /// Relative time is the age of the entry against the clock's current
    /// reading. Returns an empty string if nothing has been written.
    pub fn get_all<C: Clock>(&self, clock: &C) -> String {
        let now_ms = clock.now_ms();
        let mut out = String::new();
        for entry in self.iter() {
            let age = format_between_ms(entry.timestamp_ms, now_ms);
            let _ = writeln!(out, "[{} ago]{}", age, entry.message);
        }
        out
    }
}

impl<const N: usize> Default for LogRingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
