//! Logging sinks and line accumulation
//!
//! Log destinations are interchangeable [`LogSink`] implementations chosen
//! when the system is wired up, not at compile time: the web-facing ring
//! buffer ([`BufferedLogSink`]), an immediate writer such as a serial
//! console ([`WriteSink`]), or nothing at all ([`NullSink`]).
//!
//! A sink accepts partial text via `append` and completes a line via
//! `append_line`; the buffered sink accumulates partials and stores one
//! timestamped entry per completed line.

use alloc::string::String;
use core::fmt;
use core::mem;

use crate::core::log_buffer::LogRingBuffer;
use crate::platform::traits::Clock;

/// A logging destination.
pub trait LogSink {
    /// Record partial text; no line boundary is inferred.
    fn append(&mut self, text: &str);

    /// Record text and complete the current line.
    fn append_line(&mut self, text: &str);
}

/// Buffers partial text until a line-completion event.
#[derive(Debug, Default)]
pub struct LineAccumulator {
    pending: String,
}

impl LineAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenate text onto the pending buffer without completing it.
    pub fn append(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    /// Concatenate text, then take the full pending buffer as one completed
    /// line, resetting the accumulator.
    ///
    /// Returns `None` when the resulting line is empty; empty lines are
    /// never stored.
    pub fn complete_line(&mut self, text: &str) -> Option<String> {
        self.pending.push_str(text);
        if self.pending.is_empty() {
            return None;
        }
        Some(mem::take(&mut self.pending))
    }

    /// Text accumulated so far.
    pub fn pending(&self) -> &str {
        &self.pending
    }
}

/// Sink that accumulates lines into a timestamped [`LogRingBuffer`].
///
/// This is the web-log path: an HTTP handler later reads
/// [`get_all`](Self::get_all) for display.
pub struct BufferedLogSink<C: Clock, const N: usize> {
    clock: C,
    accumulator: LineAccumulator,
    buffer: LogRingBuffer<N>,
}

impl<C: Clock, const N: usize> BufferedLogSink<C, N> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            accumulator: LineAccumulator::new(),
            buffer: LogRingBuffer::new(),
        }
    }

    /// Number of stored log entries.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True if no line has ever been stored.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Rendered dump of all stored lines, oldest first.
    pub fn get_all(&self) -> String {
        self.buffer.get_all(&self.clock)
    }

    /// Direct access to the underlying ring buffer.
    pub fn buffer(&self) -> &LogRingBuffer<N> {
        &self.buffer
    }
}

impl<C: Clock, const N: usize> LogSink for BufferedLogSink<C, N> {
    fn append(&mut self, text: &str) {
        self.accumulator.append(text);
    }

    fn append_line(&mut self, text: &str) {
        if let Some(line) = self.accumulator.complete_line(text) {
            self.buffer.add_line(self.clock.now_ms(), &line);
        }
    }
}

/// Sink that forwards text immediately to any [`core::fmt::Write`] target,
/// e.g. a serial console on the device or a `String` in tests.
pub struct WriteSink<W: fmt::Write> {
    out: W,
}

impl<W: fmt::Write> WriteSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: fmt::Write> LogSink for WriteSink<W> {
    fn append(&mut self, text: &str) {
        let _ = self.out.write_str(text);
    }

    fn append_line(&mut self, text: &str) {
        let _ = self.out.write_str(text);
        let _ = self.out.write_char('\n');
    }
}

/// Sink that discards everything (logging disabled).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn append(&mut self, _text: &str) {}

    fn append_line(&mut self, _text: &str) {}
}
