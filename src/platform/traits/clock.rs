//! Clock abstraction for platform-agnostic timing.
//!
//! The scheduler and log rendering are written against this trait so they can
//! run on a device timer, the host clock, or a controllable mock.

/// Platform-agnostic monotonic clock with a blocking sleep.
///
/// Implementations are cheap handles: cloning a clock yields another view of
/// the same timeline. The counter is monotonically non-decreasing; wraparound
/// beyond the underlying counter's width is the platform's concern.
///
/// # Example
///
/// ```
/// use cooploop::platform::{Clock, MockClock};
///
/// fn wait_for_interval<C: Clock>(clock: &C, last_ms: &mut u64, interval_ms: u64) -> bool {
///     if clock.elapsed_since(*last_ms) >= interval_ms {
///         *last_ms = clock.now_ms();
///         return true;
///     }
///     false
/// }
///
/// let clock = MockClock::new();
/// let mut last = 0;
/// clock.advance(500);
/// assert!(wait_for_interval(&clock, &mut last, 100));
/// ```
pub trait Clock: Clone {
    /// Returns current time in milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Blocks the caller for at least `ms` milliseconds.
    ///
    /// This is the only suspension point in the system; nothing else yields.
    fn sleep_ms(&self, ms: u64);

    /// Returns elapsed time in milliseconds since a reference point.
    ///
    /// Uses saturating subtraction to handle a reference in the future.
    fn elapsed_since(&self, reference_ms: u64) -> u64 {
        self.now_ms().saturating_sub(reference_ms)
    }
}
