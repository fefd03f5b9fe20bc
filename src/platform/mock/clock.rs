//! Mock clock with controllable, simulated time.
//!
//! `sleep_ms` advances simulated time instead of blocking, so timing-
//! dependent code can be tested deterministically and instantly.

use alloc::rc::Rc;
use core::cell::Cell;

use crate::platform::traits::Clock;

/// Mock clock for testing with controllable time advancement.
///
/// Clones share the same timeline, so one mock can be handed to the
/// scheduler and a log sink and both observe the same "now".
///
/// # Example
///
/// ```
/// use cooploop::platform::{Clock, MockClock};
///
/// let clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(1000);
/// assert_eq!(clock.now_ms(), 1000);
///
/// clock.sleep_ms(20); // advances instead of blocking
/// assert_eq!(clock.now_ms(), 1020);
/// ```
#[derive(Clone, Default)]
pub struct MockClock {
    current_ms: Rc<Cell<u64>>,
}

impl MockClock {
    /// Creates a new `MockClock` starting at time 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `MockClock` starting at the specified time.
    pub fn with_initial(ms: u64) -> Self {
        Self {
            current_ms: Rc::new(Cell::new(ms)),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, ms: u64) {
        self.current_ms.set(ms);
    }

    /// Advances the current time by the specified amount.
    pub fn advance(&self, ms: u64) {
        self.current_ms.set(self.current_ms.get().wrapping_add(ms));
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms.get()
    }

    fn sleep_ms(&self, ms: u64) {
        self.advance(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_clock_initial_value() {
        let clock = MockClock::new();
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn mock_clock_with_initial() {
        let clock = MockClock::with_initial(5_000);
        assert_eq!(clock.now_ms(), 5_000);
    }

    #[test]
    fn mock_clock_set_and_advance() {
        let clock = MockClock::new();
        clock.set(1_000);
        assert_eq!(clock.now_ms(), 1_000);

        clock.advance(500);
        assert_eq!(clock.now_ms(), 1_500);
    }

    #[test]
    fn mock_clock_sleep_advances_time() {
        let clock = MockClock::new();
        clock.sleep_ms(20);
        clock.sleep_ms(20);
        assert_eq!(clock.now_ms(), 40);
    }

    #[test]
    fn mock_clock_clones_share_timeline() {
        let clock = MockClock::new();
        let other = clock.clone();

        clock.advance(1_000);
        assert_eq!(other.now_ms(), 1_000);

        other.sleep_ms(500);
        assert_eq!(clock.now_ms(), 1_500);
    }
}
