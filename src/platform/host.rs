//! Host platform clock backed by std.

use std::time::Instant;

use crate::platform::traits::Clock;

/// Wall clock for host targets.
///
/// Milliseconds are measured from the instant of construction, so `now_ms`
/// behaves like a device's millis-since-boot counter. Clones share the same
/// origin.
#[derive(Clone)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    /// Creates a clock whose time 0 is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(std::time::Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_clock_starts_near_zero() {
        let clock = StdClock::new();
        assert!(clock.now_ms() < 1_000);
    }

    #[test]
    fn std_clock_sleep_advances_wall_time() {
        let clock = StdClock::new();
        let before = clock.now_ms();
        clock.sleep_ms(10);
        assert!(clock.now_ms() >= before + 10);
    }
}
