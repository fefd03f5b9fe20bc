//! Foreground delay with interleaved background passes
//!
//! Sleeps a requested duration in small increments, running a background
//! pass between increments. Needed because the target is single-threaded:
//! an uninterrupted multi-second sleep would starve duties like servicing
//! network requests.

use core::fmt;

use crate::core::scheduler::registry::TaskRegistry;
use crate::platform::traits::Clock;

/// Default sleep increment between background passes, in milliseconds.
///
/// Bounds worst-case foreground latency added to each pass of background
/// work.
pub const DELAY_BUCKET_MS: u64 = 20;

/// Result type for delay-scheduler configuration.
pub type Result<T> = core::result::Result<T, ConfigError>;

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The sleep bucket must be nonzero, or a delay with fast tasks would
    /// never accumulate elapsed time and spin forever
    ZeroBucket,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBucket => write!(f, "delay bucket must be nonzero"),
        }
    }
}

/// Delay scheduler configuration, established at initialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DelayConfig {
    bucket_ms: u64,
}

impl DelayConfig {
    /// Create a configuration with the given sleep bucket.
    pub fn new(bucket_ms: u64) -> Result<Self> {
        if bucket_ms == 0 {
            return Err(ConfigError::ZeroBucket);
        }
        Ok(Self { bucket_ms })
    }

    /// Sleep increment between passes.
    pub fn bucket_ms(&self) -> u64 {
        self.bucket_ms
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            bucket_ms: DELAY_BUCKET_MS,
        }
    }
}

/// Runs background passes while blocking the caller for a requested
/// duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayScheduler {
    config: DelayConfig,
}

impl DelayScheduler {
    /// Create a scheduler with the given configuration.
    pub fn new(config: DelayConfig) -> Self {
        Self { config }
    }

    /// Block for at least `requested_ms`, running background passes during
    /// the wait.
    ///
    /// Each iteration runs one pass, measures the time the pass consumed
    /// against the clock, and credits it toward the requested duration; if
    /// more time is still owed, sleeps one bucket (credited at its nominal
    /// length, not re-measured). At least one pass runs even when
    /// `requested_ms` is 0. The call returns no earlier than `requested_ms`
    /// of accumulated time and no later than roughly
    /// `requested_ms + bucket + last pass cost`.
    ///
    /// Time consumed by tasks shortens subsequent sleeping: the foreground
    /// responsiveness budget is global, not additive to pass cost.
    pub fn delay_with_background_tasks<C: Clock>(
        &self,
        clock: &C,
        registry: &TaskRegistry,
        requested_ms: u64,
    ) {
        let bucket_ms = self.config.bucket_ms;
        let mut elapsed_ms: u64 = 0;

        loop {
            let pass_start_ms = clock.now_ms();
            registry.run_pass();
            elapsed_ms = elapsed_ms.saturating_add(clock.elapsed_since(pass_start_ms));

            if elapsed_ms >= requested_ms {
                break;
            }

            clock.sleep_ms(bucket_ms);
            elapsed_ms = elapsed_ms.saturating_add(bucket_ms);

            if elapsed_ms >= requested_ms {
                break;
            }
        }
    }
}
