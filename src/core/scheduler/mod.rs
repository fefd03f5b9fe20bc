//! Cooperative background-task scheduling
//!
//! There is no preemption on the target: background work only runs when the
//! foreground explicitly gives it a turn. The pieces here are:
//!
//! - [`registry`]: ordered registry of background callbacks with a
//!   paused-except-critical mode ([`TaskRegistry`], [`Invocable`])
//! - [`delay`]: a foreground wait that interleaves background passes with
//!   short sleeps ([`DelayScheduler`])
//!
//! # Example
//!
//! ```
//! use cooploop::core::scheduler::{DelayScheduler, TaskRegistry};
//! use cooploop::platform::{Clock, MockClock};
//! use std::rc::Rc;
//!
//! let registry = Rc::new(TaskRegistry::new());
//! registry.register(|| { /* poll a peripheral */ });
//!
//! let clock = MockClock::new();
//! let scheduler = DelayScheduler::default();
//! scheduler.delay_with_background_tasks(&clock, &registry, 100);
//! assert!(clock.now_ms() >= 100);
//! ```

pub mod delay;
pub mod registry;

pub use delay::{ConfigError, DelayConfig, DelayScheduler, DELAY_BUCKET_MS};
pub use registry::{Invocable, PauseGuard, SchedulerStats, TaskRegistry};
