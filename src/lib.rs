#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! cooploop - Cooperative scheduling and logging core for single-threaded
//! control loops
//!
//! On a single-threaded target without preemptive multitasking, any code that
//! needs to wait (a multi-second pause between sensor readings, say) would
//! starve everything else unless the wait is broken into small increments
//! that also run pending background work. This crate provides the pieces for
//! that discipline:
//!
//! - [`core::scheduler`]: an ordered registry of background callbacks with a
//!   paused-except-critical mode, plus a delay scheduler that interleaves
//!   background passes with short sleeps while honoring a lower-bound wait.
//! - [`core::log_buffer`]: a fixed-capacity ring of timestamped log lines
//!   that silently overwrites its oldest entry when full.
//! - [`core::logging`]: line accumulation and interchangeable log sinks,
//!   selected at initialization time.
//! - [`platform`]: the [`Clock`](platform::traits::Clock) seam, a mock clock
//!   (always available for host testing), and a std-backed clock behind the
//!   `std` feature.

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

// Core systems: scheduler, log ring buffer, logging sinks, time formatting
pub mod core;

// Platform abstraction layer (Clock seam and its implementations)
pub mod platform;
