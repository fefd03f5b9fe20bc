//! Platform-agnostic trait abstractions
//!
//! Trait definitions are pure and have no feature gates. Implementations
//! live in [`crate::platform::mock`] and [`crate::platform::host`].

pub mod clock;

pub use clock::Clock;
