//! Platform abstraction layer
//!
//! This module provides the clock abstraction the rest of the crate is
//! written against. All platform-specific code must stay isolated here.

pub mod traits;

// Platform implementations
#[cfg(feature = "std")]
pub mod host;

// Mock implementations are always available for host testing
pub mod mock;

// Re-export commonly used types
pub use traits::Clock;

#[cfg(feature = "std")]
pub use host::StdClock;
pub use mock::MockClock;
