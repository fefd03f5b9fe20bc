//! Mock platform implementations for testing

pub mod clock;

pub use clock::MockClock;
