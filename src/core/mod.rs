//! Core loop infrastructure
//!
//! This module contains the scheduling and logging components of the
//! cooperative loop: the task scheduler, the timestamped log ring buffer,
//! the logging sinks, and relative-time formatting.

pub mod log_buffer;
pub mod logging;
pub mod scheduler;
pub mod time_format;
