//! Background task registry
//!
//! An ordered, growable registry of callbacks invoked once per scheduling
//! pass. Registration order defines execution order and is never disturbed;
//! there is no deregistration. A paused registry still runs tasks registered
//! as critical, so work like servicing network requests keeps going while
//! non-critical duties are gated off during sensitive operations.
//!
//! All methods take `&self` so tasks holding a shared handle to the registry
//! (typically `Rc<TaskRegistry>`) can register further tasks or toggle the
//! pause flag from inside a running pass.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// A zero-argument background callback.
///
/// Blanket-implemented for closures, so `registry.register(|| ...)` works;
/// implement it directly to register a bound object.
pub trait Invocable {
    fn invoke(&mut self);
}

impl<F: FnMut()> Invocable for F {
    fn invoke(&mut self) {
        self()
    }
}

struct TaskEntry {
    invocable: Rc<RefCell<dyn Invocable>>,
    critical: bool,
}

/// Counters describing scheduler activity, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SchedulerStats {
    /// Total number of completed passes
    pub passes: u64,
    /// Total number of task invocations across all passes
    pub tasks_invoked: u64,
}

/// Ordered registry of background tasks with a paused-except-critical mode.
///
/// Tasks are appended at registration time and run in registration order,
/// once per [`run_pass`](Self::run_pass). Growth never drops or reorders
/// existing entries; capacity is bounded only by available memory, and
/// allocation failure aborts the process.
///
/// A pass iterates the count of tasks committed at its start: a task that
/// registers another task mid-pass sees the newcomer first participate in
/// the *next* pass.
pub struct TaskRegistry {
    tasks: RefCell<Vec<TaskEntry>>,
    paused: Cell<bool>,
    pause_depth: Cell<u32>,
    stats: Cell<SchedulerStats>,
}

impl TaskRegistry {
    /// Create an empty, unpaused registry.
    pub fn new() -> Self {
        Self {
            tasks: RefCell::new(Vec::new()),
            paused: Cell::new(false),
            pause_depth: Cell::new(0),
            stats: Cell::new(SchedulerStats::default()),
        }
    }

    /// Register a non-critical background task at the end of the sequence.
    pub fn register(&self, task: impl Invocable + 'static) {
        self.register_with(task, false);
    }

    /// Register a task that keeps running even while the registry is paused.
    pub fn register_critical(&self, task: impl Invocable + 'static) {
        self.register_with(task, true);
    }

    fn register_with(&self, task: impl Invocable + 'static, critical: bool) {
        let entry = TaskEntry {
            invocable: Rc::new(RefCell::new(task)),
            critical,
        };
        self.tasks.borrow_mut().push(entry);
    }

    /// Gate off non-critical tasks. Idempotent; persists until [`resume`](Self::resume).
    pub fn pause(&self) {
        self.paused.set(true);
    }

    /// Re-enable all tasks. Idempotent.
    pub fn resume(&self) {
        self.paused.set(false);
    }

    /// Whether the registry is currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused.get()
    }

    /// Pause for the duration of a scope; resumes when the guard drops.
    ///
    /// Used around sensitive operations such as an in-progress firmware
    /// update, where only critical tasks may keep running. Scopes nest: a
    /// depth count is kept and the registry resumes only when the outermost
    /// guard drops. A bare [`resume`](Self::resume) ignores the depth count
    /// and un-pauses immediately.
    pub fn pause_scope(&self) -> PauseGuard<'_> {
        self.pause_depth.set(self.pause_depth.get() + 1);
        self.pause();
        PauseGuard { registry: self }
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// True if no task has been registered.
    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Scheduler activity counters.
    pub fn stats(&self) -> SchedulerStats {
        self.stats.get()
    }

    /// Run one pass over the registered tasks in registration order.
    ///
    /// The pause state and the task count are snapshotted at pass start:
    /// when paused, only critical tasks are invoked (others are skipped, not
    /// removed); tasks registered mid-pass wait for the next pass. Panics
    /// from task bodies propagate uncaught.
    ///
    /// Calling `run_pass` recursively from inside a task is not supported
    /// and panics when the pass reaches the task that started it.
    pub fn run_pass(&self) {
        let committed = self.tasks.borrow().len();
        let paused = self.paused.get();
        let mut invoked: u64 = 0;

        for i in 0..committed {
            let invocable = {
                let tasks = self.tasks.borrow();
                let entry = &tasks[i];
                if paused && !entry.critical {
                    continue;
                }
                Rc::clone(&entry.invocable)
            };
            // Registry borrow is released here, so the task body may call
            // register/pause/resume on this registry.
            invocable.borrow_mut().invoke();
            invoked += 1;
        }

        let mut stats = self.stats.get();
        stats.passes += 1;
        stats.tasks_invoked += invoked;
        self.stats.set(stats);
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Resumes the registry when dropped. Created by [`TaskRegistry::pause_scope`].
pub struct PauseGuard<'a> {
    registry: &'a TaskRegistry,
}

impl Drop for PauseGuard<'_> {
    fn drop(&mut self) {
        let depth = self.registry.pause_depth.get().saturating_sub(1);
        self.registry.pause_depth.set(depth);
        if depth == 0 {
            self.registry.resume();
        }
    }
}
