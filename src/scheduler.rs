//! Deferred task scheduling.
//!
//! Every timed behavior (preloader stages, ripple removal, toggle bounce)
//! goes through [`Scheduler`] so tests can drive time with a virtual clock
//! (`ManualScheduler`, test builds only) instead of waiting on the wall
//! clock. Scheduled tasks are never cancelled.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// A one-shot deferred callback.
pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Browser scheduler backed by `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}

#[cfg(test)]
struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
}

#[cfg(test)]
#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Virtual clock. Tasks run only when [`ManualScheduler::advance`] moves
/// time past their due point, in due order (ties by scheduling order).
#[cfg(test)]
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ClockState>>,
}

#[cfg(test)]
impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of tasks not yet run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Advance time by `ms`, running every task that falls due, including
    /// tasks scheduled by tasks run during this call.
    pub fn advance(&self, ms: u64) {
        let target = self.now().saturating_add(ms);
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.state.borrow_mut().now_ms = target;
    }

    fn pop_due(&self, target: u64) -> Option<Task> {
        let mut state = self.state.borrow_mut();
        let idx = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= target)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(idx, _)| idx)?;
        let next = state.pending.swap_remove(idx);
        state.now_ms = next.due_ms;
        Some(next.task)
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let mut state = self.state.borrow_mut();
        let due_ms = state.now_ms + u64::from(delay_ms);
        let seq = state.next_seq;
        state.next_seq += 1;
        state.pending.push(Pending { due_ms, seq, task });
    }
}
